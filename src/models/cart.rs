use serde::{Deserialize, Serialize};
use mongodb::bson::{self, oid::ObjectId};
use chrono::{DateTime, Utc};

fn default_selected() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CartItem {
    /// Line id, addressable from the client when updating or removing.
    pub item_id: String,
    pub product_id: String,
    pub variant_id: Option<String>,
    pub name: String,
    pub size: Option<String>,
    pub color: Option<String>,
    pub price: i64,
    pub quantity: u32,
    pub image_url: Option<String>,
    #[serde(default = "default_selected")]
    pub selected: bool,
}

/// One cart document per user. Every mutation rewrites the whole document,
/// concurrent clients resolve by last write wins.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Cart {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: String,
    pub items: Vec<CartItem>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn empty(user_id: String) -> Self {
        Self {
            id: None,
            user_id,
            items: Vec::new(),
            updated_at: Utc::now(),
        }
    }

    /// Merges by (product_id, variant_id) or appends a new line.
    pub fn add_item(&mut self, item: CartItem) {
        if let Some(existing) = self.items.iter_mut().find(|line| {
            line.product_id == item.product_id && line.variant_id == item.variant_id
        }) {
            existing.quantity += item.quantity;
        } else {
            self.items.push(item);
        }
        self.updated_at = Utc::now();
    }

    /// Replaces the line quantity, a quantity of zero removes the line.
    /// Returns false when no line matches.
    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) -> bool {
        let Some(index) = self.items.iter().position(|line| line.item_id == item_id) else {
            return false;
        };
        if quantity == 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = quantity;
        }
        self.updated_at = Utc::now();
        true
    }

    pub fn remove_item(&mut self, item_id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|line| line.item_id != item_id);
        self.updated_at = Utc::now();
        self.items.len() != before
    }

    pub fn set_selected(&mut self, item_id: &str, selected: bool) -> bool {
        let Some(line) = self.items.iter_mut().find(|line| line.item_id == item_id) else {
            return false;
        };
        line.selected = selected;
        self.updated_at = Utc::now();
        true
    }

    pub fn set_all_selected(&mut self, selected: bool) {
        for line in &mut self.items {
            line.selected = selected;
        }
        self.updated_at = Utc::now();
    }

    pub fn selected_items(&self) -> Vec<&CartItem> {
        self.items.iter().filter(|line| line.selected).collect()
    }

    pub fn total(&self) -> i64 {
        self.items
            .iter()
            .map(|line| line.price * i64::from(line.quantity))
            .sum()
    }

    pub fn selected_total(&self) -> i64 {
        self.items
            .iter()
            .filter(|line| line.selected)
            .map(|line| line.price * i64::from(line.quantity))
            .sum()
    }

    /// Drops the selected lines after they have been snapshotted into an order.
    pub fn remove_selected(&mut self) {
        self.items.retain(|line| !line.selected);
        self.updated_at = Utc::now();
    }
}

#[derive(Debug, Deserialize)]
pub struct AddToCartRequest {
    pub product_id: String,
    pub variant_id: Option<String>,
    pub quantity: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub struct SetSelectedRequest {
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub total: i64,
    pub selected_total: i64,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        Self {
            items: cart.items.clone(),
            total: cart.total(),
            selected_total: cart.selected_total(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(item_id: &str, product_id: &str, variant_id: Option<&str>, price: i64, quantity: u32) -> CartItem {
        CartItem {
            item_id: item_id.to_string(),
            product_id: product_id.to_string(),
            variant_id: variant_id.map(|v| v.to_string()),
            name: "Linen Shirt".to_string(),
            size: Some("M".to_string()),
            color: Some("White".to_string()),
            price,
            quantity,
            image_url: None,
            selected: true,
        }
    }

    #[test]
    fn test_add_merges_same_product_and_variant() {
        let mut cart = Cart::empty("user-1".to_string());
        cart.add_item(line("a", "p1", Some("v1"), 100000, 1));
        cart.add_item(line("b", "p1", Some("v1"), 100000, 1));

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total(), 200000);
    }

    #[test]
    fn test_add_appends_different_variant() {
        let mut cart = Cart::empty("user-1".to_string());
        cart.add_item(line("a", "p1", Some("v1"), 100000, 1));
        cart.add_item(line("b", "p1", Some("v2"), 120000, 1));

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total(), 220000);
    }

    #[test]
    fn test_quantity_zero_removes_line() {
        let mut cart = Cart::empty("user-1".to_string());
        cart.add_item(line("a", "p1", None, 100000, 2));

        assert!(cart.update_quantity("a", 0));
        assert!(cart.items.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = Cart::empty("user-1".to_string());
        cart.add_item(line("a", "p1", None, 100000, 1));

        assert!(cart.update_quantity("a", 3));
        assert_eq!(cart.items[0].quantity, 3);
        assert_eq!(cart.total(), 300000);
        assert!(!cart.update_quantity("missing", 3));
    }

    #[test]
    fn test_add_then_remove_roundtrip() {
        let mut cart = Cart::empty("user-1".to_string());
        cart.add_item(line("a", "p1", None, 100000, 1));
        assert_eq!(cart.total(), 100000);

        cart.add_item(line("b", "p1", None, 100000, 1));
        assert_eq!(cart.items[0].quantity, 2);
        assert_eq!(cart.total(), 200000);

        let item_id = cart.items[0].item_id.clone();
        assert!(cart.remove_item(&item_id));
        assert!(cart.items.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_selection_toggles_membership() {
        let mut cart = Cart::empty("user-1".to_string());
        cart.add_item(line("a", "p1", None, 100000, 1));
        cart.add_item(line("b", "p2", None, 50000, 2));

        assert!(cart.set_selected("a", false));
        assert_eq!(cart.selected_items().len(), 1);
        assert_eq!(cart.selected_total(), 100000);

        cart.set_all_selected(false);
        assert!(cart.selected_items().is_empty());
        assert_eq!(cart.selected_total(), 0);

        cart.set_all_selected(true);
        assert_eq!(cart.selected_items().len(), 2);
        assert_eq!(cart.selected_total(), 200000);
    }

    #[test]
    fn test_remove_selected_keeps_unselected_lines() {
        let mut cart = Cart::empty("user-1".to_string());
        cart.add_item(line("a", "p1", None, 100000, 1));
        cart.add_item(line("b", "p2", None, 50000, 1));
        cart.set_selected("b", false);

        cart.remove_selected();
        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].item_id, "b");
    }
}
