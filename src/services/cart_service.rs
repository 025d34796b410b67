use std::sync::Arc;
use log::info;
use mongodb::bson::oid::ObjectId;
use uuid::Uuid;

use crate::models::cart::{AddToCartRequest, Cart, CartItem};
use crate::models::error::ApiError;
use crate::services::MongoDBService;

/// Cart workflow: every mutation loads the user's document, rewrites the
/// items array in memory, and persists the whole document back. There is no
/// merge between concurrent clients, the last writer wins.
pub struct CartService {
    mongodb_service: Arc<MongoDBService>,
}

impl CartService {
    pub fn new(mongodb_service: Arc<MongoDBService>) -> Self {
        Self { mongodb_service }
    }

    pub async fn get_cart(&self, user_id: &str) -> Result<Cart, ApiError> {
        Ok(self
            .mongodb_service
            .get_cart(user_id)
            .await?
            .unwrap_or_else(|| Cart::empty(user_id.to_string())))
    }

    pub async fn add_item(&self, user_id: &str, request: AddToCartRequest) -> Result<Cart, ApiError> {
        let product_id = ObjectId::parse_str(&request.product_id)
            .map_err(|_| ApiError::ValidationError("Invalid product id".to_string()))?;

        let product = self
            .mongodb_service
            .get_product_by_id(&product_id)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", request.product_id)))?;

        if !product.available {
            return Err(ApiError::ValidationError(format!(
                "Product {} is not available",
                product.name
            )));
        }

        // Variant price wins over the base price when a variant is chosen.
        let (price, size, color) = match &request.variant_id {
            Some(variant_id) => {
                let id = ObjectId::parse_str(variant_id)
                    .map_err(|_| ApiError::ValidationError("Invalid variant id".to_string()))?;
                let variant = self
                    .mongodb_service
                    .get_variant_by_id(&id)
                    .await?
                    .ok_or_else(|| ApiError::NotFound(format!("Variant {} not found", variant_id)))?;
                if variant.product_id != request.product_id {
                    return Err(ApiError::ValidationError(
                        "Variant does not belong to this product".to_string(),
                    ));
                }
                (variant.price, Some(variant.size), Some(variant.color))
            }
            None => (product.base_price, None, None),
        };

        let quantity = request.quantity.unwrap_or(1).max(1);
        let item = CartItem {
            item_id: Uuid::new_v4().to_string(),
            product_id: request.product_id.clone(),
            variant_id: request.variant_id.clone(),
            name: product.name.clone(),
            size,
            color,
            price,
            quantity,
            image_url: product.primary_image_url(),
            selected: true,
        };

        let mut cart = self.get_cart(user_id).await?;
        cart.add_item(item);
        self.mongodb_service.save_cart(&cart).await?;

        info!("Cart for user {} now has {} lines", user_id, cart.items.len());
        Ok(cart)
    }

    /// Quantities at or below zero remove the line.
    pub async fn update_quantity(&self, user_id: &str, item_id: &str, quantity: i64) -> Result<Cart, ApiError> {
        let mut cart = self.get_cart(user_id).await?;
        let clamped = quantity.max(0) as u32;

        if !cart.update_quantity(item_id, clamped) {
            return Err(ApiError::NotFound(format!("Cart item {} not found", item_id)));
        }

        self.mongodb_service.save_cart(&cart).await?;
        Ok(cart)
    }

    pub async fn remove_item(&self, user_id: &str, item_id: &str) -> Result<Cart, ApiError> {
        let mut cart = self.get_cart(user_id).await?;

        if !cart.remove_item(item_id) {
            return Err(ApiError::NotFound(format!("Cart item {} not found", item_id)));
        }

        self.mongodb_service.save_cart(&cart).await?;
        Ok(cart)
    }

    pub async fn set_selected(&self, user_id: &str, item_id: &str, selected: bool) -> Result<Cart, ApiError> {
        let mut cart = self.get_cart(user_id).await?;

        if !cart.set_selected(item_id, selected) {
            return Err(ApiError::NotFound(format!("Cart item {} not found", item_id)));
        }

        self.mongodb_service.save_cart(&cart).await?;
        Ok(cart)
    }

    pub async fn set_all_selected(&self, user_id: &str, selected: bool) -> Result<Cart, ApiError> {
        let mut cart = self.get_cart(user_id).await?;
        cart.set_all_selected(selected);
        self.mongodb_service.save_cart(&cart).await?;
        Ok(cart)
    }

    pub async fn clear(&self, user_id: &str) -> Result<(), ApiError> {
        self.mongodb_service.delete_cart(user_id).await
    }
}
