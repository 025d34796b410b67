use crate::models::product::{Product, ProductQuery};

/// In-memory filter and sort over the fetched product list. The storefront
/// always pulls the available set and narrows it here, mirroring the query
/// predicates the catalog screens compose.
pub fn filter_and_sort(mut products: Vec<Product>, query: &ProductQuery) -> Vec<Product> {
    if let Some(category) = &query.category {
        products.retain(|p| p.category_ids.iter().any(|id| id == category));
    }

    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        if !needle.is_empty() {
            products.retain(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
            });
        }
    }

    if let Some(min_price) = query.min_price {
        products.retain(|p| p.base_price >= min_price);
    }
    if let Some(max_price) = query.max_price {
        products.retain(|p| p.base_price <= max_price);
    }

    if let Some(featured) = query.featured {
        products.retain(|p| p.featured == featured);
    }

    match query.sort.as_deref() {
        Some("price_asc") => products.sort_by_key(|p| p.base_price),
        Some("price_desc") => {
            products.sort_by_key(|p| p.base_price);
            products.reverse();
        }
        Some("name") => products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        // "newest" and anything unrecognized
        _ => products.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    products
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn product(name: &str, price: i64, categories: &[&str], featured: bool, age_days: i64) -> Product {
        let created = Utc::now() - Duration::days(age_days);
        Product {
            id: None,
            slug: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            description: format!("{} description", name),
            base_price: price,
            stock: 10,
            category_ids: categories.iter().map(|c| c.to_string()).collect(),
            images: vec![],
            featured,
            available: true,
            created_at: created,
            updated_at: created,
        }
    }

    #[test]
    fn test_filter_by_category() {
        let products = vec![
            product("Linen Shirt", 150000, &["tops"], false, 1),
            product("Denim Skirt", 200000, &["bottoms"], false, 2),
        ];

        let query = ProductQuery { category: Some("tops".to_string()), ..Default::default() };
        let result = filter_and_sort(products, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Linen Shirt");
    }

    #[test]
    fn test_search_matches_name_and_description() {
        let products = vec![
            product("Linen Shirt", 150000, &[], false, 1),
            product("Denim Skirt", 200000, &[], false, 2),
        ];

        let query = ProductQuery { search: Some("denim".to_string()), ..Default::default() };
        let result = filter_and_sort(products, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Denim Skirt");
    }

    #[test]
    fn test_price_range_and_featured() {
        let products = vec![
            product("Linen Shirt", 150000, &[], true, 1),
            product("Denim Skirt", 200000, &[], false, 2),
            product("Silk Scarf", 80000, &[], true, 3),
        ];

        let query = ProductQuery {
            min_price: Some(100000),
            max_price: Some(250000),
            featured: Some(true),
            ..Default::default()
        };
        let result = filter_and_sort(products, &query);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Linen Shirt");
    }

    #[test]
    fn test_sort_orders() {
        let products = vec![
            product("B Dress", 200000, &[], false, 2),
            product("A Dress", 100000, &[], false, 3),
            product("C Dress", 300000, &[], false, 1),
        ];

        let by_price = filter_and_sort(products.clone(), &ProductQuery {
            sort: Some("price_asc".to_string()),
            ..Default::default()
        });
        assert_eq!(by_price[0].base_price, 100000);
        assert_eq!(by_price[2].base_price, 300000);

        let by_name = filter_and_sort(products.clone(), &ProductQuery {
            sort: Some("name".to_string()),
            ..Default::default()
        });
        assert_eq!(by_name[0].name, "A Dress");

        // default: newest first
        let newest = filter_and_sort(products, &ProductQuery::default());
        assert_eq!(newest[0].name, "C Dress");
    }
}
