use serde::{Deserialize, Serialize};
use mongodb::bson::{self, oid::ObjectId};
use chrono::{DateTime, Utc};

fn default_available() -> bool {
    true
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductImage {
    pub url: String,
    pub alt: Option<String>,
    /// Advisory flag for the storefront, storage does not enforce uniqueness.
    #[serde(default)]
    pub is_primary: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub slug: String,
    pub name: String,
    pub description: String,
    /// Price in store currency units (e.g. 100000 = Rp 100.000).
    pub base_price: i64,
    pub stock: i32,
    #[serde(default)]
    pub category_ids: Vec<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_available")]
    pub available: bool,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    pub fn primary_image_url(&self) -> Option<String> {
        self.images
            .iter()
            .find(|img| img.is_primary)
            .or_else(|| self.images.first())
            .map(|img| img.url.clone())
    }
}

/// Variant documents reference their product by id, they are not embedded.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProductVariant {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub product_id: String,
    pub size: String,
    pub color: String,
    pub price: i64,
    pub stock: i32,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: Product,
    pub variants: Vec<ProductVariant>,
}

#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub slug: Option<String>,
    pub description: String,
    pub base_price: i64,
    pub stock: i32,
    #[serde(default)]
    pub category_ids: Vec<String>,
    #[serde(default)]
    pub images: Vec<ProductImage>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_available")]
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub base_price: Option<i64>,
    pub stock: Option<i32>,
    pub category_ids: Option<Vec<String>>,
    pub images: Option<Vec<ProductImage>>,
    pub featured: Option<bool>,
    pub available: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct CreateVariantRequest {
    pub size: String,
    pub color: String,
    pub price: i64,
    pub stock: i32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateVariantRequest {
    pub size: Option<String>,
    pub color: Option<String>,
    pub price: Option<i64>,
    pub stock: Option<i32>,
}

/// Query parameters accepted by the public product listing.
#[derive(Debug, Deserialize, Default)]
pub struct ProductQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub min_price: Option<i64>,
    pub max_price: Option<i64>,
    pub featured: Option<bool>,
    pub sort: Option<String>,
}
