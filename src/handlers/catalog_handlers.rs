use actix_web::{web, HttpResponse};
use log::info;

use crate::models::error::ApiError;
use crate::models::product::{ProductDetailResponse, ProductQuery};
use crate::services::MongoDBService;
use crate::utils::product_filter::filter_and_sort;

/// Storefront product listing. The available set is fetched and narrowed in
/// memory, there is no query translation beyond that.
pub async fn list_products(
    query: web::Query<ProductQuery>,
    db: web::Data<MongoDBService>,
) -> Result<HttpResponse, ApiError> {
    let products = db.get_available_products().await?;
    let filtered = filter_and_sort(products, &query);

    info!("Catalog listing returned {} products", filtered.len());
    Ok(HttpResponse::Ok().json(filtered))
}

pub async fn get_product(
    slug: web::Path<String>,
    db: web::Data<MongoDBService>,
) -> Result<HttpResponse, ApiError> {
    let product = db
        .get_product_by_slug(&slug)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Product {} not found", slug)))?;

    let product_id = product.id.map(|id| id.to_hex()).unwrap_or_default();
    let variants = db.get_variants_for_product(&product_id).await?;

    Ok(HttpResponse::Ok().json(ProductDetailResponse { product, variants }))
}

pub async fn list_categories(db: web::Data<MongoDBService>) -> Result<HttpResponse, ApiError> {
    let categories = db.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

/// Active accounts only, shown on the payment instructions screen.
pub async fn list_bank_accounts(db: web::Data<MongoDBService>) -> Result<HttpResponse, ApiError> {
    let accounts = db.get_active_bank_accounts().await?;
    Ok(HttpResponse::Ok().json(accounts))
}
