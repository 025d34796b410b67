use actix_web::{web, HttpRequest, HttpResponse};
use log::{info, warn};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use crate::models::bank_account::{BankAccount, CreateBankAccountRequest, UpdateBankAccountRequest};
use crate::models::booking::UpdateBookingStatusRequest;
use crate::models::category::{Category, CreateCategoryRequest, UpdateCategoryRequest};
use crate::models::error::ApiError;
use crate::models::order::{OrderListQuery, UpdateOrderStatusRequest, UpdatePaymentStatusRequest};
use crate::models::product::{
    CreateProductRequest, CreateVariantRequest, Product, ProductVariant, UpdateProductRequest,
    UpdateVariantRequest,
};
use crate::models::user::{UpdateUserRequest, UserProfile};
use crate::services::{AuthService, MongoDBService};
use crate::utils::order_number::normalize_order_number;
use crate::utils::slug::slugify;

fn parse_id(id: &str) -> Result<ObjectId, ApiError> {
    ObjectId::parse_str(id).map_err(|_| ApiError::ValidationError(format!("Invalid id: {}", id)))
}

// Product administration

pub async fn list_products(
    req: HttpRequest,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let products = db.get_all_products().await?;
    Ok(HttpResponse::Ok().json(products))
}

pub async fn create_product(
    req: HttpRequest,
    request: web::Json<CreateProductRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;

    if request.name.trim().is_empty() {
        return Err(ApiError::ValidationError("Product name is required".to_string()));
    }
    if request.base_price < 0 {
        return Err(ApiError::ValidationError("Price cannot be negative".to_string()));
    }

    let request = request.into_inner();
    let slug = match &request.slug {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => slugify(&request.name),
    };

    let now = chrono::Utc::now();
    let product = Product {
        id: None,
        slug,
        name: request.name.trim().to_string(),
        description: request.description,
        base_price: request.base_price,
        stock: request.stock,
        category_ids: request.category_ids,
        images: request.images,
        featured: request.featured,
        available: request.available,
        created_at: now,
        updated_at: now,
    };

    let created = db.create_product(product).await?;
    info!("Admin created product {}", created.slug);
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_product(
    req: HttpRequest,
    id: web::Path<String>,
    request: web::Json<UpdateProductRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let id = parse_id(&id)?;
    let updated = db.update_product(&id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_product(
    req: HttpRequest,
    id: web::Path<String>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let object_id = parse_id(&id)?;

    if !db.delete_product(&object_id).await? {
        return Err(ApiError::NotFound(format!("Product {} not found", id)));
    }

    info!("Admin deleted product {} and its variants", id);
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}

// Variant administration

pub async fn list_variants(
    req: HttpRequest,
    product_id: web::Path<String>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let variants = db.get_variants_for_product(&product_id).await?;
    Ok(HttpResponse::Ok().json(variants))
}

pub async fn create_variant(
    req: HttpRequest,
    product_id: web::Path<String>,
    request: web::Json<CreateVariantRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let object_id = parse_id(&product_id)?;

    // The parent must exist at creation time, later product deletes cascade.
    if db.get_product_by_id(&object_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("Product {} not found", product_id)));
    }

    let request = request.into_inner();
    let now = chrono::Utc::now();
    let variant = ProductVariant {
        id: None,
        product_id: product_id.into_inner(),
        size: request.size,
        color: request.color,
        price: request.price,
        stock: request.stock,
        created_at: now,
        updated_at: now,
    };

    let created = db.create_variant(variant).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_variant(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    request: web::Json<UpdateVariantRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let (_, variant_id) = path.into_inner();
    let id = parse_id(&variant_id)?;
    let updated = db.update_variant(&id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_variant(
    req: HttpRequest,
    path: web::Path<(String, String)>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let (_, variant_id) = path.into_inner();
    let id = parse_id(&variant_id)?;

    if !db.delete_variant(&id).await? {
        return Err(ApiError::NotFound(format!("Variant {} not found", variant_id)));
    }
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}

// Category administration

pub async fn list_categories(
    req: HttpRequest,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let categories = db.get_all_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}

pub async fn create_category(
    req: HttpRequest,
    request: web::Json<CreateCategoryRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;

    if request.name.trim().is_empty() {
        return Err(ApiError::ValidationError("Category name is required".to_string()));
    }

    let request = request.into_inner();
    let slug = match &request.slug {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => slugify(&request.name),
    };

    let created = db
        .create_category(Category::new(request.name.trim().to_string(), slug))
        .await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_category(
    req: HttpRequest,
    id: web::Path<String>,
    request: web::Json<UpdateCategoryRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let id = parse_id(&id)?;
    let updated = db.update_category(&id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_category(
    req: HttpRequest,
    id: web::Path<String>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let object_id = parse_id(&id)?;

    if !db.delete_category(&object_id).await? {
        return Err(ApiError::NotFound(format!("Category {} not found", id)));
    }
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}

// Bank account administration

pub async fn list_bank_accounts(
    req: HttpRequest,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let accounts = db.get_all_bank_accounts().await?;
    Ok(HttpResponse::Ok().json(accounts))
}

pub async fn create_bank_account(
    req: HttpRequest,
    request: web::Json<CreateBankAccountRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;

    if request.bank_name.trim().is_empty() || request.account_number.trim().is_empty() {
        return Err(ApiError::ValidationError(
            "Bank name and account number are required".to_string(),
        ));
    }

    let request = request.into_inner();
    let mut account = BankAccount::new(
        request.bank_name.trim().to_string(),
        request.account_number.trim().to_string(),
        request.account_holder.trim().to_string(),
    );
    account.is_active = request.is_active;

    let created = db.create_bank_account(account).await?;
    Ok(HttpResponse::Created().json(created))
}

pub async fn update_bank_account(
    req: HttpRequest,
    id: web::Path<String>,
    request: web::Json<UpdateBankAccountRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let id = parse_id(&id)?;
    let updated = db.update_bank_account(&id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(updated))
}

pub async fn delete_bank_account(
    req: HttpRequest,
    id: web::Path<String>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let object_id = parse_id(&id)?;

    if !db.delete_bank_account(&object_id).await? {
        return Err(ApiError::NotFound(format!("Bank account {} not found", id)));
    }
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}

// User administration

pub async fn list_users(
    req: HttpRequest,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let users = db.get_all_users().await?;
    let profiles: Vec<UserProfile> = users.iter().map(UserProfile::from).collect();
    Ok(HttpResponse::Ok().json(profiles))
}

pub async fn update_user(
    req: HttpRequest,
    id: web::Path<String>,
    request: web::Json<UpdateUserRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let id = parse_id(&id)?;
    let updated = db.update_user(&id, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserProfile::from(&updated)))
}

pub async fn delete_user(
    req: HttpRequest,
    id: web::Path<String>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.require_admin(&req)?;
    if claims.sub == *id {
        return Err(ApiError::ValidationError(
            "Admins cannot delete their own account".to_string(),
        ));
    }

    let object_id = parse_id(&id)?;
    if !db.delete_user(&object_id).await? {
        return Err(ApiError::NotFound(format!("User {} not found", id)));
    }
    Ok(HttpResponse::Ok().json(json!({ "deleted": true })))
}

// Order administration

pub async fn list_orders(
    req: HttpRequest,
    query: web::Query<OrderListQuery>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let orders = db.get_all_orders(query.into_inner().status).await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn update_order_status(
    req: HttpRequest,
    order_number: web::Path<String>,
    request: web::Json<UpdateOrderStatusRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let normalized = normalize_order_number(&order_number);

    let updated = db
        .update_order_status(&normalized, request.into_inner().status)
        .await?;
    info!("Order {} moved to status {}", normalized, updated.status);
    Ok(HttpResponse::Ok().json(updated))
}

/// Manual verification of an uploaded transfer proof. The operator looks at
/// the image and flips verification_pending to paid (or back to unpaid).
pub async fn update_payment_status(
    req: HttpRequest,
    order_number: web::Path<String>,
    request: web::Json<UpdatePaymentStatusRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let normalized = normalize_order_number(&order_number);

    let updated = db
        .update_payment_status(&normalized, request.into_inner().payment_status)
        .await?;
    info!(
        "Order {} payment status set to {}",
        normalized, updated.payment_status
    );
    Ok(HttpResponse::Ok().json(updated))
}

// Booking administration

pub async fn list_bookings(
    req: HttpRequest,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let bookings = db.get_all_bookings().await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// Any of the four statuses may be written regardless of the current one,
/// the dropdown offers the whole enum. Backwards moves are only logged.
pub async fn update_booking_status(
    req: HttpRequest,
    id: web::Path<String>,
    request: web::Json<UpdateBookingStatusRequest>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    auth.require_admin(&req)?;
    let object_id = parse_id(&id)?;
    let new_status = request.into_inner().status;

    let current = db
        .get_booking_by_id(&object_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Booking {} not found", id)))?;

    if new_status.is_regressive_from(&current.status) {
        warn!(
            "Booking {} moved backwards: {} -> {}",
            id, current.status, new_status
        );
    }

    let updated = db.update_booking_status(&object_id, new_status).await?;
    Ok(HttpResponse::Ok().json(updated))
}
