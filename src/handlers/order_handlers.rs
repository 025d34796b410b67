use actix_web::{web, HttpRequest, HttpResponse};
use log::info;

use crate::models::error::ApiError;
use crate::models::order::{ConfirmPaymentRequest, CreateOrderRequest, CreateOrderResponse};
use crate::models::user::UserRole;
use crate::services::{AuthService, MongoDBService, OrderService};
use crate::utils::order_number::normalize_order_number;

pub async fn create_order(
    req: HttpRequest,
    request: web::Json<CreateOrderRequest>,
    order_service: web::Data<OrderService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let order = order_service.checkout(&claims.sub, request.into_inner()).await?;

    Ok(HttpResponse::Created().json(CreateOrderResponse {
        order_number: order.order_number,
        subtotal: order.subtotal,
        total_amount: order.total_amount,
        status: order.status,
        payment_status: order.payment_status,
    }))
}

pub async fn list_my_orders(
    req: HttpRequest,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let orders = db.get_orders_for_user(&claims.sub).await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn get_order(
    req: HttpRequest,
    order_number: web::Path<String>,
    db: web::Data<MongoDBService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let normalized = normalize_order_number(&order_number);

    let order = db
        .get_order_by_number(&normalized)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", normalized)))?;

    if order.user_id != claims.sub && claims.role != UserRole::Admin {
        return Err(ApiError::Forbidden("Order belongs to a different user".to_string()));
    }

    Ok(HttpResponse::Ok().json(order))
}

/// `/api/upload-payment-proof`: the buyer submits the transfer evidence and
/// gets back the WhatsApp deep-link that notifies the operator.
pub async fn upload_payment_proof(
    req: HttpRequest,
    request: web::Json<ConfirmPaymentRequest>,
    order_service: web::Data<OrderService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    info!(
        "Payment proof submitted for order {} by user {}",
        request.order_number, claims.sub
    );

    let is_admin = claims.role == UserRole::Admin;
    let response = order_service
        .confirm_payment(&claims.sub, is_admin, request.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(response))
}
