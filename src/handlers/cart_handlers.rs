use actix_web::{web, HttpRequest, HttpResponse};

use crate::models::cart::{AddToCartRequest, CartResponse, SetSelectedRequest, UpdateQuantityRequest};
use crate::models::error::ApiError;
use crate::services::{AuthService, CartService};

pub async fn get_cart(
    req: HttpRequest,
    cart_service: web::Data<CartService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let cart = cart_service.get_cart(&claims.sub).await?;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

pub async fn add_item(
    req: HttpRequest,
    request: web::Json<AddToCartRequest>,
    cart_service: web::Data<CartService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let cart = cart_service.add_item(&claims.sub, request.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

pub async fn update_quantity(
    req: HttpRequest,
    item_id: web::Path<String>,
    request: web::Json<UpdateQuantityRequest>,
    cart_service: web::Data<CartService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let cart = cart_service
        .update_quantity(&claims.sub, &item_id, request.quantity)
        .await?;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

pub async fn remove_item(
    req: HttpRequest,
    item_id: web::Path<String>,
    cart_service: web::Data<CartService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let cart = cart_service.remove_item(&claims.sub, &item_id).await?;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

pub async fn set_selected(
    req: HttpRequest,
    item_id: web::Path<String>,
    request: web::Json<SetSelectedRequest>,
    cart_service: web::Data<CartService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let cart = cart_service
        .set_selected(&claims.sub, &item_id, request.selected)
        .await?;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

pub async fn set_all_selected(
    req: HttpRequest,
    request: web::Json<SetSelectedRequest>,
    cart_service: web::Data<CartService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    let cart = cart_service.set_all_selected(&claims.sub, request.selected).await?;
    Ok(HttpResponse::Ok().json(CartResponse::from(&cart)))
}

pub async fn clear_cart(
    req: HttpRequest,
    cart_service: web::Data<CartService>,
    auth: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let claims = auth.authenticate(&req)?;
    cart_service.clear(&claims.sub).await?;
    Ok(HttpResponse::NoContent().finish())
}
