use actix_web::web;
use crate::handlers::cart_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/cart")
            .route("", web::get().to(cart_handlers::get_cart))
            .route("", web::delete().to(cart_handlers::clear_cart))
            .route("/items", web::post().to(cart_handlers::add_item))
            .route("/items/{item_id}", web::put().to(cart_handlers::update_quantity))
            .route("/items/{item_id}", web::delete().to(cart_handlers::remove_item))
            .route("/items/{item_id}/selected", web::put().to(cart_handlers::set_selected))
            .route("/selected", web::put().to(cart_handlers::set_all_selected))
    );
}
