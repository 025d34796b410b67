use actix_web::web;
use crate::handlers::order_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/orders")
            .route("", web::post().to(order_handlers::create_order))
            .route("", web::get().to(order_handlers::list_my_orders))
            .route("/{order_number}", web::get().to(order_handlers::get_order))
    );
    cfg.route(
        "/api/upload-payment-proof",
        web::post().to(order_handlers::upload_payment_proof),
    );
}
