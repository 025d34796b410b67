use actix_web::web;
use crate::handlers::admin_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/admin")
            .route("/products", web::get().to(admin_handlers::list_products))
            .route("/products", web::post().to(admin_handlers::create_product))
            .route("/products/{id}", web::put().to(admin_handlers::update_product))
            .route("/products/{id}", web::delete().to(admin_handlers::delete_product))
            .route("/products/{id}/variants", web::get().to(admin_handlers::list_variants))
            .route("/products/{id}/variants", web::post().to(admin_handlers::create_variant))
            .route("/products/{id}/variants/{variant_id}", web::put().to(admin_handlers::update_variant))
            .route("/products/{id}/variants/{variant_id}", web::delete().to(admin_handlers::delete_variant))
            .route("/categories", web::get().to(admin_handlers::list_categories))
            .route("/categories", web::post().to(admin_handlers::create_category))
            .route("/categories/{id}", web::put().to(admin_handlers::update_category))
            .route("/categories/{id}", web::delete().to(admin_handlers::delete_category))
            .route("/bank-accounts", web::get().to(admin_handlers::list_bank_accounts))
            .route("/bank-accounts", web::post().to(admin_handlers::create_bank_account))
            .route("/bank-accounts/{id}", web::put().to(admin_handlers::update_bank_account))
            .route("/bank-accounts/{id}", web::delete().to(admin_handlers::delete_bank_account))
            .route("/users", web::get().to(admin_handlers::list_users))
            .route("/users/{id}", web::put().to(admin_handlers::update_user))
            .route("/users/{id}", web::delete().to(admin_handlers::delete_user))
            .route("/orders", web::get().to(admin_handlers::list_orders))
            .route("/orders/{order_number}/status", web::put().to(admin_handlers::update_order_status))
            .route("/orders/{order_number}/payment-status", web::put().to(admin_handlers::update_payment_status))
            .route("/bookings", web::get().to(admin_handlers::list_bookings))
            .route("/bookings/{id}/status", web::put().to(admin_handlers::update_booking_status))
    );
}
