use actix_web::web;
use crate::handlers::catalog_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .route("", web::get().to(catalog_handlers::list_products))
            .route("/{slug}", web::get().to(catalog_handlers::get_product))
    );
    cfg.service(
        web::scope("/api/categories")
            .route("", web::get().to(catalog_handlers::list_categories))
    );
    cfg.service(
        web::scope("/api/bank-accounts")
            .route("", web::get().to(catalog_handlers::list_bank_accounts))
    );
}
