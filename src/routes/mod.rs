mod admin_routes;
mod auth_routes;
mod booking_routes;
mod cart_routes;
mod catalog_routes;
mod order_routes;

pub use admin_routes::configure as configure_admin_routes;
pub use auth_routes::configure as configure_auth_routes;
pub use booking_routes::configure as configure_booking_routes;
pub use cart_routes::configure as configure_cart_routes;
pub use catalog_routes::configure as configure_catalog_routes;
pub use order_routes::configure as configure_order_routes;

pub fn configure(cfg: &mut actix_web::web::ServiceConfig) {
    configure_auth_routes(cfg);
    configure_catalog_routes(cfg);
    configure_cart_routes(cfg);
    configure_order_routes(cfg);
    configure_booking_routes(cfg);
    configure_admin_routes(cfg);
}
