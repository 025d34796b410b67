use actix_web::web;
use crate::handlers::booking_handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/bookings")
            .route("", web::post().to(booking_handlers::create_booking))
    );
}
