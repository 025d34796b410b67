use actix_web::{web, HttpResponse};
use log::info;

use crate::config::AppConfig;
use crate::models::booking::{Booking, BookingResponse, CreateBookingRequest};
use crate::models::error::ApiError;
use crate::services::MongoDBService;
use crate::utils::whatsapp;

/// Appointment requests arrive unauthenticated from the storefront form.
/// Every required field must be present, the error body matches what the
/// form displays inline.
fn validate_booking(request: &CreateBookingRequest) -> Result<(), ApiError> {
    let required = [
        &request.name,
        &request.email,
        &request.whatsapp,
        &request.appointment_date,
    ];
    if required.iter().any(|value| value.trim().is_empty()) {
        return Err(ApiError::ValidationError("Invalid input".to_string()));
    }
    if !request.email.contains('@') {
        return Err(ApiError::ValidationError("Invalid input".to_string()));
    }
    Ok(())
}

pub async fn create_booking(
    request: web::Json<CreateBookingRequest>,
    db: web::Data<MongoDBService>,
    config: web::Data<AppConfig>,
) -> Result<HttpResponse, ApiError> {
    validate_booking(&request)?;

    let booking = Booking::new(
        request.name.trim().to_string(),
        request.email.trim().to_lowercase(),
        request.whatsapp.trim().to_string(),
        request.appointment_date.trim().to_string(),
        request.notes.clone(),
    );

    let created = db.create_booking(booking).await?;
    info!(
        "Booking created for {} on {}",
        created.name, created.appointment_date
    );

    let message = whatsapp::booking_message(&created.name, &created.appointment_date);
    let whatsapp_link = Some(whatsapp::deep_link(&config.store_whatsapp, &message));

    Ok(HttpResponse::Created().json(BookingResponse {
        booking: created,
        whatsapp_link,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn booking_request(whatsapp: &str) -> CreateBookingRequest {
        CreateBookingRequest {
            name: "Ayu".to_string(),
            email: "ayu@example.com".to_string(),
            whatsapp: whatsapp.to_string(),
            appointment_date: "2026-08-10".to_string(),
            notes: None,
        }
    }

    #[test]
    fn test_empty_whatsapp_is_invalid_input() {
        let err = validate_booking(&booking_request("")).unwrap_err();
        assert_eq!(err.to_string(), "Invalid input");
    }

    #[test]
    fn test_complete_booking_passes() {
        assert!(validate_booking(&booking_request("+6281234567890")).is_ok());
    }
}
