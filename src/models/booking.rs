use serde::{Deserialize, Serialize};
use mongodb::bson::{self, oid::ObjectId};
use chrono::{DateTime, Utc};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub enum BookingStatus {
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "confirmed")]
    Confirmed,
    #[serde(rename = "cancelled")]
    Cancelled,
    #[serde(rename = "completed")]
    Completed,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "pending"),
            BookingStatus::Confirmed => write!(f, "confirmed"),
            BookingStatus::Cancelled => write!(f, "cancelled"),
            BookingStatus::Completed => write!(f, "completed"),
        }
    }
}

impl BookingStatus {
    /// The admin form offers the full enum and the update path writes whatever
    /// was selected. This only reports whether the write moves backwards
    /// (e.g. cancelled back to pending) so the operator action gets logged.
    pub fn is_regressive_from(&self, current: &BookingStatus) -> bool {
        matches!(
            (current, self),
            (BookingStatus::Cancelled, BookingStatus::Pending)
                | (BookingStatus::Cancelled, BookingStatus::Confirmed)
                | (BookingStatus::Completed, BookingStatus::Pending)
                | (BookingStatus::Completed, BookingStatus::Confirmed)
        )
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Booking {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub appointment_date: String,
    pub notes: Option<String>,
    pub status: BookingStatus,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

impl Booking {
    pub fn new(
        name: String,
        email: String,
        whatsapp: String,
        appointment_date: String,
        notes: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            name,
            email,
            whatsapp,
            appointment_date,
            notes,
            status: BookingStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub appointment_date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    #[serde(flatten)]
    pub booking: Booking,
    /// Deep-link the client may open to notify the store over WhatsApp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub whatsapp_link: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBookingStatusRequest {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regressive_transitions_flagged() {
        assert!(BookingStatus::Pending.is_regressive_from(&BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.is_regressive_from(&BookingStatus::Completed));
        assert!(!BookingStatus::Confirmed.is_regressive_from(&BookingStatus::Pending));
        assert!(!BookingStatus::Cancelled.is_regressive_from(&BookingStatus::Confirmed));
    }
}
