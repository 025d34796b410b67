use std::sync::Arc;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use chrono::{DateTime, Utc};
use log::{error, info, warn};

use crate::models::error::ApiError;
use crate::models::order::{
    ConfirmPaymentRequest, ConfirmPaymentResponse, CreateOrderRequest, Order, OrderItem,
    OrderStatus, PaymentDetails, PaymentStatus,
};
use crate::services::{MongoDBService, StorageService};
use crate::services::storage_service::StorageError;
use crate::utils::order_number::{generate_order_number, normalize_order_number};
use crate::utils::whatsapp;

const PROOF_FOLDER: &str = "payment-proofs";

pub struct OrderService {
    mongodb_service: Arc<MongoDBService>,
    storage_service: Arc<StorageService>,
    /// Operator number the confirmation deep-link opens a chat with.
    store_whatsapp: String,
}

impl OrderService {
    pub fn new(
        mongodb_service: Arc<MongoDBService>,
        storage_service: Arc<StorageService>,
        store_whatsapp: String,
    ) -> Self {
        Self {
            mongodb_service,
            storage_service,
            store_whatsapp,
        }
    }

    /// Checkout over the selected cart lines. Stock is not decremented here,
    /// the operator reconciles it while verifying the transfer.
    pub async fn checkout(&self, user_id: &str, request: CreateOrderRequest) -> Result<Order, ApiError> {
        validate_shipping(&request)?;

        let mut cart = self
            .mongodb_service
            .get_cart(user_id)
            .await?
            .ok_or_else(|| ApiError::ValidationError("Cart is empty".to_string()))?;

        let selected = cart.selected_items();
        if selected.is_empty() {
            return Err(ApiError::ValidationError(
                "No items selected for checkout".to_string(),
            ));
        }

        let items: Vec<OrderItem> = selected
            .iter()
            .map(|line| OrderItem {
                product_id: line.product_id.clone(),
                variant_id: line.variant_id.clone(),
                name: line.name.clone(),
                size: line.size.clone(),
                color: line.color.clone(),
                price: line.price,
                quantity: line.quantity,
                image_url: line.image_url.clone(),
            })
            .collect();

        let subtotal = cart.selected_total();
        let now = Utc::now();
        let order = Order {
            id: None,
            user_id: user_id.to_string(),
            order_number: generate_order_number(now),
            shipping_address: request.shipping_address,
            items,
            subtotal,
            total_amount: subtotal,
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            payment_details: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.mongodb_service.create_order(order).await?;
        info!(
            "Created order {} for user {} ({} items, total {})",
            created.order_number,
            user_id,
            created.items.len(),
            created.total_amount
        );

        // Purchased lines leave the cart, unselected ones stay.
        cart.remove_selected();
        self.mongodb_service.save_cart(&cart).await?;

        Ok(created)
    }

    /// Payment confirmation: validate, upload the proof, write the payment
    /// fields onto the order, hand back a WhatsApp deep-link for the client
    /// to open. Each step reports independently; a proof that uploaded before
    /// a failing order update is left behind on the CDN and only logged.
    pub async fn confirm_payment(
        &self,
        user_id: &str,
        is_admin: bool,
        request: ConfirmPaymentRequest,
    ) -> Result<ConfirmPaymentResponse, ApiError> {
        validate_confirmation(&request)?;

        let order_number = normalize_order_number(&request.order_number);
        let order = self
            .mongodb_service
            .get_order_by_number(&order_number)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Order {} not found", order_number)))?;

        if order.user_id != user_id && !is_admin {
            return Err(ApiError::Forbidden(
                "Order belongs to a different user".to_string(),
            ));
        }

        let bytes = BASE64
            .decode(request.data.as_bytes())
            .map_err(|_| ApiError::ValidationError("File data is not valid base64".to_string()))?;

        StorageService::validate_image(&request.content_type, bytes.len()).map_err(|e| match e {
            StorageError::UnsupportedType(_) | StorageError::TooLarge(_) => {
                ApiError::ValidationError(e.to_string())
            }
            other => ApiError::StorageError(other.to_string()),
        })?;

        let now = Utc::now();
        let file_name = proof_file_name(&order_number, now, &request.file_name);

        let proof_url = self
            .storage_service
            .upload(PROOF_FOLDER, &file_name, &request.content_type, bytes)
            .await
            .map_err(|e| {
                error!("Proof upload failed for order {}: {}", order_number, e);
                ApiError::StorageError(e.to_string())
            })?;

        let details = PaymentDetails {
            sender_name: request.sender_name.trim().to_string(),
            sender_bank: request.sender_bank.trim().to_string(),
            bank_account_id: request.bank_account_id.clone(),
            proof_url: proof_url.clone(),
            submitted_at: now,
        };

        let updated = match self
            .mongodb_service
            .attach_payment_details(&order_number, details)
            .await
        {
            Ok(order) => order,
            Err(e) => {
                // No compensating delete, the uploaded proof stays orphaned.
                warn!(
                    "Order {} update failed after proof upload, orphaned file at {}",
                    order_number, proof_url
                );
                return Err(e);
            }
        };

        let message = whatsapp::payment_confirmation_message(
            &updated.order_number,
            updated.total_amount,
            &updated.payment_details.as_ref().map(|d| d.sender_name.clone()).unwrap_or_default(),
        );
        let whatsapp_link = whatsapp::deep_link(&self.store_whatsapp, &message);

        info!(
            "Payment proof recorded for order {}, awaiting manual verification",
            updated.order_number
        );

        Ok(ConfirmPaymentResponse {
            order_number: updated.order_number,
            payment_status: updated.payment_status,
            proof_url,
            whatsapp_link,
        })
    }
}

fn validate_shipping(request: &CreateOrderRequest) -> Result<(), ApiError> {
    let address = &request.shipping_address;
    let required = [
        (&address.recipient_name, "recipient name"),
        (&address.phone, "phone"),
        (&address.street, "street"),
        (&address.city, "city"),
        (&address.province, "province"),
        (&address.postal_code, "postal code"),
    ];
    for (value, label) in required {
        if value.trim().is_empty() {
            return Err(ApiError::ValidationError(format!(
                "Shipping {} is required",
                label
            )));
        }
    }
    Ok(())
}

/// Sender name, sender bank, and a file are all required before any network
/// step runs.
fn validate_confirmation(request: &ConfirmPaymentRequest) -> Result<(), ApiError> {
    if request.sender_name.trim().is_empty() {
        return Err(ApiError::ValidationError("Sender name is required".to_string()));
    }
    if request.sender_bank.trim().is_empty() {
        return Err(ApiError::ValidationError("Sender bank is required".to_string()));
    }
    if request.data.trim().is_empty() {
        return Err(ApiError::ValidationError("Proof file is required".to_string()));
    }
    Ok(())
}

/// Proof files are named after the order and the upload moment so repeated
/// submissions never overwrite each other.
fn proof_file_name(order_number: &str, now: DateTime<Utc>, original_name: &str) -> String {
    let extension = original_name
        .rsplit('.')
        .next()
        .filter(|ext| !ext.is_empty() && ext.len() <= 5 && !ext.contains('/'))
        .unwrap_or("jpg")
        .to_lowercase();
    format!("{}-{}.{}", order_number, now.timestamp(), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use crate::models::order::ShippingAddress;

    fn confirmation(sender_name: &str, sender_bank: &str, data: &str) -> ConfirmPaymentRequest {
        ConfirmPaymentRequest {
            order_number: "ORD-20260804-7KQ2M".to_string(),
            sender_name: sender_name.to_string(),
            sender_bank: sender_bank.to_string(),
            bank_account_id: None,
            file_name: "bukti.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            data: data.to_string(),
        }
    }

    #[test]
    fn test_confirmation_requires_all_fields() {
        assert!(validate_confirmation(&confirmation("Budi", "BCA", "aGVsbG8=")).is_ok());
        assert!(validate_confirmation(&confirmation("", "BCA", "aGVsbG8=")).is_err());
        assert!(validate_confirmation(&confirmation("Budi", "  ", "aGVsbG8=")).is_err());
        assert!(validate_confirmation(&confirmation("Budi", "BCA", "")).is_err());
    }

    #[test]
    fn test_proof_file_name_derives_from_order_and_timestamp() {
        let now = Utc.with_ymd_and_hms(2026, 8, 4, 10, 30, 0).unwrap();
        let name = proof_file_name("ORD-20260804-7KQ2M", now, "bukti transfer.PNG");
        assert_eq!(name, format!("ORD-20260804-7KQ2M-{}.png", now.timestamp()));
    }

    #[test]
    fn test_proof_file_name_falls_back_to_jpg() {
        let now = Utc.with_ymd_and_hms(2026, 8, 4, 10, 30, 0).unwrap();
        let name = proof_file_name("ORD-20260804-7KQ2M", now, "noextension");
        assert!(name.ends_with(".jpg"));
    }

    #[test]
    fn test_shipping_validation() {
        let request = CreateOrderRequest {
            shipping_address: ShippingAddress {
                recipient_name: "Ayu".to_string(),
                phone: "08123456789".to_string(),
                street: "Jl. Melati 1".to_string(),
                city: "Bandung".to_string(),
                province: "Jawa Barat".to_string(),
                postal_code: "40111".to_string(),
            },
        };
        assert!(validate_shipping(&request).is_ok());

        let mut missing = request;
        missing.shipping_address.city = " ".to_string();
        assert!(validate_shipping(&missing).is_err());
    }
}
