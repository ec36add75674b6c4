use crate::models::entities::enum_types::PaymentStatus;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct InitiatePaymentResponse {
    #[schema(example = "https://checkout.chapa.co/checkout/payment/abc123")]
    pub checkout_url: String,
    #[schema(example = "Payment initialized successfully.")]
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyPaymentResponse {
    pub booking_id: Uuid,
    pub payment_status: PaymentStatus,
    /// Verification body exactly as returned by Chapa.
    #[schema(value_type = Object)]
    pub chapa_response: serde_json::Value,
}
