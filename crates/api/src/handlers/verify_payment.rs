use axum::extract::{Json, Path, State};
use std::sync::Arc;
use travelapp_core::services::payment_service::PaymentService;
use travelapp_core::AppState;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::payment_dto::VerifyPaymentResponse;
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/verify-payment/{booking_id}/",
    params(("booking_id" = Uuid, Path, description = "Booking whose payment is checked")),
    responses(
        (status = 200, description = "Payment status refreshed from Chapa", body = VerifyPaymentResponse),
        (status = 400, description = "Rejected by Chapa"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Booking or payment not found"),
        (status = 502, description = "Chapa unreachable"),
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn verify_payment(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<VerifyPaymentResponse>, ApiError> {
    let response = PaymentService::verify_payment(&state, booking_id).await?;
    Ok(Json(response))
}
