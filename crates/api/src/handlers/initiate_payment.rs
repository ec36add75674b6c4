use axum::extract::{Json, Path, State};
use std::sync::Arc;
use travelapp_core::services::payment_service::PaymentService;
use travelapp_core::AppState;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::payment_dto::InitiatePaymentResponse;
use uuid::Uuid;

#[utoipa::path(
    post,
    path = "/api/initiate-payment/{booking_id}/",
    params(("booking_id" = Uuid, Path, description = "Booking to pay for")),
    responses(
        (status = 200, description = "Chapa checkout created", body = InitiatePaymentResponse),
        (status = 400, description = "Payment already completed or rejected by Chapa"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Booking not found"),
        (status = 502, description = "Chapa unreachable"),
    ),
    security(("bearerAuth" = [])),
    tag = "Payments"
)]
pub async fn initiate_payment(
    State(state): State<Arc<AppState>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<InitiatePaymentResponse>, ApiError> {
    let response = PaymentService::initiate_payment(&state, booking_id).await?;
    Ok(Json(response))
}
