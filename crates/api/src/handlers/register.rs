use axum::extract::{Json, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::error;
use travelapp_core::services::auth_service::RegisterService;
use travelapp_core::AppState;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::auth_dto::{AuthResponse, RegisterRequest};
use validator::Validate;

#[utoipa::path(
    post,
    path = "/api/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account created", body = AuthResponse),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "Email or username already registered"),
        (status = 500, description = "Internal server error")
    ),
    security(()),
    tag = "Auth"
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    let payload = payload.normalize();

    payload.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let response = RegisterService::register(&state, payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}
