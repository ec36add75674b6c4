use axum::extract::{Json, State};
use std::sync::Arc;
use travelapp_core::services::auth_service::LoginService;
use travelapp_core::AppState;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::auth_dto::{AuthResponse, LoginRequest};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Internal server error")
    ),
    security(()),
    tag = "Auth"
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let response = LoginService::login(&state, payload.normalize()).await?;
    Ok(Json(response))
}
