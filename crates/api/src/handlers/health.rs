use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use std::sync::Arc;
use tracing::error;
use travelapp_core::AppState;
use travelapp_primitives::models::dtos::system_dto::HealthStatus;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    summary = "Health check endpoint",
    description = "Reports whether the API can reach its database. Public.",
    operation_id = "healthCheck",
    responses(
        (status = 200, description = "Service is healthy", body = HealthStatus),
        (status = 503, description = "Database unreachable", body = HealthStatus),
    ),
    security(()),
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthStatus>) {
    let probe = state
        .db
        .get()
        .map_err(|e| e.to_string())
        .and_then(|mut conn| {
            diesel::sql_query("SELECT 1")
                .execute(&mut conn)
                .map_err(|e| e.to_string())
        });

    match probe {
        Ok(_) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: StatusCode::OK.to_string(),
                message: "API is healthy".to_string(),
            }),
        ),
        Err(e) => {
            error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: StatusCode::SERVICE_UNAVAILABLE.to_string(),
                    message: "Database unavailable".to_string(),
                }),
            )
        }
    }
}
