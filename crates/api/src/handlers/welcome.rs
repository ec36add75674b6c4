use axum::Json;
use travelapp_primitives::models::dtos::system_dto::WelcomeResponse;

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses((status = 200, description = "Service banner", body = WelcomeResponse)),
    security(()),
)]
pub async fn welcome() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Travel App API".to_string(),
    })
}
