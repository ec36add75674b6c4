use axum::extract::{Extension, Json, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::error;
use travelapp_core::services::review_service::ReviewService;
use travelapp_core::{AppState, Claims};
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::review_dto::{CreateReviewRequest, ReviewResponse};
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/listings/{id}/reviews/",
    params(("id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Reviews of the listing", body = [ReviewResponse]),
        (status = 404, description = "Listing not found"),
    ),
    security(()),
    tag = "Reviews"
)]
pub async fn list_reviews(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ReviewResponse>>, ApiError> {
    Ok(Json(ReviewService::list_for_listing(&state, id).await?))
}

#[utoipa::path(
    post,
    path = "/api/listings/{id}/reviews/",
    params(("id" = Uuid, Path, description = "Listing id")),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created", body = ReviewResponse),
        (status = 400, description = "Rating outside 1-5"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Listing not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Reviews"
)]
pub async fn create_review(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateReviewRequest>,
) -> Result<(StatusCode, Json<ReviewResponse>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let user_id = claims.user_id()?;
    let review = ReviewService::create(&state, id, user_id, req).await?;

    Ok((StatusCode::CREATED, Json(review)))
}
