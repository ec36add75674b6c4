use axum::extract::{Extension, Json, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use tracing::error;
use travelapp_core::services::listing_service::ListingService;
use travelapp_core::{AppState, Claims};
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::listing_dto::{
    ListingRequest, ListingResponse, PatchListingRequest,
};
use uuid::Uuid;
use validator::Validate;

#[utoipa::path(
    get,
    path = "/api/listings/",
    responses(
        (status = 200, description = "All listings, newest first", body = [ListingResponse]),
    ),
    security(()),
    tag = "Listings"
)]
pub async fn list_listings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ListingResponse>>, ApiError> {
    Ok(Json(ListingService::list(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/listings/",
    request_body = ListingRequest,
    responses(
        (status = 201, description = "Listing created", body = ListingResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Listings"
)]
pub async fn create_listing(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<ListingRequest>,
) -> Result<(StatusCode, Json<ListingResponse>), ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    let host_id = claims.user_id()?;
    let listing = ListingService::create(&state, host_id, req).await?;

    Ok((StatusCode::CREATED, Json(listing)))
}

#[utoipa::path(
    get,
    path = "/api/listings/{id}/",
    params(("id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 200, description = "Listing", body = ListingResponse),
        (status = 404, description = "Listing not found"),
    ),
    security(()),
    tag = "Listings"
)]
pub async fn get_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ListingResponse>, ApiError> {
    Ok(Json(ListingService::get(&state, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/listings/{id}/",
    params(("id" = Uuid, Path, description = "Listing id")),
    request_body = ListingRequest,
    responses(
        (status = 200, description = "Listing replaced", body = ListingResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Listing not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Listings"
)]
pub async fn update_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<ListingRequest>,
) -> Result<Json<ListingResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    Ok(Json(ListingService::update(&state, id, req.into()).await?))
}

#[utoipa::path(
    patch,
    path = "/api/listings/{id}/",
    params(("id" = Uuid, Path, description = "Listing id")),
    request_body = PatchListingRequest,
    responses(
        (status = 200, description = "Listing updated", body = ListingResponse),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Listing not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Listings"
)]
pub async fn patch_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<PatchListingRequest>,
) -> Result<Json<ListingResponse>, ApiError> {
    req.validate().map_err(|e| {
        error!("Validation error: {}", e);
        ApiError::Validation(e)
    })?;

    Ok(Json(ListingService::update(&state, id, req.into()).await?))
}

#[utoipa::path(
    delete,
    path = "/api/listings/{id}/",
    params(("id" = Uuid, Path, description = "Listing id")),
    responses(
        (status = 204, description = "Listing deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Listing not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Listings"
)]
pub async fn delete_listing(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    ListingService::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
