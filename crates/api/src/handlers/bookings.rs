use axum::extract::{Extension, Json, Path, State};
use axum::http::StatusCode;
use std::sync::Arc;
use travelapp_core::services::booking_service::BookingService;
use travelapp_core::{AppState, Claims};
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::booking_dto::{
    BookingRequest, BookingResponse, PatchBookingRequest,
};
use uuid::Uuid;

#[utoipa::path(
    get,
    path = "/api/bookings/",
    responses(
        (status = 200, description = "All bookings, newest first", body = [BookingResponse]),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn list_bookings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<BookingResponse>>, ApiError> {
    Ok(Json(BookingService::list(&state).await?))
}

#[utoipa::path(
    post,
    path = "/api/bookings/",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking created, confirmation mail queued", body = BookingResponse),
        (status = 400, description = "Invalid dates or unknown listing"),
        (status = 401, description = "Unauthorized"),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingResponse>), ApiError> {
    let user_id = claims.user_id()?;
    let booking = BookingService::create(&state, user_id, req).await?;

    Ok((StatusCode::CREATED, Json(booking)))
}

#[utoipa::path(
    get,
    path = "/api/bookings/{id}/",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 200, description = "Booking", body = BookingResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Booking not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn get_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingResponse>, ApiError> {
    Ok(Json(BookingService::get(&state, id).await?))
}

#[utoipa::path(
    put,
    path = "/api/bookings/{id}/",
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = BookingRequest,
    responses(
        (status = 200, description = "Booking replaced", body = BookingResponse),
        (status = 400, description = "Invalid dates or unknown listing"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Booking not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<BookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    Ok(Json(BookingService::update(&state, id, req.into()).await?))
}

#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/",
    params(("id" = Uuid, Path, description = "Booking id")),
    request_body = PatchBookingRequest,
    responses(
        (status = 200, description = "Booking updated", body = BookingResponse),
        (status = 400, description = "Invalid dates or unknown listing"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Booking not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn patch_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<PatchBookingRequest>,
) -> Result<Json<BookingResponse>, ApiError> {
    Ok(Json(BookingService::update(&state, id, req.into()).await?))
}

#[utoipa::path(
    delete,
    path = "/api/bookings/{id}/",
    params(("id" = Uuid, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Booking and its payment deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Booking not found"),
    ),
    security(("bearerAuth" = [])),
    tag = "Bookings"
)]
pub async fn delete_booking(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    BookingService::delete(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
