use crate::app_state::AppState;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::listing_repository::ListingRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::notification_service::{BookingConfirmation, NotificationJob};
use chrono::NaiveDate;
use tracing::{info, warn};
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::booking_dto::{BookingRequest, BookingResponse};
use travelapp_primitives::models::entities::booking::{BookingChangeset, NewBooking};
use uuid::Uuid;

pub struct BookingService;

impl BookingService {
    pub fn not_found() -> ApiError {
        ApiError::NotFound("Booking not found".into())
    }

    /// A stay needs at least one night.
    pub fn ensure_stay(check_in: NaiveDate, check_out: NaiveDate) -> Result<(), ApiError> {
        if check_out <= check_in {
            return Err(ApiError::BadRequest(
                "check_out must be after check_in".into(),
            ));
        }
        Ok(())
    }

    pub async fn list(state: &AppState) -> Result<Vec<BookingResponse>, ApiError> {
        let mut conn = state.db.get()?;

        Ok(BookingRepository::list(&mut conn)?
            .into_iter()
            .map(BookingResponse::from)
            .collect())
    }

    pub async fn get(state: &AppState, booking_id: Uuid) -> Result<BookingResponse, ApiError> {
        let mut conn = state.db.get()?;

        BookingRepository::find_by_id(&mut conn, booking_id)?
            .map(BookingResponse::from)
            .ok_or_else(Self::not_found)
    }

    /// Stores the booking for `user_id` and queues the confirmation mail.
    pub async fn create(
        state: &AppState,
        user_id: Uuid,
        req: BookingRequest,
    ) -> Result<BookingResponse, ApiError> {
        Self::ensure_stay(req.check_in, req.check_out)?;

        let mut conn = state.db.get()?;

        let booking = BookingRepository::create(
            &mut conn,
            NewBooking {
                listing_id: req.listing,
                user_id,
                check_in: req.check_in,
                check_out: req.check_out,
                status: req.status.unwrap_or_default(),
            },
        )?;

        info!(booking_id = %booking.id, user_id = %user_id, "Booking created");

        let listing = ListingRepository::find_by_id(&mut conn, booking.listing_id)?;
        let user = UserRepository::find_by_id(&mut conn, user_id)?;

        match (listing, user) {
            (Some(listing), Some(user)) => {
                state
                    .notifications
                    .enqueue(NotificationJob::BookingConfirmation(BookingConfirmation {
                        email: user.email,
                        listing_name: listing.title,
                        booking_id: booking.id,
                    }))
            }
            _ => warn!(
                booking_id = %booking.id,
                "booking confirmation skipped, listing or user vanished"
            ),
        }

        Ok(booking.into())
    }

    /// Applies a full or partial update; the resulting stay is re-checked.
    pub async fn update(
        state: &AppState,
        booking_id: Uuid,
        changes: BookingChangeset,
    ) -> Result<BookingResponse, ApiError> {
        let mut conn = state.db.get()?;

        let current =
            BookingRepository::find_by_id(&mut conn, booking_id)?.ok_or_else(Self::not_found)?;

        Self::ensure_stay(
            changes.check_in.unwrap_or(current.check_in),
            changes.check_out.unwrap_or(current.check_out),
        )?;

        let booking = BookingRepository::update(&mut conn, booking_id, &changes)?
            .ok_or_else(Self::not_found)?;

        info!(booking_id = %booking.id, "Booking updated");
        Ok(booking.into())
    }

    pub async fn delete(state: &AppState, booking_id: Uuid) -> Result<(), ApiError> {
        let mut conn = state.db.get()?;

        if !BookingRepository::delete(&mut conn, booking_id)? {
            return Err(Self::not_found());
        }

        info!(booking_id = %booking_id, "Booking deleted");
        Ok(())
    }
}
