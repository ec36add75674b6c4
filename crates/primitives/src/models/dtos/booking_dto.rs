use crate::models::entities::booking::{Booking, BookingChangeset};
use crate::models::entities::enum_types::BookingStatus;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /api/bookings/` and `PUT /api/bookings/{id}/`.
///
/// `status` may be omitted: a new booking starts `pending` and a full update
/// keeps the stored status.
#[derive(Debug, Deserialize, ToSchema)]
pub struct BookingRequest {
    pub listing: Uuid,
    #[schema(example = "2026-11-01")]
    pub check_in: NaiveDate,
    #[schema(example = "2026-11-05")]
    pub check_out: NaiveDate,
    #[serde(default)]
    pub status: Option<BookingStatus>,
}

impl From<BookingRequest> for BookingChangeset {
    fn from(req: BookingRequest) -> Self {
        BookingChangeset {
            listing_id: Some(req.listing),
            check_in: Some(req.check_in),
            check_out: Some(req.check_out),
            status: req.status,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchBookingRequest {
    pub listing: Option<Uuid>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
}

impl From<PatchBookingRequest> for BookingChangeset {
    fn from(req: PatchBookingRequest) -> Self {
        BookingChangeset {
            listing_id: req.listing,
            check_in: req.check_in,
            check_out: req.check_out,
            status: req.status,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub booking_id: Uuid,
    pub listing: Uuid,
    pub user: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        BookingResponse {
            booking_id: booking.id,
            listing: booking.listing_id,
            user: booking.user_id,
            check_in: booking.check_in,
            check_out: booking.check_out,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
