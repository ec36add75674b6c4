use diesel::prelude::*;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::entities::booking::{Booking, BookingChangeset, NewBooking};
use travelapp_primitives::models::entities::listing::Listing;
use travelapp_primitives::schema::{bookings, listings};
use uuid::Uuid;

pub struct BookingRepository;

impl BookingRepository {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Booking>, ApiError> {
        bookings::table
            .order(bookings::created_at.desc())
            .select(Booking::as_select())
            .load(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        booking_id: Uuid,
    ) -> Result<Option<Booking>, ApiError> {
        bookings::table
            .find(booking_id)
            .select(Booking::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn find_with_listing(
        conn: &mut PgConnection,
        booking_id: Uuid,
    ) -> Result<Option<(Booking, Listing)>, ApiError> {
        bookings::table
            .inner_join(listings::table)
            .filter(bookings::id.eq(booking_id))
            .select((Booking::as_select(), Listing::as_select()))
            .first(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_booking: NewBooking) -> Result<Booking, ApiError> {
        diesel::insert_into(bookings::table)
            .values(&new_booking)
            .returning(Booking::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    }

    pub fn update(
        conn: &mut PgConnection,
        booking_id: Uuid,
        changes: &BookingChangeset,
    ) -> Result<Option<Booking>, ApiError> {
        if changes.is_empty() {
            return Self::find_by_id(conn, booking_id);
        }

        diesel::update(bookings::table.find(booking_id))
            .set(changes)
            .returning(Booking::as_returning())
            .get_result(conn)
            .optional()
            .map_err(ApiError::from)
    }

    /// Payments go with the booking through `ON DELETE CASCADE`.
    pub fn delete(conn: &mut PgConnection, booking_id: Uuid) -> Result<bool, ApiError> {
        let deleted = diesel::delete(bookings::table.find(booking_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}
