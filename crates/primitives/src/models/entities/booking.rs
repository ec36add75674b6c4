use crate::models::entities::enum_types::BookingStatus;
use crate::models::entities::listing::Listing;
use crate::models::entities::user::User;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::{AsChangeset, Associations, Identifiable, Insertable, Queryable, Selectable};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::bookings)]
#[diesel(belongs_to(Listing))]
#[diesel(belongs_to(User))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Booking {
    pub id: Uuid,
    pub listing_id: Uuid,
    pub user_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::bookings)]
pub struct NewBooking {
    pub listing_id: Uuid,
    pub user_id: Uuid,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub status: BookingStatus,
}

#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = crate::schema::bookings)]
pub struct BookingChangeset {
    pub listing_id: Option<Uuid>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub status: Option<BookingStatus>,
}

impl BookingChangeset {
    pub fn is_empty(&self) -> bool {
        self.listing_id.is_none()
            && self.check_in.is_none()
            && self.check_out.is_none()
            && self.status.is_none()
    }
}
