use crate::models::entities::user::User;
use chrono::{DateTime, Utc};
use diesel::{AsChangeset, Associations, Identifiable, Insertable, Queryable, Selectable};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable, Associations, Serialize)]
#[diesel(table_name = crate::schema::listings)]
#[diesel(belongs_to(User, foreign_key = host_id))]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Listing {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub price_per_night: Decimal,
    pub location: String,
    pub host_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::listings)]
pub struct NewListing<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub price_per_night: Decimal,
    pub location: &'a str,
    pub host_id: Uuid,
}

/// Column updates for PUT and PATCH; `None` leaves a column untouched.
#[derive(Debug, Default, AsChangeset)]
#[diesel(table_name = crate::schema::listings)]
pub struct ListingChangeset {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price_per_night: Option<Decimal>,
    pub location: Option<String>,
}

impl ListingChangeset {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.price_per_night.is_none()
            && self.location.is_none()
    }
}
