use diesel::prelude::*;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::entities::listing::{Listing, ListingChangeset, NewListing};
use travelapp_primitives::schema::listings;
use uuid::Uuid;

pub struct ListingRepository;

impl ListingRepository {
    pub fn list(conn: &mut PgConnection) -> Result<Vec<Listing>, ApiError> {
        listings::table
            .order(listings::created_at.desc())
            .select(Listing::as_select())
            .load(conn)
            .map_err(ApiError::from)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        listing_id: Uuid,
    ) -> Result<Option<Listing>, ApiError> {
        listings::table
            .find(listing_id)
            .select(Listing::as_select())
            .first(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_listing: NewListing) -> Result<Listing, ApiError> {
        diesel::insert_into(listings::table)
            .values(&new_listing)
            .returning(Listing::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    }

    /// Returns `None` when the listing does not exist.
    pub fn update(
        conn: &mut PgConnection,
        listing_id: Uuid,
        changes: &ListingChangeset,
    ) -> Result<Option<Listing>, ApiError> {
        // diesel rejects an UPDATE without SET columns
        if changes.is_empty() {
            return Self::find_by_id(conn, listing_id);
        }

        diesel::update(listings::table.find(listing_id))
            .set(changes)
            .returning(Listing::as_returning())
            .get_result(conn)
            .optional()
            .map_err(ApiError::from)
    }

    pub fn delete(conn: &mut PgConnection, listing_id: Uuid) -> Result<bool, ApiError> {
        let deleted = diesel::delete(listings::table.find(listing_id)).execute(conn)?;
        Ok(deleted > 0)
    }
}
