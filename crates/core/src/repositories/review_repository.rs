use diesel::prelude::*;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::entities::listing::Listing;
use travelapp_primitives::models::entities::review::{NewReview, Review};
use travelapp_primitives::schema::reviews;

pub struct ReviewRepository;

impl ReviewRepository {
    pub fn list_for_listing(
        conn: &mut PgConnection,
        listing: &Listing,
    ) -> Result<Vec<Review>, ApiError> {
        Review::belonging_to(listing)
            .order(reviews::created_at.desc())
            .select(Review::as_select())
            .load(conn)
            .map_err(ApiError::from)
    }

    pub fn create(conn: &mut PgConnection, new_review: NewReview) -> Result<Review, ApiError> {
        diesel::insert_into(reviews::table)
            .values(&new_review)
            .returning(Review::as_returning())
            .get_result(conn)
            .map_err(ApiError::from)
    }
}
