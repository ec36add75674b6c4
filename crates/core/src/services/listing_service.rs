use crate::app_state::AppState;
use crate::repositories::listing_repository::ListingRepository;
use tracing::info;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::listing_dto::{ListingRequest, ListingResponse};
use travelapp_primitives::models::entities::listing::{ListingChangeset, NewListing};
use uuid::Uuid;

pub struct ListingService;

impl ListingService {
    pub fn not_found() -> ApiError {
        ApiError::NotFound("Listing not found".into())
    }

    pub async fn list(state: &AppState) -> Result<Vec<ListingResponse>, ApiError> {
        let mut conn = state.db.get()?;

        Ok(ListingRepository::list(&mut conn)?
            .into_iter()
            .map(ListingResponse::from)
            .collect())
    }

    pub async fn get(state: &AppState, listing_id: Uuid) -> Result<ListingResponse, ApiError> {
        let mut conn = state.db.get()?;

        ListingRepository::find_by_id(&mut conn, listing_id)?
            .map(ListingResponse::from)
            .ok_or_else(Self::not_found)
    }

    pub async fn create(
        state: &AppState,
        host_id: Uuid,
        req: ListingRequest,
    ) -> Result<ListingResponse, ApiError> {
        let mut conn = state.db.get()?;

        let listing = ListingRepository::create(
            &mut conn,
            NewListing {
                title: req.title.trim(),
                description: &req.description,
                price_per_night: req.price_per_night,
                location: req.location.trim(),
                host_id,
            },
        )?;

        info!(listing_id = %listing.id, host_id = %host_id, "Listing created");
        Ok(listing.into())
    }

    pub async fn update(
        state: &AppState,
        listing_id: Uuid,
        changes: ListingChangeset,
    ) -> Result<ListingResponse, ApiError> {
        let mut conn = state.db.get()?;

        let listing = ListingRepository::update(&mut conn, listing_id, &changes)?
            .ok_or_else(Self::not_found)?;

        info!(listing_id = %listing.id, "Listing updated");
        Ok(listing.into())
    }

    pub async fn delete(state: &AppState, listing_id: Uuid) -> Result<(), ApiError> {
        let mut conn = state.db.get()?;

        if !ListingRepository::delete(&mut conn, listing_id)? {
            return Err(Self::not_found());
        }

        info!(listing_id = %listing_id, "Listing deleted");
        Ok(())
    }
}
