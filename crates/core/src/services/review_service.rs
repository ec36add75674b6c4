use crate::app_state::AppState;
use crate::repositories::listing_repository::ListingRepository;
use crate::repositories::review_repository::ReviewRepository;
use crate::services::listing_service::ListingService;
use tracing::info;
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::review_dto::{CreateReviewRequest, ReviewResponse};
use travelapp_primitives::models::entities::review::NewReview;
use uuid::Uuid;

pub struct ReviewService;

impl ReviewService {
    pub async fn list_for_listing(
        state: &AppState,
        listing_id: Uuid,
    ) -> Result<Vec<ReviewResponse>, ApiError> {
        let mut conn = state.db.get()?;

        let listing = ListingRepository::find_by_id(&mut conn, listing_id)?
            .ok_or_else(ListingService::not_found)?;

        Ok(ReviewRepository::list_for_listing(&mut conn, &listing)?
            .into_iter()
            .map(ReviewResponse::from)
            .collect())
    }

    pub async fn create(
        state: &AppState,
        listing_id: Uuid,
        user_id: Uuid,
        req: CreateReviewRequest,
    ) -> Result<ReviewResponse, ApiError> {
        let mut conn = state.db.get()?;

        ListingRepository::find_by_id(&mut conn, listing_id)?
            .ok_or_else(ListingService::not_found)?;

        let comment = req.comment.as_deref().map(str::trim).filter(|c| !c.is_empty());

        let review = ReviewRepository::create(
            &mut conn,
            NewReview {
                listing_id,
                user_id,
                rating: req.rating,
                comment,
            },
        )?;

        info!(review_id = %review.id, listing_id = %listing_id, "Review created");
        Ok(review.into())
    }
}
