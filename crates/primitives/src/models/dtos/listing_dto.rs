use crate::models::entities::listing::{Listing, ListingChangeset};
use crate::utility::{validate_not_blank, validate_price};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Body of `POST /api/listings/` and `PUT /api/listings/{id}/`.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct ListingRequest {
    #[schema(example = "Cozy Beach House")]
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub title: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: String,

    #[schema(example = "100.00")]
    #[validate(custom(function = "validate_price"))]
    pub price_per_night: Decimal,

    #[schema(example = "Mombasa")]
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub location: String,
}

impl From<ListingRequest> for ListingChangeset {
    fn from(req: ListingRequest) -> Self {
        ListingChangeset {
            title: Some(req.title.trim().to_string()),
            description: Some(req.description),
            price_per_night: Some(req.price_per_night),
            location: Some(req.location.trim().to_string()),
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct PatchListingRequest {
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub title: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_price"))]
    pub price_per_night: Option<Decimal>,

    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub location: Option<String>,
}

impl From<PatchListingRequest> for ListingChangeset {
    fn from(req: PatchListingRequest) -> Self {
        ListingChangeset {
            title: req.title.map(|t| t.trim().to_string()),
            description: req.description,
            price_per_night: req.price_per_night,
            location: req.location.map(|l| l.trim().to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListingResponse {
    pub listing_id: Uuid,
    pub title: String,
    pub description: String,
    #[schema(example = "100.00")]
    pub price_per_night: Decimal,
    pub location: String,
    pub host: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<Listing> for ListingResponse {
    fn from(listing: Listing) -> Self {
        ListingResponse {
            listing_id: listing.id,
            title: listing.title,
            description: listing.description,
            price_per_night: listing.price_per_night,
            location: listing.location,
            host: listing.host_id,
            created_at: listing.created_at,
        }
    }
}
