use crate::handlers::{
    bookings::{
        __path_create_booking, __path_delete_booking, __path_get_booking, __path_list_bookings,
        __path_patch_booking, __path_update_booking,
    },
    health::__path_health_check,
    initiate_payment::__path_initiate_payment,
    listings::{
        __path_create_listing, __path_delete_listing, __path_get_listing, __path_list_listings,
        __path_patch_listing, __path_update_listing,
    },
    login::__path_login,
    register::__path_register,
    reviews::{__path_create_review, __path_list_reviews},
    verify_payment::__path_verify_payment,
    welcome::__path_welcome,
};
use travelapp_primitives::models::*;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        welcome, health_check, register, login,
        list_listings, create_listing, get_listing, update_listing, patch_listing, delete_listing,
        list_reviews, create_review,
        list_bookings, create_booking, get_booking, update_booking, patch_booking, delete_booking,
        initiate_payment, verify_payment
    ),
    components(schemas(BookingStatus, PaymentStatus)),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Registration and login"),
        (name = "Listings", description = "Rentable properties"),
        (name = "Reviews", description = "Guest reviews of listings"),
        (name = "Bookings", description = "Reservations"),
        (name = "Payments", description = "Chapa checkout and verification"),
        (name = "Health", description = "Service status")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.security_schemes.insert(
                "bearerAuth".to_string(),
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
