use crate::config::swagger_config::ApiDoc;
use crate::handlers::{
    bookings::{
        create_booking, delete_booking, get_booking, list_bookings, patch_booking, update_booking,
    },
    health::health_check,
    initiate_payment::initiate_payment,
    listings::{
        create_listing, delete_listing, get_listing, list_listings, patch_listing, update_listing,
    },
    login::login,
    register::register,
    reviews::{create_review, list_reviews},
    verify_payment::verify_payment,
    welcome::welcome,
};
use axum::routing::{get, post};
use axum::{middleware, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use travelapp_core::{AppState, SecurityConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub fn create_router(state: Arc<AppState>) -> Router {
    // public routes (no authentication)
    let public_router = create_public_routers();

    // protected routes (require JWT authentication)
    let protected_router = create_secured_routers(&state);

    Router::new()
        .merge(public_router)
        .merge(protected_router)
        .layer(axum::extract::DefaultBodyLimit::max(2 * 1024 * 1024)) // 2MB limit
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        )
        .with_state(state)
}

/// Write methods share their paths with the public reads; axum merges the
/// method routers so only these methods pass through the auth layer.
fn create_secured_routers(state: &Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/listings/", post(create_listing))
        .route(
            "/api/listings/{id}/",
            axum::routing::put(update_listing)
                .patch(patch_listing)
                .delete(delete_listing),
        )
        .route("/api/listings/{id}/reviews/", post(create_review))
        .route("/api/bookings/", get(list_bookings).post(create_booking))
        .route(
            "/api/bookings/{id}/",
            get(get_booking)
                .put(update_booking)
                .patch(patch_booking)
                .delete(delete_booking),
        )
        .route(
            "/api/initiate-payment/{booking_id}/",
            post(initiate_payment),
        )
        .route("/api/verify-payment/{booking_id}/", get(verify_payment))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            SecurityConfig::auth_middleware,
        ))
}

fn create_public_routers() -> Router<Arc<AppState>> {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/", get(welcome))
        .route("/api/health", get(health_check))
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/listings/", get(list_listings))
        .route("/api/listings/{id}/", get(get_listing))
        .route("/api/listings/{id}/reviews/", get(list_reviews))
}
