mod observability;

pub mod utility;

use crate::utility::background::spawn_background_tasks;
use crate::utility::db_pool::create_db_pool;
use crate::utility::logging::setup_logging;
use crate::utility::server::serve;
use crate::utility::tasks::{build_router, initialize_system, load_env};
use eyre::Report;
use tracing::info;
use travelapp_core::app_state::AppState;
use travelapp_core::services::notification_service::NotificationQueue;
use travelapp_primitives::models::app_config::AppConfig;

pub async fn run() -> Result<(), Report> {
    // 1. load environment variables
    load_env();

    // 2. initialize logging first (so we can log everything else)
    setup_logging();

    info!("Starting travel app...");

    // 3. load configuration
    let config = AppConfig::from_env()?;

    // 4. create database connection pool
    let pool = create_db_pool()?;

    // 5. build application state around the notification queue
    let (notifications, jobs) = NotificationQueue::channel();
    let state = AppState::new(pool, config, notifications)?;

    // 6. apply pending migrations
    initialize_system(&state)?;

    // 7. start the notification worker
    spawn_background_tasks(&state, jobs)?;

    // 8. initialize metrics
    let (metric_layer, metric_handle) = observability::metrics::setup_metrics();

    // 9. build axum router
    let app = build_router(state.clone(), metric_layer, metric_handle)?;

    // 10. start HTTP server
    serve(app).await?;

    info!("Travel app shut down gracefully");
    Ok(())
}
