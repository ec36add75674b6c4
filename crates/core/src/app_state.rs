use diesel::r2d2::{self, ConnectionManager};
use diesel::PgConnection;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

pub type DbPool = r2d2::Pool<ConnectionManager<PgConnection>>;

use crate::clients::ChapaClient;
use crate::services::notification_service::NotificationQueue;
use eyre::Result;
pub use travelapp_primitives::models::app_config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub chapa: ChapaClient,
    pub notifications: NotificationQueue,
}

impl AppState {
    pub fn new(db: DbPool, config: AppConfig, notifications: NotificationQueue) -> Result<Arc<Self>> {
        let http = Client::builder().timeout(Duration::from_secs(30)).build()?;

        let chapa = ChapaClient::new(
            http,
            &config.chapa_details.chapa_api_url,
            config.chapa_details.chapa_secret_key.clone(),
        )?;

        Ok(Arc::new(Self {
            db,
            config,
            chapa,
            notifications,
        }))
    }
}
