use crate::models::app_state::chapa_details::ChapaInfo;
use crate::models::app_state::jwt_details::JWTInfo;
use crate::models::app_state::mail_details::MailInfo;
use eyre::Report;
use std::env;

pub const DEFAULT_APP_URL: &str = "http://localhost:8080";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub jwt_details: JWTInfo,

    pub chapa_details: ChapaInfo,

    pub mail_details: MailInfo,

    /// Public base URL used to build Chapa callback and return links.
    pub app_url: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            jwt_details: JWTInfo::new()?,

            chapa_details: ChapaInfo::new()?,

            mail_details: MailInfo::new()?,

            app_url: env::var("APP_URL")
                .unwrap_or_else(|_| DEFAULT_APP_URL.into())
                .trim_end_matches('/')
                .to_string(),
        })
    }
}
