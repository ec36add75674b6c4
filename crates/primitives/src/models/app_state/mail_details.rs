use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

pub const DEFAULT_FROM_EMAIL: &str = "noreply@travelapp.com";

#[derive(Debug, Clone)]
pub struct SmtpInfo {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<SecretString>,
}

#[derive(Debug, Clone)]
pub struct MailInfo {
    pub default_from_email: String,
    /// `None` means mail is written to the log instead of being sent.
    pub smtp: Option<SmtpInfo>,
}

impl MailInfo {
    pub fn new() -> Result<Self, Report> {
        let smtp = match env::var("SMTP_HOST") {
            Ok(host) if !host.trim().is_empty() => Some(SmtpInfo {
                host,
                port: env::var("SMTP_PORT")
                    .unwrap_or_else(|_| "587".into())
                    .parse()
                    .map_err(|e| eyre!("Invalid SMTP_PORT: {}", e))?,
                username: env::var("SMTP_USERNAME").ok(),
                password: env::var("SMTP_PASSWORD")
                    .ok()
                    .map(|p| SecretString::new(p.into())),
            }),
            _ => None,
        };

        Ok(Self {
            default_from_email: env::var("DEFAULT_FROM_EMAIL")
                .unwrap_or_else(|_| DEFAULT_FROM_EMAIL.into()),
            smtp,
        })
    }
}

impl Default for MailInfo {
    fn default() -> Self {
        Self {
            default_from_email: DEFAULT_FROM_EMAIL.into(),
            smtp: None,
        }
    }
}
