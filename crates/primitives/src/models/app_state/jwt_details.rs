use eyre::{eyre, Report};
use secrecy::SecretString;
use std::env;

pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Clone, Debug)]
pub struct JWTInfo {
    pub jwt_secret: SecretString,
    pub jwt_expiration_hours: i64,
    pub jwt_issuer: String,
    pub jwt_audience: String,
}

impl JWTInfo {
    pub fn new() -> Result<JWTInfo, Report> {
        let jwt_secret =
            env::var("JWT_SECRET").map_err(|_| eyre!("JWT_SECRET must be set"))?;

        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(eyre!(
                "JWT_SECRET must be at least {} characters long",
                MIN_JWT_SECRET_LEN
            ));
        }

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "2".into())
            .parse()
            .map_err(|e| eyre!("Invalid JWT_EXPIRATION_HOURS: {}", e))?;

        Ok(Self {
            jwt_secret: SecretString::new(jwt_secret.into()),
            jwt_expiration_hours,
            jwt_issuer: env::var("ISSUER").unwrap_or_else(|_| "travelapp".into()),
            jwt_audience: env::var("AUDIENCE").unwrap_or_else(|_| "travelapp_api".into()),
        })
    }
}
