use crate::app_state::AppState;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use chrono::{DateTime, Duration, Utc};
use http::{header, HeaderMap};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, warn};
use travelapp_primitives::error::{ApiError, AuthError};
use travelapp_primitives::models::app_config::AppConfig;
use travelapp_primitives::models::jwt_details::JWTInfo;
use uuid::Uuid;

/// Access token payload. `sub` carries the user id.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
    pub iss: String,
    pub aud: String,
    pub jti: String,
}

impl Claims {
    fn issue(jwt: &JWTInfo, subject: &str, now: DateTime<Utc>) -> Self {
        Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(jwt.jwt_expiration_hours)).timestamp(),
            iss: jwt.jwt_issuer.clone(),
            aud: jwt.jwt_audience.clone(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// The authenticated user; hosts, guests and reviewers are all taken from here.
    pub fn user_id(&self) -> Result<Uuid, ApiError> {
        Uuid::parse_str(&self.sub).map_err(|e| {
            error!(sub = %self.sub, "token subject is not a user id: {}", e);
            ApiError::Auth(AuthError::InvalidToken("Invalid user ID".to_string()))
        })
    }
}

pub struct SecurityConfig;

impl SecurityConfig {
    fn validation(jwt: &JWTInfo) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[jwt.jwt_issuer.as_str()]);
        validation.set_audience(&[jwt.jwt_audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation
    }

    pub fn create_token(config: &AppConfig, user_id: &str) -> Result<String, ApiError> {
        let jwt = &config.jwt_details;
        let claims = Claims::issue(jwt, user_id, Utc::now());
        let key = EncodingKey::from_secret(jwt.jwt_secret.expose_secret().as_bytes());

        encode(&Header::new(Algorithm::HS256), &claims, &key).map_err(|e| {
            error!("JWT encoding error: {}", e);
            ApiError::Token("Token creation failed".into())
        })
    }

    /// `Authorization: Bearer <token>`; anything else is a format error.
    pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
        let value = headers
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidFormat)?;

        match value.strip_prefix("Bearer ").map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AuthError::InvalidFormat),
        }
    }

    pub fn verify_token(config: &AppConfig, token: &str) -> Result<Claims, AuthError> {
        let jwt = &config.jwt_details;
        let key = DecodingKey::from_secret(jwt.jwt_secret.expose_secret().as_bytes());

        decode::<Claims>(token, &key, &Self::validation(jwt))
            .map(|data| data.claims)
            .map_err(|e| {
                warn!(error = %e, "rejected bearer token");
                AuthError::InvalidToken("Invalid or expired token".into())
            })
    }

    /// Guards the write routes and every booking and payment route.
    pub async fn auth_middleware(
        State(state): State<Arc<AppState>>,
        mut req: Request<Body>,
        next: Next,
    ) -> Result<Response, Response> {
        let claims = Self::extract_bearer_token(req.headers())
            .and_then(|token| Self::verify_token(&state.config, token))
            .map_err(|e| ApiError::from(e).into_response())?;

        req.extensions_mut().insert(claims);
        Ok(next.run(req).await)
    }
}
