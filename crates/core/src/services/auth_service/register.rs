use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use crate::security::SecurityConfig;
use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Argon2, Params};
use rand::rngs::OsRng;
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info};
use travelapp_primitives::error::ApiError;
use travelapp_primitives::models::dtos::auth_dto::{AuthResponse, RegisterRequest};
use travelapp_primitives::models::entities::user::NewUser;

pub struct RegisterService;

impl RegisterService {
    pub async fn register(
        state: &AppState,
        payload: RegisterRequest,
    ) -> Result<AuthResponse, ApiError> {
        let mut conn = state.db.get().map_err(|_| {
            error!("auth.register: failed to acquire db connection");
            ApiError::DatabaseConnection("Database unavailable".into())
        })?;

        let password = SecretString::new(payload.password.into());
        let password_hash = Self::hash_password(&password)?;

        let username = payload.username.as_deref().unwrap_or(payload.email.as_str());

        let user = UserRepository::create(
            &mut conn,
            NewUser {
                username,
                email: &payload.email,
                first_name: payload.first_name.as_deref(),
                last_name: payload.last_name.as_deref(),
                password_hash: &password_hash,
            },
        )?;

        let token = SecurityConfig::create_token(&state.config, &user.id.to_string())?;

        info!(user_id = %user.id, "User registered");

        Ok(AuthResponse {
            token,
            user_id: user.id,
            email: user.email,
        })
    }

    pub fn hash_password(password: &SecretString) -> Result<String, ApiError> {
        let argon2 = Self::create_argon2()?;
        let salt = SaltString::generate(&mut OsRng);

        argon2
            .hash_password(password.expose_secret().as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|_| {
                error!("auth.register: password hashing failed");
                ApiError::Internal("Credential processing failed".into())
            })
    }

    pub fn create_argon2() -> Result<Argon2<'static>, ApiError> {
        let params = Params::new(
            65536, // 64 MiB
            3,
            1,
            None,
        )
        .map_err(|e| {
            error!("Argon2 params error: {}", e);
            ApiError::Internal("Encryption configuration error".to_string())
        })?;

        Ok(Argon2::new(
            argon2::Algorithm::Argon2id,
            argon2::Version::V0x13,
            params,
        ))
    }
}
