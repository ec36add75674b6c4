use crate::app_state::AppState;
use crate::repositories::user_repository::UserRepository;
use crate::security::SecurityConfig;
use crate::services::auth_service::register::RegisterService;
use argon2::password_hash::{PasswordHash, PasswordVerifier};
use tracing::{error, info, warn};
use travelapp_primitives::error::{ApiError, AuthError};
use travelapp_primitives::models::dtos::auth_dto::{AuthResponse, LoginRequest};

/// Stand-in hash checked for unknown emails so both paths cost one argon2 run.
const DUMMY_HASH: &str = "$argon2id$v=19$m=65536,t=3,p=1$c29tZXNhbHQ$c29tZWZha2VoYXNo";

pub struct LoginService;

impl LoginService {
    pub async fn login(state: &AppState, payload: LoginRequest) -> Result<AuthResponse, ApiError> {
        let mut conn = state.db.get()?;

        let user = UserRepository::find_by_email(&mut conn, &payload.email)?;
        let stored_hash = user.as_ref().map_or(DUMMY_HASH, |u| u.password_hash.as_str());

        let password_ok = Self::password_matches(&payload.password, stored_hash)?;

        let user = match user {
            Some(user) if password_ok => user,
            _ => {
                warn!(email = %payload.email, "login rejected");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        let token = SecurityConfig::create_token(&state.config, &user.id.to_string())?;

        info!(user_id = %user.id, "User logged in");

        Ok(AuthResponse {
            token,
            user_id: user.id,
            email: user.email,
        })
    }

    fn password_matches(password: &str, hash: &str) -> Result<bool, ApiError> {
        let parsed = PasswordHash::new(hash).map_err(|e| {
            error!("stored password hash is unreadable: {}", e);
            ApiError::Internal("Authentication failure".into())
        })?;

        Ok(RegisterService::create_argon2()?
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
