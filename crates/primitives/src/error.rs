use axum::response::{IntoResponse, Response};
use axum::Json;
use diesel::r2d2;
use diesel::result::DatabaseErrorKind;
use http::StatusCode;
use serde_json::json;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Authorization header required")]
    MissingHeader,
    #[error("Invalid Authorization format")]
    InvalidFormat,
    #[error("Invalid token: {0}")]
    InvalidToken(String),
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Email or username already registered")]
    DuplicateAccount,
}

/// Failures talking to the Chapa API.
#[derive(Debug, Error)]
pub enum ChapaError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Network error: unreadable provider response: {0}")]
    InvalidResponse(String),
    /// The provider answered but refused the request.
    #[error("{0}")]
    Rejected(String),
}

#[derive(Debug)]
pub enum ApiError {
    Database(diesel::result::Error),
    DatabaseConnection(String),
    Validation(validator::ValidationErrors),
    Auth(AuthError),
    Token(String),
    NotFound(String),
    BadRequest(String),
    Payment(ChapaError),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Database(e) => write!(f, "Database error: {}", e),
            ApiError::DatabaseConnection(e) => write!(f, "Database connection error: {}", e),
            ApiError::Validation(e) => write!(f, "Validation error: {}", e),
            ApiError::Auth(e) => write!(f, "Authentication error: {}", e),
            ApiError::Token(e) => write!(f, "Token error: {}", e),
            ApiError::NotFound(e) => write!(f, "Not found: {}", e),
            ApiError::BadRequest(e) => write!(f, "Bad request: {}", e),
            ApiError::Payment(e) => write!(f, "Payment error: {}", e),
            ApiError::Internal(e) => write!(f, "Internal error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Database(e) => Some(e),
            ApiError::Validation(e) => Some(e),
            ApiError::Auth(e) => Some(e),
            ApiError::Payment(e) => Some(e),
            _ => None,
        }
    }
}

impl From<r2d2::PoolError> for ApiError {
    fn from(err: r2d2::PoolError) -> Self {
        ApiError::DatabaseConnection(err.to_string())
    }
}

impl From<diesel::result::Error> for ApiError {
    fn from(err: diesel::result::Error) -> Self {
        ApiError::Database(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(err: validator::ValidationErrors) -> Self {
        ApiError::Validation(err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        ApiError::Auth(err)
    }
}

impl From<ChapaError> for ApiError {
    fn from(err: ChapaError) -> Self {
        ApiError::Payment(err)
    }
}

impl From<ApiError> for (StatusCode, String) {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Database(e) => match e {
                diesel::result::Error::NotFound => {
                    (StatusCode::NOT_FOUND, "Resource not found".to_string())
                }
                diesel::result::Error::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => (
                    StatusCode::CONFLICT,
                    format!("Resource already exists: {}", info.message()),
                ),
                diesel::result::Error::DatabaseError(DatabaseErrorKind::CheckViolation, info) => (
                    StatusCode::BAD_REQUEST,
                    format!("Constraint violation: {}", info.message()),
                ),
                diesel::result::Error::DatabaseError(
                    DatabaseErrorKind::ForeignKeyViolation,
                    _,
                ) => (
                    StatusCode::BAD_REQUEST,
                    "Referenced resource does not exist".to_string(),
                ),
                other => {
                    tracing::error!(error = %other, "unhandled database error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
            },
            ApiError::DatabaseConnection(e) => {
                tracing::error!(error = %e, "database connection error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Database unavailable".to_string(),
                )
            }
            ApiError::Validation(errors) => (
                StatusCode::BAD_REQUEST,
                format!("Validation error: {}", errors),
            ),
            ApiError::Auth(e) => {
                let status = match e {
                    AuthError::InvalidFormat => StatusCode::BAD_REQUEST,
                    AuthError::DuplicateAccount => StatusCode::CONFLICT,
                    AuthError::MissingHeader
                    | AuthError::InvalidToken(_)
                    | AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                };
                (status, e.to_string())
            }
            ApiError::Token(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Token creation error: {}", e),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Payment(e) => match e {
                ChapaError::Rejected(msg) => (StatusCode::BAD_REQUEST, msg),
                ChapaError::Network(_) | ChapaError::InvalidResponse(_) => {
                    (StatusCode::BAD_GATEWAY, e.to_string())
                }
            },
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Internal error: {}", msg),
                )
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = self.into();
        (status, Json(json!({ "error": message }))).into_response()
    }
}
