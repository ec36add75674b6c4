use crate::utility::validate_password;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "guest@example.com")]
    #[validate(email)]
    pub email: String,

    #[schema(example = "P@ssw0rd1234!", format = "password")]
    #[validate(custom(function = "validate_password"))]
    pub password: String,

    /// Defaults to the email address.
    #[validate(length(min = 3, max = 150))]
    pub username: Option<String>,

    #[validate(length(max = 150))]
    pub first_name: Option<String>,

    #[validate(length(max = 150))]
    pub last_name: Option<String>,
}

impl RegisterRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();

        self.username = self
            .username
            .map(|u| u.trim().to_lowercase())
            .filter(|u| !u.is_empty());
        self.first_name = trimmed(self.first_name);
        self.last_name = trimmed(self.last_name);
        self
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "guest@example.com")]
    pub email: String,

    #[schema(example = "P@ssw0rd1234!", format = "password")]
    pub password: String,
}

impl LoginRequest {
    pub fn normalize(mut self) -> Self {
        self.email = self.email.trim().to_lowercase();
        self
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    pub user_id: Uuid,
    #[schema(example = "guest@example.com")]
    pub email: String,
}
