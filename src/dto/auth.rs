//! Login payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Credentials submitted on login.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LoginRequest {
    /// Display name.
    #[validate(length(min = 1))]
    pub pseudo: String,
    /// Password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Token and account snapshot returned on successful login.
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer token.
    pub token: String,
    /// User identifier.
    pub id: i32,
    /// Display name.
    pub pseudo: String,
    /// Email address.
    pub email: String,
    /// Declared age.
    pub age: i32,
    /// Declared home city.
    pub city: String,
}
