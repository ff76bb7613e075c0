//! Login and token issuance.
//!
//! Passwords are compared as stored; hashing is out of scope for this
//! backend. Tokens are HS256-signed with the configured secret.

use chrono::Utc;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    dao::users::UserRepository,
    dto::auth::{LoginRequest, LoginResponse},
    error::ServiceError,
    state::SharedState,
};

/// Claims carried by an issued login token.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserClaims {
    /// User id, as a string per JWT convention.
    pub sub: String,
    /// Email address of the user.
    pub mail: String,
    /// Issued-at, seconds since the epoch.
    pub iat: i64,
    /// Expiry, seconds since the epoch.
    pub exp: i64,
}

/// Verify credentials and issue a signed token.
pub async fn login(state: &SharedState, request: LoginRequest) -> Result<LoginResponse, ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);

    let Some(user) = repository.find_by_pseudo(&request.pseudo).await? else {
        return Err(ServiceError::Unauthorized("user not found".into()));
    };

    if user.password != request.password {
        return Err(ServiceError::Unauthorized("wrong password".into()));
    }

    let now = Utc::now().timestamp();
    let claims = UserClaims {
        sub: user.id.to_string(),
        mail: user.email.clone(),
        iat: now,
        exp: now + state.config().token_ttl_secs(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(state.config().token_secret().as_bytes()),
    )
    .map_err(ServiceError::TokenIssuance)?;

    info!(user_id = user.id, "user logged in");

    Ok(LoginResponse {
        token,
        id: user.id,
        pseudo: user.pseudo,
        email: user.email,
        age: user.age,
        city: user.city,
    })
}
