//! User payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{dao::entity::user, dto::format_datetime};

/// Payload used to register a new user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreateUserRequest {
    /// Unique display name.
    #[validate(length(min = 1, max = 25))]
    pub pseudo: String,
    /// Unique email address.
    #[validate(email)]
    pub email: String,
    /// Password, stored as provided.
    #[validate(length(min = 1))]
    pub password: String,
    /// Declared age.
    #[validate(range(min = 0))]
    pub age: i32,
    /// Declared home city.
    pub city: String,
}

/// User record as exposed to clients; the password never leaves the store.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummary {
    /// User identifier.
    pub id: i32,
    /// Display name.
    pub pseudo: String,
    /// Email address.
    pub email: String,
    /// Account creation timestamp (RFC 3339).
    pub created_at: String,
    /// Declared age.
    pub age: i32,
    /// Declared home city.
    pub city: String,
    /// Blue citron balance.
    pub citron_bleu: i32,
    /// Yellow citron balance.
    pub citron_jaune: i32,
    /// Red citron balance.
    pub citron_rouge: i32,
    /// Green citron balance.
    pub citron_vert: i32,
}

impl From<user::Model> for UserSummary {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            pseudo: model.pseudo,
            email: model.email,
            created_at: format_datetime(model.created_at),
            age: model.age,
            city: model.city,
            citron_bleu: model.citron_bleu,
            citron_jaune: model.citron_jaune,
            citron_rouge: model.citron_rouge,
            citron_vert: model.citron_vert,
        }
    }
}

/// Payload used to replace a user's password.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordRequest {
    /// New password.
    #[validate(length(min = 1))]
    pub password: String,
}

/// Payload used to replace a user's email.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ChangeEmailRequest {
    /// New email address.
    #[validate(email)]
    pub email: String,
}

/// Payload used to credit or debit citrons.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CitronRequest {
    /// Number of citrons to move; must be positive.
    #[validate(range(min = 1))]
    pub amount: i32,
}
