//! Venue payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::entity::lieu;

/// Payload used to create or update a venue.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct LieuRequest {
    /// Display name of the venue.
    #[validate(length(min = 1))]
    pub name: String,
    /// Map link pointing at the venue.
    #[validate(length(min = 1))]
    pub gps: String,
    /// Short description shown to players.
    pub info: String,
    /// Numeric unlock code posted at the venue.
    #[validate(range(min = 0))]
    pub code: i32,
    /// Owning city, if any.
    pub ville_id: Option<i32>,
}

/// Full venue record.
#[derive(Debug, Serialize, ToSchema)]
pub struct LieuSummary {
    /// Venue identifier.
    pub id: i32,
    /// Display name of the venue.
    pub name: String,
    /// Map link pointing at the venue.
    pub gps: String,
    /// Short description shown to players.
    pub info: String,
    /// Numeric unlock code posted at the venue.
    pub code: i32,
    /// Whether the venue is currently active.
    pub active: bool,
    /// Owning city, if any.
    pub ville_id: Option<i32>,
}

impl From<lieu::Model> for LieuSummary {
    fn from(model: lieu::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gps: model.gps,
            info: model.info,
            code: model.code,
            active: model.active,
            ville_id: model.ville_id,
        }
    }
}

/// Bare venue name.
#[derive(Debug, Serialize, ToSchema)]
pub struct LieuNameResponse {
    /// Display name of the venue.
    pub name: String,
}

/// Bare unlock code.
#[derive(Debug, Serialize, ToSchema)]
pub struct LieuCodeResponse {
    /// Numeric unlock code.
    pub code: i32,
}

/// Payload used to replace a venue's unlock code.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdateCodeRequest {
    /// New unlock code.
    #[validate(range(min = 0))]
    pub code: i32,
}
