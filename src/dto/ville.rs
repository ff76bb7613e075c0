//! City payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::entity::ville;

/// Payload used to create or rename a city.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct VilleRequest {
    /// Display name of the city.
    #[validate(length(min = 1))]
    pub name: String,
}

/// Full city record.
#[derive(Debug, Serialize, ToSchema)]
pub struct VilleSummary {
    /// City identifier.
    pub id: i32,
    /// Display name of the city.
    pub name: String,
}

impl From<ville::Model> for VilleSummary {
    fn from(model: ville::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
