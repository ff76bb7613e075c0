//! Category payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::entity::category;

/// Payload used to create or rename a category.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CategoryRequest {
    /// Display name of the category.
    #[validate(length(min = 1))]
    pub name: String,
}

/// Full category record.
#[derive(Debug, Serialize, ToSchema)]
pub struct CategorySummary {
    /// Category identifier.
    pub id: i32,
    /// Display name of the category.
    pub name: String,
}

impl From<category::Model> for CategorySummary {
    fn from(model: category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}
