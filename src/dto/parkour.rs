//! Route payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::{
    entity::{lieu, parkour},
    parkours::ParkourWithLieux,
};

/// Payload used to create or update a route.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct ParkourRequest {
    /// Display name of the route.
    #[validate(length(min = 1))]
    pub name: String,
    /// First checkpoint venue.
    pub lieu1_id: Option<i32>,
    /// Second checkpoint venue.
    pub lieu2_id: Option<i32>,
    /// Third checkpoint venue.
    pub lieu3_id: Option<i32>,
    /// Fourth checkpoint venue.
    pub lieu4_id: Option<i32>,
    /// Category tag, if any.
    pub category_id: Option<i32>,
}

impl ParkourRequest {
    /// Checkpoint venue ids in route order.
    pub fn lieu_ids(&self) -> [Option<i32>; parkour::CHECKPOINT_COUNT] {
        [self.lieu1_id, self.lieu2_id, self.lieu3_id, self.lieu4_id]
    }
}

/// Full route record.
#[derive(Debug, Serialize, ToSchema)]
pub struct ParkourSummary {
    /// Route identifier.
    pub id: i32,
    /// Display name of the route.
    pub name: String,
    /// First checkpoint venue.
    pub lieu1_id: Option<i32>,
    /// Second checkpoint venue.
    pub lieu2_id: Option<i32>,
    /// Third checkpoint venue.
    pub lieu3_id: Option<i32>,
    /// Fourth checkpoint venue.
    pub lieu4_id: Option<i32>,
    /// Category tag, if any.
    pub category_id: Option<i32>,
}

impl From<parkour::Model> for ParkourSummary {
    fn from(model: parkour::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            lieu1_id: model.lieu1_id,
            lieu2_id: model.lieu2_id,
            lieu3_id: model.lieu3_id,
            lieu4_id: model.lieu4_id,
            category_id: model.category_id,
        }
    }
}

/// Checkpoint venue as shown inside a resolved route.
#[derive(Debug, Serialize, ToSchema)]
pub struct CheckpointLieu {
    /// Venue identifier.
    pub id: i32,
    /// Display name of the venue.
    pub name: String,
    /// Map link pointing at the venue.
    pub gps: String,
}

impl From<lieu::Model> for CheckpointLieu {
    fn from(model: lieu::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            gps: model.gps,
        }
    }
}

/// Route with its checkpoint venues resolved in order.
#[derive(Debug, Serialize, ToSchema)]
pub struct ParkourDetail {
    /// Route identifier.
    pub id: i32,
    /// Display name of the route.
    pub name: String,
    /// Category tag, if any.
    pub category_id: Option<i32>,
    /// Resolved venues in route order; null for empty slots.
    pub lieux: Vec<Option<CheckpointLieu>>,
}

impl From<ParkourWithLieux> for ParkourDetail {
    fn from(value: ParkourWithLieux) -> Self {
        Self {
            id: value.parkour.id,
            name: value.parkour.name,
            category_id: value.parkour.category_id,
            lieux: value
                .lieux
                .into_iter()
                .map(|venue| venue.map(CheckpointLieu::from))
                .collect(),
        }
    }
}
