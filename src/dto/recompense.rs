//! Reward payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::dao::entity::{recompense, recompense_user};

/// Payload used to create or update a reward.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RecompenseRequest {
    /// Display name of the reward.
    #[validate(length(min = 1))]
    pub name: String,
    /// Short description shown to players.
    pub info: String,
    /// Cost in blue citrons.
    #[validate(range(min = 0))]
    pub citron_bleu: i32,
    /// Cost in yellow citrons.
    #[validate(range(min = 0))]
    pub citron_jaune: i32,
    /// Cost in red citrons.
    #[validate(range(min = 0))]
    pub citron_rouge: i32,
    /// Cost in green citrons.
    #[validate(range(min = 0))]
    pub citron_vert: i32,
    /// Venue where the reward can be claimed.
    #[validate(range(min = 1))]
    pub lieu_id: i32,
    /// Category tag.
    #[validate(range(min = 1))]
    pub category_id: i32,
}

/// Full reward record.
#[derive(Debug, Serialize, ToSchema)]
pub struct RecompenseSummary {
    /// Reward identifier.
    pub id: i32,
    /// Display name of the reward.
    pub name: String,
    /// Short description shown to players.
    pub info: String,
    /// Cost in blue citrons.
    pub citron_bleu: i32,
    /// Cost in yellow citrons.
    pub citron_jaune: i32,
    /// Cost in red citrons.
    pub citron_rouge: i32,
    /// Cost in green citrons.
    pub citron_vert: i32,
    /// Venue where the reward can be claimed.
    pub lieu_id: i32,
    /// Category tag.
    pub category_id: i32,
}

impl From<recompense::Model> for RecompenseSummary {
    fn from(model: recompense::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            info: model.info,
            citron_bleu: model.citron_bleu,
            citron_jaune: model.citron_jaune,
            citron_rouge: model.citron_rouge,
            citron_vert: model.citron_vert,
            lieu_id: model.lieu_id,
            category_id: model.category_id,
        }
    }
}

/// Payload used to redeem a reward.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct RedeemRequest {
    /// User paying for the reward.
    #[validate(range(min = 1))]
    pub user_id: i32,
}

/// Voucher issued by a redemption.
#[derive(Debug, Serialize, ToSchema)]
pub struct VoucherSummary {
    /// Voucher identifier.
    pub id: i32,
    /// Redeemed reward.
    pub recompense_id: i32,
    /// Name of the redeemed reward, when still in the catalog.
    pub recompense_name: Option<String>,
    /// Voucher code shown at the venue.
    pub code: String,
}

impl VoucherSummary {
    /// Build a summary from a voucher row and the reward it references.
    pub fn new(voucher: recompense_user::Model, reward: Option<recompense::Model>) -> Self {
        Self {
            id: voucher.id,
            recompense_id: voucher.recompense_id,
            recompense_name: reward.map(|reward| reward.name),
            code: voucher.code,
        }
    }
}
