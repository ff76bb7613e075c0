use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reward redeemable at a partner venue, priced in citrons of each color.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recompense")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
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

/// Entity relations. Deleting the venue or the category deletes the reward.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Venue where the reward can be claimed.
    #[sea_orm(
        belongs_to = "super::lieu::Entity",
        from = "Column::LieuId",
        to = "super::lieu::Column::Id",
        on_delete = "Cascade"
    )]
    Lieu,
    /// Category tag.
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
    /// Vouchers issued for this reward.
    #[sea_orm(has_many = "super::recompense_user::Entity")]
    RecompenseUser,
}

impl Related<super::lieu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lieu.def()
    }
}

impl Related<super::recompense_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecompenseUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
