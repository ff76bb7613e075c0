use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Voucher issued when a user redeems a reward.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "recompense_user")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// User who redeemed the reward.
    pub user_id: i32,
    /// Redeemed reward.
    pub recompense_id: i32,
    /// Voucher code shown at the venue.
    pub code: String,
}

/// Entity relations. Deleting the user or the reward deletes the voucher.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// User who redeemed the reward.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    /// Redeemed reward.
    #[sea_orm(
        belongs_to = "super::recompense::Entity",
        from = "Column::RecompenseId",
        to = "super::recompense::Column::Id",
        on_delete = "Cascade"
    )]
    Recompense,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::recompense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recompense.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
