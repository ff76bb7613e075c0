use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Player account with its four citron counters.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Unique display name.
    #[sea_orm(unique)]
    pub pseudo: String,
    /// Unique email address.
    #[sea_orm(unique)]
    pub email: String,
    /// Stored password. No hashing by design.
    pub password: String,
    /// Account creation timestamp.
    pub created_at: DateTimeUtc,
    /// Declared age.
    pub age: i32,
    /// Declared home city.
    pub city: String,
    /// Blue citron balance. Never negative.
    pub citron_bleu: i32,
    /// Yellow citron balance. Never negative.
    pub citron_jaune: i32,
    /// Red citron balance. Never negative.
    pub citron_rouge: i32,
    /// Green citron balance. Never negative.
    pub citron_vert: i32,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Sessions started by this user.
    #[sea_orm(has_many = "super::party::Entity")]
    Party,
    /// Reward vouchers claimed by this user.
    #[sea_orm(has_many = "super::recompense_user::Entity")]
    RecompenseUser,
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl Related<super::recompense_user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RecompenseUser.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
