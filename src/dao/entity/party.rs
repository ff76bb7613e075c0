use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Game session: one user playing one route.
///
/// `etat` is the zero-based index of the checkpoint the player is currently
/// trying to reach; it starts at 0 and only ever grows.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "party")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Session start timestamp, set at creation.
    pub started_at: DateTimeUtc,
    /// Session end timestamp, set by the end/abandon operations.
    pub ended_at: Option<DateTimeUtc>,
    /// Zero-based index of the current checkpoint.
    pub etat: i32,
    /// Whether the session was abandoned rather than completed.
    pub abandoned: bool,
    /// Route being played.
    pub parkour_id: i32,
    /// Player owning the session.
    pub user_id: i32,
}

/// Entity relations. Deleting the route or the user deletes the session.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Route being played.
    #[sea_orm(
        belongs_to = "super::parkour::Entity",
        from = "Column::ParkourId",
        to = "super::parkour::Column::Id",
        on_delete = "Cascade"
    )]
    Parkour,
    /// Player owning the session.
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_delete = "Cascade"
    )]
    User,
    /// Questions assigned to the session.
    #[sea_orm(has_many = "super::party_question::Entity")]
    PartyQuestion,
}

impl Related<super::parkour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parkour.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::party_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
