use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Association between a session and one of its assigned questions.
///
/// `position` records assignment order so a session's question set is always
/// listed in the sequence it was drawn.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "party_question")]
pub struct Model {
    /// Session half of the composite key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub party_id: i32,
    /// Question half of the composite key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub question_id: i32,
    /// Zero-based assignment order within the session.
    pub position: i32,
}

/// Entity relations. Deleting either side deletes the association.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning session.
    #[sea_orm(
        belongs_to = "super::party::Entity",
        from = "Column::PartyId",
        to = "super::party::Column::Id",
        on_delete = "Cascade"
    )]
    Party,
    /// Assigned question.
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
