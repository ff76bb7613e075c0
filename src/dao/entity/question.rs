use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Trivia question with four answer options.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "question")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Question text.
    pub text: String,
    /// First answer option.
    pub answer1: String,
    /// Second answer option.
    pub answer2: String,
    /// Third answer option.
    pub answer3: String,
    /// Fourth answer option.
    pub answer4: String,
    /// 1-based index of the correct option, in 1..=4.
    pub correct_answer: i32,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Sessions this question has been assigned to.
    #[sea_orm(has_many = "super::party_question::Entity")]
    PartyQuestion,
}

impl Related<super::party_question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PartyQuestion.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
