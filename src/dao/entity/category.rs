use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category tag shared by routes and rewards (bar, museum, ...).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name of the category.
    pub name: String,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Routes tagged with this category.
    #[sea_orm(has_many = "super::parkour::Entity")]
    Parkour,
}

impl Related<super::parkour::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parkour.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
