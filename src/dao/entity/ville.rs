use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// City a venue belongs to.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ville")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name of the city.
    pub name: String,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Venues located in this city.
    #[sea_orm(has_many = "super::lieu::Entity")]
    Lieu,
}

impl Related<super::lieu::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lieu.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
