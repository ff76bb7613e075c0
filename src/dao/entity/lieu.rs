use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Physical venue hosting a checkpoint: geolocation, description, and the
/// numeric unlock code players must scan on site.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lieu")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name of the venue.
    pub name: String,
    /// Map link pointing at the venue.
    pub gps: String,
    /// Short description shown to players.
    pub info: String,
    /// Numeric unlock code posted at the venue.
    pub code: i32,
    /// Soft-disable flag; inactive venues stay in the catalog but are hidden.
    pub active: bool,
    /// Owning city, if any.
    pub ville_id: Option<i32>,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Owning city.
    #[sea_orm(
        belongs_to = "super::ville::Entity",
        from = "Column::VilleId",
        to = "super::ville::Column::Id"
    )]
    Ville,
}

impl Related<super::ville::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Ville.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
