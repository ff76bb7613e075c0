use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of checkpoint slots a route carries.
pub const CHECKPOINT_COUNT: usize = 4;

/// Route: an ordered sequence of checkpoint venues plus a category tag.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "parkour")]
pub struct Model {
    /// Primary key.
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Display name of the route.
    pub name: String,
    /// First checkpoint venue.
    pub lieu1_id: Option<i32>,
    /// Second checkpoint venue.
    pub lieu2_id: Option<i32>,
    /// Third checkpoint venue.
    pub lieu3_id: Option<i32>,
    /// Fourth checkpoint venue.
    pub lieu4_id: Option<i32>,
    /// Category tag, if any.
    pub category_id: Option<i32>,
}

impl Model {
    /// Checkpoint venue ids in route order.
    ///
    /// The single source for the route-length concept: the party engine
    /// derives its valid `etat` window from this slice rather than repeating
    /// the slot count.
    pub fn lieu_ids(&self) -> [Option<i32>; CHECKPOINT_COUNT] {
        [self.lieu1_id, self.lieu2_id, self.lieu3_id, self.lieu4_id]
    }

    /// Venue occupying the checkpoint slot addressed by `etat`, if in range.
    pub fn lieu_at(&self, etat: i32) -> Option<i32> {
        usize::try_from(etat)
            .ok()
            .and_then(|index| self.lieu_ids().get(index).copied())
            .flatten()
    }
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Venue in slot 1.
    #[sea_orm(
        belongs_to = "super::lieu::Entity",
        from = "Column::Lieu1Id",
        to = "super::lieu::Column::Id"
    )]
    Lieu1,
    /// Venue in slot 2.
    #[sea_orm(
        belongs_to = "super::lieu::Entity",
        from = "Column::Lieu2Id",
        to = "super::lieu::Column::Id"
    )]
    Lieu2,
    /// Venue in slot 3.
    #[sea_orm(
        belongs_to = "super::lieu::Entity",
        from = "Column::Lieu3Id",
        to = "super::lieu::Column::Id"
    )]
    Lieu3,
    /// Venue in slot 4.
    #[sea_orm(
        belongs_to = "super::lieu::Entity",
        from = "Column::Lieu4Id",
        to = "super::lieu::Column::Id"
    )]
    Lieu4,
    /// Category tag.
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
    /// Sessions playing this route.
    #[sea_orm(has_many = "super::party::Entity")]
    Party,
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::party::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Party.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn parkour() -> Model {
        Model {
            id: 1,
            name: "Parcours Bar 1".into(),
            lieu1_id: Some(10),
            lieu2_id: Some(11),
            lieu3_id: None,
            lieu4_id: Some(13),
            category_id: Some(1),
        }
    }

    #[test]
    fn lieu_at_maps_etat_to_slots_in_order() {
        let route = parkour();
        assert_eq!(route.lieu_at(0), Some(10));
        assert_eq!(route.lieu_at(1), Some(11));
        assert_eq!(route.lieu_at(2), None);
        assert_eq!(route.lieu_at(3), Some(13));
    }

    #[test]
    fn lieu_at_is_none_outside_the_checkpoint_window() {
        let route = parkour();
        assert_eq!(route.lieu_at(4), None);
        assert_eq!(route.lieu_at(-1), None);
    }
}
