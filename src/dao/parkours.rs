//! Route repository.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::entity::{lieu, parkour};
use super::storage::{StorageError, StorageResult};

/// Fields accepted when creating or updating a route.
#[derive(Debug, Clone)]
pub struct ParkourInput {
    /// Display name.
    pub name: String,
    /// Checkpoint venues in route order.
    pub lieu_ids: [Option<i32>; parkour::CHECKPOINT_COUNT],
    /// Category tag, if any.
    pub category_id: Option<i32>,
}

/// A route with its checkpoint venues resolved.
#[derive(Debug, Clone)]
pub struct ParkourWithLieux {
    /// The route row.
    pub parkour: parkour::Model,
    /// Resolved venues in route order; `None` for empty slots.
    pub lieux: Vec<Option<lieu::Model>>,
}

/// Data access object for routes.
#[derive(Clone)]
pub struct ParkourRepository {
    conn: DatabaseConnection,
}

impl ParkourRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fetch every route.
    pub async fn list(&self) -> StorageResult<Vec<parkour::Model>> {
        parkour::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list parkours", source))
    }

    /// Fetch one route.
    pub async fn find(&self, id: i32) -> StorageResult<Option<parkour::Model>> {
        parkour::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load parkour", source))
    }

    /// Fetch one route with its checkpoint venues resolved in order.
    pub async fn find_with_lieux(&self, id: i32) -> StorageResult<Option<ParkourWithLieux>> {
        let Some(route) = self.find(id).await? else {
            return Ok(None);
        };

        let mut lieux = Vec::with_capacity(parkour::CHECKPOINT_COUNT);
        for slot in route.lieu_ids() {
            let venue = match slot {
                Some(lieu_id) => lieu::Entity::find_by_id(lieu_id)
                    .one(&self.conn)
                    .await
                    .map_err(|source| StorageError::from_db("load checkpoint lieu", source))?,
                None => None,
            };
            lieux.push(venue);
        }

        Ok(Some(ParkourWithLieux {
            parkour: route,
            lieux,
        }))
    }

    /// Insert a route and return the stored row.
    pub async fn insert(&self, input: ParkourInput) -> StorageResult<parkour::Model> {
        let [lieu1, lieu2, lieu3, lieu4] = input.lieu_ids;
        parkour::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            lieu1_id: Set(lieu1),
            lieu2_id: Set(lieu2),
            lieu3_id: Set(lieu3),
            lieu4_id: Set(lieu4),
            category_id: Set(input.category_id),
        }
        .insert(&self.conn)
        .await
        .map_err(|source| StorageError::from_db("insert parkour", source))
    }

    /// Overwrite a route's fields. Returns `false` when it does not exist.
    pub async fn update(&self, id: i32, input: ParkourInput) -> StorageResult<bool> {
        let [lieu1, lieu2, lieu3, lieu4] = input.lieu_ids;
        let result = parkour::Entity::update_many()
            .col_expr(parkour::Column::Name, Expr::value(input.name))
            .col_expr(parkour::Column::Lieu1Id, Expr::value(lieu1))
            .col_expr(parkour::Column::Lieu2Id, Expr::value(lieu2))
            .col_expr(parkour::Column::Lieu3Id, Expr::value(lieu3))
            .col_expr(parkour::Column::Lieu4Id, Expr::value(lieu4))
            .col_expr(parkour::Column::CategoryId, Expr::value(input.category_id))
            .filter(parkour::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update parkour", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a route; dependent sessions go with it. Returns `false` when it
    /// does not exist.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = parkour::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete parkour", source))?;

        Ok(result.rows_affected > 0)
    }
}
