//! City repository.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::entity::ville;
use super::storage::{StorageError, StorageResult};

/// Data access object for cities.
#[derive(Clone)]
pub struct VilleRepository {
    conn: DatabaseConnection,
}

impl VilleRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fetch every city.
    pub async fn list(&self) -> StorageResult<Vec<ville::Model>> {
        ville::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list villes", source))
    }

    /// Fetch one city.
    pub async fn find(&self, id: i32) -> StorageResult<Option<ville::Model>> {
        ville::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load ville", source))
    }

    /// Insert a city and return the stored row.
    pub async fn insert(&self, name: String) -> StorageResult<ville::Model> {
        ville::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&self.conn)
        .await
        .map_err(|source| StorageError::from_db("insert ville", source))
    }

    /// Rename a city. Returns `false` when it does not exist.
    pub async fn update(&self, id: i32, name: String) -> StorageResult<bool> {
        let result = ville::Entity::update_many()
            .col_expr(ville::Column::Name, Expr::value(name))
            .filter(ville::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update ville", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a city. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = ville::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete ville", source))?;

        Ok(result.rows_affected > 0)
    }
}
