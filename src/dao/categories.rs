//! Category repository.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::entity::category;
use super::storage::{StorageError, StorageResult};

/// Data access object for categories.
#[derive(Clone)]
pub struct CategoryRepository {
    conn: DatabaseConnection,
}

impl CategoryRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fetch every category.
    pub async fn list(&self) -> StorageResult<Vec<category::Model>> {
        category::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list categories", source))
    }

    /// Fetch one category.
    pub async fn find(&self, id: i32) -> StorageResult<Option<category::Model>> {
        category::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load category", source))
    }

    /// Insert a category and return the stored row.
    pub async fn insert(&self, name: String) -> StorageResult<category::Model> {
        category::ActiveModel {
            id: NotSet,
            name: Set(name),
        }
        .insert(&self.conn)
        .await
        .map_err(|source| StorageError::from_db("insert category", source))
    }

    /// Rename a category. Returns `false` when it does not exist.
    pub async fn update(&self, id: i32, name: String) -> StorageResult<bool> {
        let result = category::Entity::update_many()
            .col_expr(category::Column::Name, Expr::value(name))
            .filter(category::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update category", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a category. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = category::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete category", source))?;

        Ok(result.rows_affected > 0)
    }
}
