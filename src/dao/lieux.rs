//! Venue repository, including the soft-disable flag and unlock-code access.

use sea_orm::sea_query::Expr;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set};

use super::entity::lieu;
use super::storage::{StorageError, StorageResult};

/// Fields accepted when creating or updating a venue.
#[derive(Debug, Clone)]
pub struct LieuInput {
    /// Display name.
    pub name: String,
    /// Map link.
    pub gps: String,
    /// Short description.
    pub info: String,
    /// Numeric unlock code.
    pub code: i32,
    /// Owning city, if any.
    pub ville_id: Option<i32>,
}

/// Data access object for venues.
#[derive(Clone)]
pub struct LieuRepository {
    conn: DatabaseConnection,
}

impl LieuRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fetch every venue.
    pub async fn list(&self) -> StorageResult<Vec<lieu::Model>> {
        lieu::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list lieux", source))
    }

    /// Fetch one venue.
    pub async fn find(&self, id: i32) -> StorageResult<Option<lieu::Model>> {
        lieu::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load lieu", source))
    }

    /// Insert a venue; new venues start active.
    pub async fn insert(&self, input: LieuInput) -> StorageResult<lieu::Model> {
        lieu::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            gps: Set(input.gps),
            info: Set(input.info),
            code: Set(input.code),
            active: Set(true),
            ville_id: Set(input.ville_id),
        }
        .insert(&self.conn)
        .await
        .map_err(|source| StorageError::from_db("insert lieu", source))
    }

    /// Overwrite a venue's editable fields. Returns `false` when it does not exist.
    pub async fn update(&self, id: i32, input: LieuInput) -> StorageResult<bool> {
        let result = lieu::Entity::update_many()
            .col_expr(lieu::Column::Name, Expr::value(input.name))
            .col_expr(lieu::Column::Gps, Expr::value(input.gps))
            .col_expr(lieu::Column::Info, Expr::value(input.info))
            .col_expr(lieu::Column::Code, Expr::value(input.code))
            .col_expr(lieu::Column::VilleId, Expr::value(input.ville_id))
            .filter(lieu::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update lieu", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Flip the active flag without touching anything else.
    pub async fn set_active(&self, id: i32, active: bool) -> StorageResult<bool> {
        let result = lieu::Entity::update_many()
            .col_expr(lieu::Column::Active, Expr::value(active))
            .filter(lieu::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("toggle lieu active flag", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Read the unlock code of one venue.
    pub async fn code(&self, id: i32) -> StorageResult<Option<i32>> {
        let model = lieu::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("read lieu code", source))?;

        Ok(model.map(|venue| venue.code))
    }

    /// Replace the unlock code of one venue.
    pub async fn update_code(&self, id: i32, code: i32) -> StorageResult<bool> {
        let result = lieu::Entity::update_many()
            .col_expr(lieu::Column::Code, Expr::value(code))
            .filter(lieu::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update lieu code", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a venue. Returns `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = lieu::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete lieu", source))?;

        Ok(result.rows_affected > 0)
    }
}
