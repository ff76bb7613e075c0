//! User repository, including the per-color citron counters.
//!
//! Counter debits are guarded updates (`SET x = x - n WHERE x >= n`) so a
//! balance can never go negative, no matter how requests interleave.

use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
    TransactionTrait,
};
use serde::Deserialize;

use super::entity::user;
use super::storage::{StorageError, StorageResult};

/// One of the four citron colors a user can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CitronColor {
    /// Blue citrons.
    Bleu,
    /// Yellow citrons.
    Jaune,
    /// Red citrons.
    Rouge,
    /// Green citrons.
    Vert,
}

impl CitronColor {
    /// Column holding this color's balance.
    pub fn column(self) -> user::Column {
        match self {
            CitronColor::Bleu => user::Column::CitronBleu,
            CitronColor::Jaune => user::Column::CitronJaune,
            CitronColor::Rouge => user::Column::CitronRouge,
            CitronColor::Vert => user::Column::CitronVert,
        }
    }
}

impl std::fmt::Display for CitronColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            CitronColor::Bleu => "bleu",
            CitronColor::Jaune => "jaune",
            CitronColor::Rouge => "rouge",
            CitronColor::Vert => "vert",
        };
        f.write_str(name)
    }
}

/// Outcome of a citron debit against an existing user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitronDebit {
    /// The counter was decremented.
    Applied,
    /// The balance was too low; nothing changed.
    Insufficient,
}

/// Fields accepted when creating a user.
#[derive(Debug, Clone)]
pub struct UserInput {
    /// Unique display name.
    pub pseudo: String,
    /// Unique email address.
    pub email: String,
    /// Password, stored as provided.
    pub password: String,
    /// Declared age.
    pub age: i32,
    /// Declared home city.
    pub city: String,
}

/// Data access object for user accounts.
#[derive(Clone)]
pub struct UserRepository {
    conn: DatabaseConnection,
}

impl UserRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fetch every user.
    pub async fn list(&self) -> StorageResult<Vec<user::Model>> {
        user::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list users", source))
    }

    /// Fetch one user by id.
    pub async fn find(&self, id: i32) -> StorageResult<Option<user::Model>> {
        user::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load user", source))
    }

    /// Fetch one user by display name.
    pub async fn find_by_pseudo(&self, pseudo: &str) -> StorageResult<Option<user::Model>> {
        user::Entity::find()
            .filter(user::Column::Pseudo.eq(pseudo))
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load user by pseudo", source))
    }

    /// Insert a user with zeroed counters. A duplicate pseudo or email
    /// surfaces as [`StorageError::Duplicate`].
    pub async fn insert(&self, input: UserInput) -> StorageResult<user::Model> {
        let duplicate = format!("pseudo `{}` or email `{}`", input.pseudo, input.email);
        user::ActiveModel {
            id: NotSet,
            pseudo: Set(input.pseudo),
            email: Set(input.email),
            password: Set(input.password),
            created_at: Set(Utc::now()),
            age: Set(input.age),
            city: Set(input.city),
            citron_bleu: Set(0),
            citron_jaune: Set(0),
            citron_rouge: Set(0),
            citron_vert: Set(0),
        }
        .insert(&self.conn)
        .await
        .map_err(|source| StorageError::from_db_with_duplicate("insert user", duplicate, source))
    }

    /// Replace the stored password. Returns `false` when the user does not exist.
    pub async fn change_password(&self, id: i32, password: String) -> StorageResult<bool> {
        let result = user::Entity::update_many()
            .col_expr(user::Column::Password, Expr::value(password))
            .filter(user::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("change password", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Replace the stored email. Returns `false` when the user does not exist;
    /// a duplicate email surfaces as [`StorageError::Duplicate`].
    pub async fn change_email(&self, id: i32, email: String) -> StorageResult<bool> {
        let duplicate = format!("email `{email}`");
        let result = user::Entity::update_many()
            .col_expr(user::Column::Email, Expr::value(email))
            .filter(user::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| {
                StorageError::from_db_with_duplicate("change email", duplicate, source)
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Credit `amount` citrons of `color`. Returns `false` when the user does
    /// not exist.
    pub async fn add_citrons(&self, id: i32, color: CitronColor, amount: i32) -> StorageResult<bool> {
        let column = color.column();
        let result = user::Entity::update_many()
            .col_expr(column, Expr::col(column).add(amount))
            .filter(user::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("credit citrons", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Debit `amount` citrons of `color`, refusing to drive the balance
    /// negative. Returns `None` when the user does not exist.
    pub async fn remove_citrons(
        &self,
        id: i32,
        color: CitronColor,
        amount: i32,
    ) -> StorageResult<Option<CitronDebit>> {
        let txn = self
            .conn
            .begin()
            .await
            .map_err(|source| StorageError::from_db("begin citron debit", source))?;

        if user::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|source| StorageError::from_db("check user exists", source))?
            .is_none()
        {
            txn.rollback()
                .await
                .map_err(|source| StorageError::from_db("rollback citron debit", source))?;
            return Ok(None);
        }

        let column = color.column();
        let result = user::Entity::update_many()
            .col_expr(column, Expr::col(column).sub(amount))
            .filter(user::Column::Id.eq(id))
            .filter(column.gte(amount))
            .exec(&txn)
            .await
            .map_err(|source| StorageError::from_db("debit citrons", source))?;

        txn.commit()
            .await
            .map_err(|source| StorageError::from_db("commit citron debit", source))?;

        Ok(Some(if result.rows_affected > 0 {
            CitronDebit::Applied
        } else {
            CitronDebit::Insufficient
        }))
    }

    /// Delete a user; dependent sessions and vouchers go with it. Returns
    /// `false` when the user does not exist.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = user::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete user", source))?;

        Ok(result.rows_affected > 0)
    }
}
