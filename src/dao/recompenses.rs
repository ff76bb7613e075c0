//! Reward repository: catalog CRUD plus the transactional redemption path.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
    TransactionTrait,
};
use thiserror::Error;

use super::entity::{recompense, recompense_user, user};
use super::storage::{StorageError, StorageResult};
use super::users::CitronColor;

/// Fields accepted when creating or updating a reward.
#[derive(Debug, Clone)]
pub struct RecompenseInput {
    /// Display name.
    pub name: String,
    /// Short description.
    pub info: String,
    /// Cost per citron color, in bleu/jaune/rouge/vert order.
    pub costs: [i32; 4],
    /// Venue where the reward can be claimed.
    pub lieu_id: i32,
    /// Category tag.
    pub category_id: i32,
}

/// Errors specific to reward redemption.
#[derive(Debug, Error)]
pub enum RedeemError {
    /// The redeeming user does not exist.
    #[error("user `{0}` not found")]
    UserNotFound(i32),
    /// The reward does not exist.
    #[error("recompense `{0}` not found")]
    RecompenseNotFound(i32),
    /// A counter was too low to cover the cost; nothing changed.
    #[error("not enough {0} citrons")]
    InsufficientBalance(CitronColor),
    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Data access object for rewards and their redemption vouchers.
#[derive(Clone)]
pub struct RecompenseRepository {
    conn: DatabaseConnection,
}

impl RecompenseRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fetch every reward.
    pub async fn list(&self) -> StorageResult<Vec<recompense::Model>> {
        recompense::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list recompenses", source))
    }

    /// Fetch one reward.
    pub async fn find(&self, id: i32) -> StorageResult<Option<recompense::Model>> {
        recompense::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load recompense", source))
    }

    /// Insert a reward and return the stored row.
    pub async fn insert(&self, input: RecompenseInput) -> StorageResult<recompense::Model> {
        let [bleu, jaune, rouge, vert] = input.costs;
        recompense::ActiveModel {
            id: NotSet,
            name: Set(input.name),
            info: Set(input.info),
            citron_bleu: Set(bleu),
            citron_jaune: Set(jaune),
            citron_rouge: Set(rouge),
            citron_vert: Set(vert),
            lieu_id: Set(input.lieu_id),
            category_id: Set(input.category_id),
        }
        .insert(&self.conn)
        .await
        .map_err(|source| StorageError::from_db("insert recompense", source))
    }

    /// Overwrite a reward's fields. Returns `false` when it does not exist.
    pub async fn update(&self, id: i32, input: RecompenseInput) -> StorageResult<bool> {
        let [bleu, jaune, rouge, vert] = input.costs;
        let result = recompense::Entity::update_many()
            .col_expr(recompense::Column::Name, Expr::value(input.name))
            .col_expr(recompense::Column::Info, Expr::value(input.info))
            .col_expr(recompense::Column::CitronBleu, Expr::value(bleu))
            .col_expr(recompense::Column::CitronJaune, Expr::value(jaune))
            .col_expr(recompense::Column::CitronRouge, Expr::value(rouge))
            .col_expr(recompense::Column::CitronVert, Expr::value(vert))
            .col_expr(recompense::Column::LieuId, Expr::value(input.lieu_id))
            .col_expr(recompense::Column::CategoryId, Expr::value(input.category_id))
            .filter(recompense::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update recompense", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a reward; its vouchers go with it. Returns `false` when it does
    /// not exist.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = recompense::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete recompense", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Vouchers claimed by one user, joined to the rewards they stand for.
    pub async fn vouchers_for_user(
        &self,
        user_id: i32,
    ) -> StorageResult<Vec<(recompense_user::Model, Option<recompense::Model>)>> {
        recompense_user::Entity::find()
            .filter(recompense_user::Column::UserId.eq(user_id))
            .find_also_related(recompense::Entity)
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list user vouchers", source))
    }

    /// Redeem a reward for a user: debit all four counters and issue a
    /// voucher carrying `voucher_code`, all in one transaction.
    ///
    /// Every debit is guarded, so a shortfall on any color rolls the whole
    /// redemption back and reports which color was short.
    pub async fn redeem(
        &self,
        user_id: i32,
        recompense_id: i32,
        voucher_code: String,
    ) -> Result<recompense_user::Model, RedeemError> {
        let txn = self
            .conn
            .begin()
            .await
            .map_err(|source| StorageError::from_db("begin redeem", source))?;

        let Some(reward) = recompense::Entity::find_by_id(recompense_id)
            .one(&txn)
            .await
            .map_err(|source| StorageError::from_db("load recompense", source))?
        else {
            rollback(txn).await?;
            return Err(RedeemError::RecompenseNotFound(recompense_id));
        };

        if user::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|source| StorageError::from_db("check user exists", source))?
            .is_none()
        {
            rollback(txn).await?;
            return Err(RedeemError::UserNotFound(user_id));
        }

        let costs = [
            (CitronColor::Bleu, reward.citron_bleu),
            (CitronColor::Jaune, reward.citron_jaune),
            (CitronColor::Rouge, reward.citron_rouge),
            (CitronColor::Vert, reward.citron_vert),
        ];

        for (color, cost) in costs {
            if cost <= 0 {
                continue;
            }

            let column = color.column();
            let result = user::Entity::update_many()
                .col_expr(column, Expr::col(column).sub(cost))
                .filter(user::Column::Id.eq(user_id))
                .filter(column.gte(cost))
                .exec(&txn)
                .await
                .map_err(|source| StorageError::from_db("debit redemption cost", source))?;

            if result.rows_affected == 0 {
                rollback(txn).await?;
                return Err(RedeemError::InsufficientBalance(color));
            }
        }

        let voucher = recompense_user::ActiveModel {
            id: NotSet,
            user_id: Set(user_id),
            recompense_id: Set(recompense_id),
            code: Set(voucher_code),
        }
        .insert(&txn)
        .await
        .map_err(|source| StorageError::from_db("insert voucher", source))?;

        txn.commit()
            .await
            .map_err(|source| StorageError::from_db("commit redeem", source))?;

        Ok(voucher)
    }
}

async fn rollback(txn: sea_orm::DatabaseTransaction) -> StorageResult<()> {
    txn.rollback()
        .await
        .map_err(|source| StorageError::from_db("rollback redeem", source))
}
