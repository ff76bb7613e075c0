//! Game session repository: creation with random question assignment,
//! checkpoint advancement, unlock-code resolution, and termination.
//!
//! Everything that mutates more than one row runs inside a transaction, and
//! the `etat` increment is evaluated server-side so concurrent advances can
//! never observe the same pre-increment value.

use chrono::Utc;
use rand::seq::SliceRandom;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use thiserror::Error;

use super::entity::{lieu, parkour, party, party_question, question, user};
use super::storage::{StorageError, StorageResult};

/// Number of questions drawn for every new session.
pub const QUESTIONS_PER_PARTY: usize = 4;

/// Outcome of a successful session creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewParty {
    /// Identifier of the freshly inserted session.
    pub id: i32,
    /// The assigned question ids, in draw order.
    pub question_ids: Vec<i32>,
}

/// Current checkpoint index and the unlock code it resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentCode {
    /// Zero-based checkpoint index.
    pub etat: i32,
    /// Unlock code of the venue at that index, or `None` when `etat` is
    /// outside the checkpoint window or the slot is empty.
    pub code: Option<i32>,
}

/// Errors specific to session creation.
#[derive(Debug, Error)]
pub enum CreatePartyError {
    /// The referenced route does not exist.
    #[error("parkour `{0}` not found")]
    ParkourNotFound(i32),
    /// The referenced user does not exist.
    #[error("user `{0}` not found")]
    UserNotFound(i32),
    /// The question pool is smaller than [`QUESTIONS_PER_PARTY`].
    #[error("question pool holds {available} questions, {needed} required")]
    InsufficientQuestions {
        /// Questions currently in the pool.
        available: usize,
        /// Questions a session needs.
        needed: usize,
    },
    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Data access object encapsulating session persistence.
#[derive(Clone)]
pub struct PartyRepository {
    conn: DatabaseConnection,
}

impl PartyRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Create a session for `user_id` on `parkour_id` and assign it
    /// [`QUESTIONS_PER_PARTY`] questions drawn uniformly at random.
    ///
    /// The existence checks, the session insert, and the association inserts
    /// form one transaction: a failure at any point leaves no partial state.
    pub async fn create(&self, parkour_id: i32, user_id: i32) -> Result<NewParty, CreatePartyError> {
        let txn = self
            .conn
            .begin()
            .await
            .map_err(|source| StorageError::from_db("begin create party", source))?;

        if parkour::Entity::find_by_id(parkour_id)
            .one(&txn)
            .await
            .map_err(|source| StorageError::from_db("check parkour exists", source))?
            .is_none()
        {
            rollback(txn, "create party").await?;
            return Err(CreatePartyError::ParkourNotFound(parkour_id));
        }

        if user::Entity::find_by_id(user_id)
            .one(&txn)
            .await
            .map_err(|source| StorageError::from_db("check user exists", source))?
            .is_none()
        {
            rollback(txn, "create party").await?;
            return Err(CreatePartyError::UserNotFound(user_id));
        }

        let pool: Vec<i32> = question::Entity::find()
            .select_only()
            .column(question::Column::Id)
            .into_tuple()
            .all(&txn)
            .await
            .map_err(|source| StorageError::from_db("load question pool", source))?;

        if pool.len() < QUESTIONS_PER_PARTY {
            rollback(txn, "create party").await?;
            return Err(CreatePartyError::InsufficientQuestions {
                available: pool.len(),
                needed: QUESTIONS_PER_PARTY,
            });
        }

        let question_ids = draw_questions(pool);

        let inserted = party::ActiveModel {
            id: NotSet,
            started_at: Set(Utc::now()),
            ended_at: Set(None),
            etat: Set(0),
            abandoned: Set(false),
            parkour_id: Set(parkour_id),
            user_id: Set(user_id),
        }
        .insert(&txn)
        .await
        .map_err(|source| StorageError::from_db("insert party", source))?;

        let links = question_ids
            .iter()
            .enumerate()
            .map(|(position, question_id)| party_question::ActiveModel {
                party_id: Set(inserted.id),
                question_id: Set(*question_id),
                position: Set(position as i32),
            });
        // exec_without_returning: the association table has a composite key,
        // so there is no single last-insert id to read back.
        party_question::Entity::insert_many(links)
            .exec_without_returning(&txn)
            .await
            .map_err(|source| StorageError::from_db("insert party questions", source))?;

        txn.commit()
            .await
            .map_err(|source| StorageError::from_db("commit create party", source))?;

        Ok(NewParty {
            id: inserted.id,
            question_ids,
        })
    }

    /// Advance the session one checkpoint and return the new `etat`.
    ///
    /// The increment is a single `etat = etat + 1` update evaluated by the
    /// database, so there is no read-then-write window to lose. Returns
    /// `None` when the session does not exist.
    pub async fn advance(&self, id: i32) -> StorageResult<Option<i32>> {
        let txn = self
            .conn
            .begin()
            .await
            .map_err(|source| StorageError::from_db("begin advance party", source))?;

        let result = party::Entity::update_many()
            .col_expr(party::Column::Etat, Expr::col(party::Column::Etat).add(1))
            .filter(party::Column::Id.eq(id))
            .exec(&txn)
            .await
            .map_err(|source| StorageError::from_db("increment etat", source))?;

        if result.rows_affected == 0 {
            rollback(txn, "advance party").await?;
            return Ok(None);
        }

        let model = party::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(|source| StorageError::from_db("read etat after increment", source))?;

        txn.commit()
            .await
            .map_err(|source| StorageError::from_db("commit advance party", source))?;

        Ok(model.map(|party| party.etat))
    }

    /// Resolve the unlock code of the checkpoint the session currently
    /// points at. Returns `None` when the session does not exist.
    ///
    /// Only the venue addressed by the current `etat` is ever consulted, so
    /// a client can never learn the code of a checkpoint it has not reached.
    pub async fn current_code(&self, id: i32) -> StorageResult<Option<CurrentCode>> {
        let found = party::Entity::find_by_id(id)
            .find_also_related(parkour::Entity)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load party with parkour", source))?;

        let Some((session, route)) = found else {
            return Ok(None);
        };

        let code = match route.and_then(|route| route.lieu_at(session.etat)) {
            Some(lieu_id) => lieu::Entity::find_by_id(lieu_id)
                .one(&self.conn)
                .await
                .map_err(|source| StorageError::from_db("load checkpoint lieu", source))?
                .map(|venue| venue.code),
            None => None,
        };

        Ok(Some(CurrentCode {
            etat: session.etat,
            code,
        }))
    }

    /// Stamp the session's end date with the current time. Idempotent.
    pub async fn end(&self, id: i32) -> StorageResult<bool> {
        let result = party::Entity::update_many()
            .col_expr(party::Column::EndedAt, Expr::value(Some(Utc::now())))
            .filter(party::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("set party end date", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Mark the session abandoned and stamp its end date.
    pub async fn abandon(&self, id: i32) -> StorageResult<bool> {
        let result = party::Entity::update_many()
            .col_expr(party::Column::Abandoned, Expr::value(true))
            .col_expr(party::Column::EndedAt, Expr::value(Some(Utc::now())))
            .filter(party::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("mark party abandoned", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Read the current `etat`. Returns `None` when the session does not exist.
    pub async fn etat(&self, id: i32) -> StorageResult<Option<i32>> {
        let model = party::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("read etat", source))?;

        Ok(model.map(|party| party.etat))
    }

    /// Overwrite `etat` with an explicit value. Range validation is the
    /// caller's concern; storage accepts any non-negative integer.
    pub async fn set_etat(&self, id: i32, etat: i32) -> StorageResult<bool> {
        let result = party::Entity::update_many()
            .col_expr(party::Column::Etat, Expr::value(etat))
            .filter(party::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("overwrite etat", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Fetch one session.
    pub async fn find(&self, id: i32) -> StorageResult<Option<party::Model>> {
        party::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load party", source))
    }

    /// Fetch every session.
    pub async fn list(&self) -> StorageResult<Vec<party::Model>> {
        party::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list parties", source))
    }

    /// Re-point the session at another route and user.
    pub async fn update_refs(&self, id: i32, parkour_id: i32, user_id: i32) -> StorageResult<bool> {
        let result = party::Entity::update_many()
            .col_expr(party::Column::ParkourId, Expr::value(parkour_id))
            .col_expr(party::Column::UserId, Expr::value(user_id))
            .filter(party::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update party references", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete the session; its question associations go with it.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = party::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete party", source))?;

        Ok(result.rows_affected > 0)
    }
}

/// Shuffle the pool and keep the first [`QUESTIONS_PER_PARTY`] ids.
fn draw_questions(mut pool: Vec<i32>) -> Vec<i32> {
    let mut rng = rand::rng();
    pool.shuffle(&mut rng);
    pool.truncate(QUESTIONS_PER_PARTY);
    pool
}

async fn rollback(
    txn: sea_orm::DatabaseTransaction,
    operation: &'static str,
) -> StorageResult<()> {
    txn.rollback()
        .await
        .map_err(|source| StorageError::from_db(operation, source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn draw_questions_takes_four_distinct_ids_from_the_pool() {
        let pool: Vec<i32> = (1..=8).collect();
        let drawn = draw_questions(pool.clone());

        assert_eq!(drawn.len(), QUESTIONS_PER_PARTY);
        let distinct: HashSet<i32> = drawn.iter().copied().collect();
        assert_eq!(distinct.len(), QUESTIONS_PER_PARTY);
        assert!(drawn.iter().all(|id| pool.contains(id)));
    }

    #[test]
    fn draw_questions_keeps_a_pool_of_exactly_four_intact() {
        let mut drawn = draw_questions(vec![3, 1, 4, 2]);
        drawn.sort_unstable();
        assert_eq!(drawn, vec![1, 2, 3, 4]);
    }
}
