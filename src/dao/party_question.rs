//! Session/question association repository: add, list, and remove the
//! questions assigned to a game session.

use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};
use thiserror::Error;

use super::entity::{party, party_question, question};
use super::storage::{StorageError, StorageResult};

/// Errors specific to assigning questions to a session.
#[derive(Debug, Error)]
pub enum AddQuestionsError {
    /// The referenced session does not exist.
    #[error("party `{0}` not found")]
    PartyNotFound(i32),
    /// A referenced question does not exist; names the first missing id.
    #[error("question `{0}` not found")]
    QuestionNotFound(i32),
    /// A (session, question) pair already exists; nothing was inserted.
    #[error("question `{question_id}` is already assigned to party `{party_id}`")]
    AlreadyAssigned {
        /// Session side of the duplicate pair.
        party_id: i32,
        /// Question side of the duplicate pair.
        question_id: i32,
    },
    /// The underlying store failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Data access object for the session/question association table.
#[derive(Clone)]
pub struct PartyQuestionRepository {
    conn: DatabaseConnection,
}

impl PartyQuestionRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Assign `question_ids` to the session, preserving the order given.
    ///
    /// All checks and inserts run in one transaction; a missing question or
    /// an already assigned pair fails the whole call and inserts nothing.
    pub async fn add(&self, party_id: i32, question_ids: &[i32]) -> Result<(), AddQuestionsError> {
        if question_ids.is_empty() {
            return Ok(());
        }

        let txn = self
            .conn
            .begin()
            .await
            .map_err(|source| StorageError::from_db("begin add questions", source))?;

        if party::Entity::find_by_id(party_id)
            .one(&txn)
            .await
            .map_err(|source| StorageError::from_db("check party exists", source))?
            .is_none()
        {
            rollback(txn).await?;
            return Err(AddQuestionsError::PartyNotFound(party_id));
        }

        for &question_id in question_ids {
            if question::Entity::find_by_id(question_id)
                .one(&txn)
                .await
                .map_err(|source| StorageError::from_db("check question exists", source))?
                .is_none()
            {
                rollback(txn).await?;
                return Err(AddQuestionsError::QuestionNotFound(question_id));
            }
        }

        let existing = party_question::Entity::find()
            .filter(party_question::Column::PartyId.eq(party_id))
            .all(&txn)
            .await
            .map_err(|source| StorageError::from_db("load existing assignments", source))?;

        if let Some(&question_id) = question_ids
            .iter()
            .find(|id| existing.iter().any(|link| link.question_id == **id))
        {
            rollback(txn).await?;
            return Err(AddQuestionsError::AlreadyAssigned {
                party_id,
                question_id,
            });
        }

        // Positions continue after the ones already assigned so the overall
        // order stays total.
        let next_position = existing
            .iter()
            .map(|link| link.position + 1)
            .max()
            .unwrap_or(0);

        let links = question_ids
            .iter()
            .enumerate()
            .map(|(offset, question_id)| party_question::ActiveModel {
                party_id: Set(party_id),
                question_id: Set(*question_id),
                position: Set(next_position + offset as i32),
            });
        // exec_without_returning: the association table has a composite key,
        // so there is no single last-insert id to read back.
        party_question::Entity::insert_many(links)
            .exec_without_returning(&txn)
            .await
            .map_err(|source| {
                StorageError::from_db_with_duplicate(
                    "insert assignments",
                    format!("assignment for party `{party_id}`"),
                    source,
                )
            })?;

        txn.commit()
            .await
            .map_err(|source| StorageError::from_db("commit add questions", source))?;

        Ok(())
    }

    /// Full question records assigned to the session, in assignment order.
    /// Returns `None` when the session does not exist.
    pub async fn list(&self, party_id: i32) -> StorageResult<Option<Vec<question::Model>>> {
        if party::Entity::find_by_id(party_id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("check party exists", source))?
            .is_none()
        {
            return Ok(None);
        }

        let rows = party_question::Entity::find()
            .filter(party_question::Column::PartyId.eq(party_id))
            .order_by_asc(party_question::Column::Position)
            .find_also_related(question::Entity)
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list assigned questions", source))?;

        Ok(Some(
            rows.into_iter()
                .filter_map(|(_, question)| question)
                .collect(),
        ))
    }

    /// Remove one (session, question) association. Returns `false` when the
    /// pair does not exist.
    pub async fn remove(&self, party_id: i32, question_id: i32) -> StorageResult<bool> {
        let result = party_question::Entity::delete_many()
            .filter(party_question::Column::PartyId.eq(party_id))
            .filter(party_question::Column::QuestionId.eq(question_id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("remove assignment", source))?;

        Ok(result.rows_affected > 0)
    }
}

async fn rollback(txn: sea_orm::DatabaseTransaction) -> StorageResult<()> {
    txn.rollback()
        .await
        .map_err(|source| StorageError::from_db("rollback add questions", source))
}
