//! Question repository.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter,
    QuerySelect, Set,
};

use super::entity::question;
use super::storage::{StorageError, StorageResult};

/// Fields accepted when creating or updating a question.
#[derive(Debug, Clone)]
pub struct QuestionInput {
    /// Question text.
    pub text: String,
    /// The four answer options, in display order.
    pub answers: [String; 4],
    /// 1-based index of the correct option.
    pub correct_answer: i32,
}

/// Data access object for trivia questions.
#[derive(Clone)]
pub struct QuestionRepository {
    conn: DatabaseConnection,
}

impl QuestionRepository {
    /// Wrap a database connection.
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// Fetch every question.
    pub async fn list(&self) -> StorageResult<Vec<question::Model>> {
        question::Entity::find()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list questions", source))
    }

    /// Fetch every question id.
    pub async fn ids(&self) -> StorageResult<Vec<i32>> {
        question::Entity::find()
            .select_only()
            .column(question::Column::Id)
            .into_tuple()
            .all(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("list question ids", source))
    }

    /// Fetch one question.
    pub async fn find(&self, id: i32) -> StorageResult<Option<question::Model>> {
        question::Entity::find_by_id(id)
            .one(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("load question", source))
    }

    /// Insert a question and return the stored row.
    pub async fn insert(&self, input: QuestionInput) -> StorageResult<question::Model> {
        let [answer1, answer2, answer3, answer4] = input.answers;
        question::ActiveModel {
            id: NotSet,
            text: Set(input.text),
            answer1: Set(answer1),
            answer2: Set(answer2),
            answer3: Set(answer3),
            answer4: Set(answer4),
            correct_answer: Set(input.correct_answer),
        }
        .insert(&self.conn)
        .await
        .map_err(|source| StorageError::from_db("insert question", source))
    }

    /// Overwrite a question's fields. Returns `false` when it does not exist.
    pub async fn update(&self, id: i32, input: QuestionInput) -> StorageResult<bool> {
        let [answer1, answer2, answer3, answer4] = input.answers;
        let result = question::Entity::update_many()
            .col_expr(question::Column::Text, Expr::value(input.text))
            .col_expr(question::Column::Answer1, Expr::value(answer1))
            .col_expr(question::Column::Answer2, Expr::value(answer2))
            .col_expr(question::Column::Answer3, Expr::value(answer3))
            .col_expr(question::Column::Answer4, Expr::value(answer4))
            .col_expr(
                question::Column::CorrectAnswer,
                Expr::value(input.correct_answer),
            )
            .filter(question::Column::Id.eq(id))
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("update question", source))?;

        Ok(result.rows_affected > 0)
    }

    /// Delete a question; its session associations go with it. Returns
    /// `false` when it does not exist.
    pub async fn delete(&self, id: i32) -> StorageResult<bool> {
        let result = question::Entity::delete_by_id(id)
            .exec(&self.conn)
            .await
            .map_err(|source| StorageError::from_db("delete question", source))?;

        Ok(result.rows_affected > 0)
    }
}
