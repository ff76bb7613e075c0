//! Question payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::{dao::entity::question, dto::validation::validate_correct_answer};

/// Payload used to create or update a question.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuestionRequest {
    /// Question text.
    pub text: String,
    /// First answer option.
    pub answer1: String,
    /// Second answer option.
    pub answer2: String,
    /// Third answer option.
    pub answer3: String,
    /// Fourth answer option.
    pub answer4: String,
    /// 1-based index of the correct option.
    pub correct_answer: i32,
}

impl Validate for QuestionRequest {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let fields = [
            ("text", &self.text),
            ("answer1", &self.answer1),
            ("answer2", &self.answer2),
            ("answer3", &self.answer3),
            ("answer4", &self.answer4),
        ];
        for (field, value) in fields {
            if value.trim().is_empty() {
                let mut err = ValidationError::new("length");
                err.message = Some(format!("{field} must not be empty").into());
                errors.add(field, err);
            }
        }

        if let Err(e) = validate_correct_answer(self.correct_answer) {
            errors.add("correct_answer", e);
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Full question record.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionSummary {
    /// Question identifier.
    pub id: i32,
    /// Question text.
    pub text: String,
    /// First answer option.
    pub answer1: String,
    /// Second answer option.
    pub answer2: String,
    /// Third answer option.
    pub answer3: String,
    /// Fourth answer option.
    pub answer4: String,
    /// 1-based index of the correct option.
    pub correct_answer: i32,
}

impl From<question::Model> for QuestionSummary {
    fn from(model: question::Model) -> Self {
        Self {
            id: model.id,
            text: model.text,
            answer1: model.answer1,
            answer2: model.answer2,
            answer3: model.answer3,
            answer4: model.answer4,
            correct_answer: model.correct_answer,
        }
    }
}

/// Bare list of question identifiers.
#[derive(Debug, Serialize, ToSchema)]
pub struct QuestionIdsResponse {
    /// Every question id in the pool.
    pub ids: Vec<i32>,
}
