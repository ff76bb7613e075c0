//! Session/question association payloads.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

/// Payload used to assign extra questions to a session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct AddQuestionsRequest {
    /// Question ids to assign, in the order they should be presented.
    #[validate(length(min = 1))]
    pub question_ids: Vec<i32>,
}
