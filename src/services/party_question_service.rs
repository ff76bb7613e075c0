//! Session/question association management.

use crate::{
    dao::party_question::{AddQuestionsError, PartyQuestionRepository},
    dto::{party_question::AddQuestionsRequest, question::QuestionSummary},
    error::ServiceError,
    state::SharedState,
};

/// Assign extra questions to a session.
pub async fn add_questions(
    state: &SharedState,
    party_id: i32,
    request: AddQuestionsRequest,
) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyQuestionRepository::new(conn);

    repository
        .add(party_id, &request.question_ids)
        .await
        .map_err(|err| match err {
            AddQuestionsError::PartyNotFound(id) => {
                ServiceError::NotFound(format!("party `{id}` not found"))
            }
            AddQuestionsError::QuestionNotFound(id) => {
                ServiceError::NotFound(format!("question `{id}` not found"))
            }
            AddQuestionsError::AlreadyAssigned {
                party_id,
                question_id,
            } => ServiceError::Conflict(format!(
                "question `{question_id}` is already assigned to party `{party_id}`"
            )),
            AddQuestionsError::Storage(source) => source.into(),
        })
}

/// List the questions assigned to a session, in assignment order.
pub async fn list_questions(
    state: &SharedState,
    party_id: i32,
) -> Result<Vec<QuestionSummary>, ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyQuestionRepository::new(conn);

    let Some(questions) = repository.list(party_id).await? else {
        return Err(ServiceError::NotFound(format!(
            "party `{party_id}` not found"
        )));
    };

    Ok(questions.into_iter().map(Into::into).collect())
}

/// Remove one question from a session.
pub async fn remove_question(
    state: &SharedState,
    party_id: i32,
    question_id: i32,
) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyQuestionRepository::new(conn);

    if !repository.remove(party_id, question_id).await? {
        return Err(ServiceError::NotFound(format!(
            "no assignment of question `{question_id}` to party `{party_id}`"
        )));
    }

    Ok(())
}
