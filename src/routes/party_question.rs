//! Routes managing the questions assigned to a session.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};
use validator::Validate;

use crate::{
    dto::{common::ActionResponse, party_question::AddQuestionsRequest, question::QuestionSummary},
    error::AppError,
    services::party_question_service,
    state::SharedState,
};

/// Configure the session/question association routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/parties/{id}/questions",
            get(list_questions).post(add_questions),
        )
        .route(
            "/parties/{id}/questions/{question_id}",
            delete(remove_question),
        )
}

/// Assign extra questions to a session.
#[utoipa::path(
    post,
    path = "/parties/{id}/questions",
    tag = "party-question",
    params(("id" = i32, Path, description = "Session identifier")),
    request_body = AddQuestionsRequest,
    responses(
        (status = 200, description = "Questions assigned", body = ActionResponse),
        (status = 404, description = "Session or question not found"),
        (status = 409, description = "Question already assigned")
    )
)]
pub async fn add_questions(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddQuestionsRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    party_question_service::add_questions(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// List the questions assigned to a session, in assignment order.
#[utoipa::path(
    get,
    path = "/parties/{id}/questions",
    tag = "party-question",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Assigned questions", body = [QuestionSummary]),
        (status = 404, description = "Session not found")
    )
)]
pub async fn list_questions(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<QuestionSummary>>, AppError> {
    Ok(Json(
        party_question_service::list_questions(&state, id).await?,
    ))
}

/// Remove one question from a session.
#[utoipa::path(
    delete,
    path = "/parties/{id}/questions/{question_id}",
    tag = "party-question",
    params(
        ("id" = i32, Path, description = "Session identifier"),
        ("question_id" = i32, Path, description = "Question identifier")
    ),
    responses(
        (status = 200, description = "Question removed", body = ActionResponse),
        (status = 404, description = "Association not found")
    )
)]
pub async fn remove_question(
    State(state): State<SharedState>,
    Path((id, question_id)): Path<(i32, i32)>,
) -> Result<Json<ActionResponse>, AppError> {
    party_question_service::remove_question(&state, id, question_id).await?;
    Ok(Json(ActionResponse::ok()))
}
