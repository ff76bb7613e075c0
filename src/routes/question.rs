//! Question catalog routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::{
        common::ActionResponse,
        question::{QuestionIdsResponse, QuestionRequest, QuestionSummary},
    },
    error::AppError,
    services::catalog_service,
    state::SharedState,
};

/// Configure the question routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/ids", get(list_question_ids))
        .route(
            "/questions/{id}",
            get(get_question).put(update_question).delete(delete_question),
        )
}

/// List every question.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "question",
    responses((status = 200, description = "All questions", body = [QuestionSummary]))
)]
pub async fn list_questions(
    State(state): State<SharedState>,
) -> Result<Json<Vec<QuestionSummary>>, AppError> {
    Ok(Json(catalog_service::list_questions(&state).await?))
}

/// List every question id.
#[utoipa::path(
    get,
    path = "/questions/ids",
    tag = "question",
    responses((status = 200, description = "All question ids", body = QuestionIdsResponse))
)]
pub async fn list_question_ids(
    State(state): State<SharedState>,
) -> Result<Json<QuestionIdsResponse>, AppError> {
    Ok(Json(catalog_service::list_question_ids(&state).await?))
}

/// Fetch one question.
#[utoipa::path(
    get,
    path = "/questions/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question found", body = QuestionSummary),
        (status = 404, description = "Question not found")
    )
)]
pub async fn get_question(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<QuestionSummary>, AppError> {
    Ok(Json(catalog_service::get_question(&state, id).await?))
}

/// Create a question.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "question",
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Question created", body = QuestionSummary),
        (status = 400, description = "Correct answer out of range")
    )
)]
pub async fn create_question(
    State(state): State<SharedState>,
    Json(payload): Json<QuestionRequest>,
) -> Result<Json<QuestionSummary>, AppError> {
    payload.validate()?;
    Ok(Json(catalog_service::create_question(&state, payload).await?))
}

/// Overwrite a question's fields.
#[utoipa::path(
    put,
    path = "/questions/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Question identifier")),
    request_body = QuestionRequest,
    responses(
        (status = 200, description = "Question updated", body = ActionResponse),
        (status = 404, description = "Question not found")
    )
)]
pub async fn update_question(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<QuestionRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    catalog_service::update_question(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a question.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "question",
    params(("id" = i32, Path, description = "Question identifier")),
    responses(
        (status = 200, description = "Question deleted", body = ActionResponse),
        (status = 404, description = "Question not found")
    )
)]
pub async fn delete_question(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::delete_question(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}
