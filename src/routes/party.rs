//! Routes driving the session progression engine.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dto::{
        common::ActionResponse,
        party::{
            AdvanceResponse, CreatePartyRequest, CurrentCodeResponse, EtatResponse, PartyCreated,
            PartySummary, SetEtatRequest, UpdatePartyRequest,
        },
    },
    error::AppError,
    services::party_service,
    state::SharedState,
};

/// Configure the session routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/parties", post(create_party).get(list_parties))
        .route(
            "/parties/{id}",
            get(get_party).put(update_party).delete(delete_party),
        )
        .route("/parties/{id}/advance", put(advance_party))
        .route("/parties/{id}/code", get(current_code))
        .route("/parties/{id}/end", put(end_party))
        .route("/parties/{id}/abandon", put(abandon_party))
        .route("/parties/{id}/etat", get(get_etat).put(set_etat))
}

/// Start a session and draw its random question set.
#[utoipa::path(
    post,
    path = "/parties",
    tag = "party",
    request_body = CreatePartyRequest,
    responses(
        (status = 200, description = "Session created", body = PartyCreated),
        (status = 404, description = "Route or user not found")
    )
)]
pub async fn create_party(
    State(state): State<SharedState>,
    Json(payload): Json<CreatePartyRequest>,
) -> Result<Json<PartyCreated>, AppError> {
    payload.validate()?;
    Ok(Json(party_service::create_party(&state, payload).await?))
}

/// List every session.
#[utoipa::path(
    get,
    path = "/parties",
    tag = "party",
    responses((status = 200, description = "All sessions", body = [PartySummary]))
)]
pub async fn list_parties(
    State(state): State<SharedState>,
) -> Result<Json<Vec<PartySummary>>, AppError> {
    Ok(Json(party_service::list_parties(&state).await?))
}

/// Fetch one session.
#[utoipa::path(
    get,
    path = "/parties/{id}",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Session found", body = PartySummary),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_party(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<PartySummary>, AppError> {
    Ok(Json(party_service::get_party(&state, id).await?))
}

/// Re-point a session at another route and user.
#[utoipa::path(
    put,
    path = "/parties/{id}",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    request_body = UpdatePartyRequest,
    responses(
        (status = 200, description = "Session updated", body = ActionResponse),
        (status = 404, description = "Session, route, or user not found")
    )
)]
pub async fn update_party(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePartyRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    party_service::update_party(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a session and its question associations.
#[utoipa::path(
    delete,
    path = "/parties/{id}",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Session deleted", body = ActionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn delete_party(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    party_service::delete_party(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Advance a session one checkpoint.
#[utoipa::path(
    put,
    path = "/parties/{id}/advance",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "New checkpoint index", body = AdvanceResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn advance_party(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<AdvanceResponse>, AppError> {
    Ok(Json(party_service::advance_party(&state, id).await?))
}

/// Resolve the unlock code of the session's current checkpoint.
#[utoipa::path(
    get,
    path = "/parties/{id}/code",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Current checkpoint code", body = CurrentCodeResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn current_code(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<CurrentCodeResponse>, AppError> {
    Ok(Json(party_service::current_code(&state, id).await?))
}

/// Stamp the session's end date with the current time.
#[utoipa::path(
    put,
    path = "/parties/{id}/end",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "End date updated", body = ActionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn end_party(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    party_service::end_party(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Mark the session abandoned.
#[utoipa::path(
    put,
    path = "/parties/{id}/abandon",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Session abandoned", body = ActionResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn abandon_party(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    party_service::abandon_party(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Read the session's current checkpoint index.
#[utoipa::path(
    get,
    path = "/parties/{id}/etat",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Current checkpoint index", body = EtatResponse),
        (status = 404, description = "Session not found")
    )
)]
pub async fn get_etat(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<EtatResponse>, AppError> {
    Ok(Json(party_service::get_etat(&state, id).await?))
}

/// Overwrite the session's checkpoint index.
#[utoipa::path(
    put,
    path = "/parties/{id}/etat",
    tag = "party",
    params(("id" = i32, Path, description = "Session identifier")),
    request_body = SetEtatRequest,
    responses(
        (status = 200, description = "Checkpoint index updated", body = ActionResponse),
        (status = 400, description = "Negative index"),
        (status = 404, description = "Session not found")
    )
)]
pub async fn set_etat(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<SetEtatRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    party_service::set_etat(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}
