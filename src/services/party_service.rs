//! Core session progression logic: creation, advancement, code resolution,
//! and termination.

use tracing::info;

use crate::{
    dao::{
        parkours::ParkourRepository,
        party::{CreatePartyError, PartyRepository},
        users::UserRepository,
    },
    dto::party::{
        AdvanceResponse, CreatePartyRequest, CurrentCodeResponse, EtatResponse, PartyCreated,
        PartySummary, SetEtatRequest, UpdatePartyRequest,
    },
    error::ServiceError,
    state::SharedState,
};

/// Start a session for a user on a route and assign its random question set.
pub async fn create_party(
    state: &SharedState,
    request: CreatePartyRequest,
) -> Result<PartyCreated, ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    let created = repository
        .create(request.parkour_id, request.user_id)
        .await
        .map_err(map_create_error)?;

    info!(
        party_id = created.id,
        parkour_id = request.parkour_id,
        user_id = request.user_id,
        "session created"
    );

    Ok(PartyCreated {
        party_id: created.id,
        question_ids: created.question_ids,
    })
}

fn map_create_error(err: CreatePartyError) -> ServiceError {
    match err {
        CreatePartyError::ParkourNotFound(id) => {
            ServiceError::NotFound(format!("parkour `{id}` not found"))
        }
        CreatePartyError::UserNotFound(id) => {
            ServiceError::NotFound(format!("user `{id}` not found"))
        }
        CreatePartyError::InsufficientQuestions { available, needed } => {
            ServiceError::InsufficientData(format!(
                "question pool holds {available} questions, {needed} required"
            ))
        }
        CreatePartyError::Storage(source) => source.into(),
    }
}

/// Advance a session one checkpoint and report whether it is now finished.
pub async fn advance_party(state: &SharedState, id: i32) -> Result<AdvanceResponse, ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    let Some(etat) = repository.advance(id).await? else {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    };

    Ok(AdvanceResponse::new(etat))
}

/// Resolve the unlock code of the session's current checkpoint.
pub async fn current_code(
    state: &SharedState,
    id: i32,
) -> Result<CurrentCodeResponse, ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    let Some(current) = repository.current_code(id).await? else {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    };

    Ok(CurrentCodeResponse {
        etat: current.etat,
        code: current.code,
    })
}

/// Stamp the session's end date. Idempotent.
pub async fn end_party(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    if !repository.end(id).await? {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    }

    info!(party_id = id, "session ended");
    Ok(())
}

/// Mark the session abandoned and stamp its end date.
pub async fn abandon_party(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    if !repository.abandon(id).await? {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    }

    info!(party_id = id, "session abandoned");
    Ok(())
}

/// Read the session's current checkpoint index.
pub async fn get_etat(state: &SharedState, id: i32) -> Result<EtatResponse, ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    let Some(etat) = repository.etat(id).await? else {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    };

    Ok(EtatResponse { etat })
}

/// Overwrite the session's checkpoint index with a client-provided value.
pub async fn set_etat(
    state: &SharedState,
    id: i32,
    request: SetEtatRequest,
) -> Result<(), ServiceError> {
    if request.etat < 0 {
        return Err(ServiceError::InvalidInput(format!(
            "etat must not be negative (got {})",
            request.etat
        )));
    }

    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    if !repository.set_etat(id, request.etat).await? {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    }

    Ok(())
}

/// Fetch one session.
pub async fn get_party(state: &SharedState, id: i32) -> Result<PartySummary, ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    };

    Ok(model.into())
}

/// Fetch every session.
pub async fn list_parties(state: &SharedState) -> Result<Vec<PartySummary>, ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    let parties = repository.list().await?;
    Ok(parties.into_iter().map(Into::into).collect())
}

/// Re-point a session at another route and user, verifying both exist.
pub async fn update_party(
    state: &SharedState,
    id: i32,
    request: UpdatePartyRequest,
) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;

    if ParkourRepository::new(conn.clone())
        .find(request.parkour_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::NotFound(format!(
            "parkour `{}` not found",
            request.parkour_id
        )));
    }

    if UserRepository::new(conn.clone())
        .find(request.user_id)
        .await?
        .is_none()
    {
        return Err(ServiceError::NotFound(format!(
            "user `{}` not found",
            request.user_id
        )));
    }

    let repository = PartyRepository::new(conn);
    if !repository
        .update_refs(id, request.parkour_id, request.user_id)
        .await?
    {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    }

    Ok(())
}

/// Delete a session and its question associations.
pub async fn delete_party(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;
    let repository = PartyRepository::new(conn);

    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!("party `{id}` not found")));
    }

    info!(party_id = id, "session deleted");
    Ok(())
}
