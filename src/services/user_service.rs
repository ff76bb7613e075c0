//! User accounts and citron counters.

use tracing::info;

use crate::{
    dao::users::{CitronColor, CitronDebit, UserInput, UserRepository},
    dto::{
        common::ActionResponse,
        user::{ChangeEmailRequest, ChangePasswordRequest, CitronRequest, CreateUserRequest, UserSummary},
    },
    error::ServiceError,
    state::SharedState,
};

/// Fetch every user.
pub async fn list_users(state: &SharedState) -> Result<Vec<UserSummary>, ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    Ok(repository.list().await?.into_iter().map(Into::into).collect())
}

/// Fetch one user.
pub async fn get_user(state: &SharedState, id: i32) -> Result<UserSummary, ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!("user `{id}` not found")));
    };
    Ok(model.into())
}

/// Register a user. A taken pseudo or email surfaces as a conflict.
pub async fn create_user(
    state: &SharedState,
    request: CreateUserRequest,
) -> Result<UserSummary, ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    let model = repository
        .insert(UserInput {
            pseudo: request.pseudo,
            email: request.email,
            password: request.password,
            age: request.age,
            city: request.city,
        })
        .await?;

    info!(user_id = model.id, "user registered");
    Ok(model.into())
}

/// Replace a user's password.
pub async fn change_password(
    state: &SharedState,
    id: i32,
    request: ChangePasswordRequest,
) -> Result<(), ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    if !repository.change_password(id, request.password).await? {
        return Err(ServiceError::NotFound(format!("user `{id}` not found")));
    }
    Ok(())
}

/// Replace a user's email. A taken email surfaces as a conflict.
pub async fn change_email(
    state: &SharedState,
    id: i32,
    request: ChangeEmailRequest,
) -> Result<(), ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    if !repository.change_email(id, request.email).await? {
        return Err(ServiceError::NotFound(format!("user `{id}` not found")));
    }
    Ok(())
}

/// Delete a user; dependent sessions and vouchers go with it.
pub async fn delete_user(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!("user `{id}` not found")));
    }

    info!(user_id = id, "user deleted");
    Ok(())
}

/// Credit citrons of one color.
pub async fn add_citrons(
    state: &SharedState,
    id: i32,
    color: CitronColor,
    request: CitronRequest,
) -> Result<ActionResponse, ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    if !repository.add_citrons(id, color, request.amount).await? {
        return Err(ServiceError::NotFound(format!("user `{id}` not found")));
    }

    info!(user_id = id, %color, amount = request.amount, "citrons credited");
    Ok(ActionResponse::ok())
}

/// Debit citrons of one color; a balance shortfall is a conflict, not a
/// negative counter.
pub async fn remove_citrons(
    state: &SharedState,
    id: i32,
    color: CitronColor,
    request: CitronRequest,
) -> Result<ActionResponse, ServiceError> {
    let repository = UserRepository::new(state.require_db().await?);
    match repository.remove_citrons(id, color, request.amount).await? {
        None => Err(ServiceError::NotFound(format!("user `{id}` not found"))),
        Some(CitronDebit::Insufficient) => Err(ServiceError::Conflict(format!(
            "not enough {color} citrons to remove {}",
            request.amount
        ))),
        Some(CitronDebit::Applied) => {
            info!(user_id = id, %color, amount = request.amount, "citrons debited");
            Ok(ActionResponse::ok())
        }
    }
}
