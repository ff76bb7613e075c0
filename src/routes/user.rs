//! User account and citron counter routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post, put},
};
use validator::Validate;

use crate::{
    dao::users::CitronColor,
    dto::{
        common::ActionResponse,
        user::{ChangeEmailRequest, ChangePasswordRequest, CitronRequest, CreateUserRequest, UserSummary},
    },
    error::AppError,
    services::user_service,
    state::SharedState,
};

/// Configure the user routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route("/users/{id}", get(get_user).delete(delete_user))
        .route("/users/{id}/password", put(change_password))
        .route("/users/{id}/email", put(change_email))
        .route("/users/{id}/citrons/{color}/add", post(add_citrons))
        .route("/users/{id}/citrons/{color}/remove", post(remove_citrons))
}

/// List every user.
#[utoipa::path(
    get,
    path = "/users",
    tag = "user",
    responses((status = 200, description = "All users", body = [UserSummary]))
)]
pub async fn list_users(
    State(state): State<SharedState>,
) -> Result<Json<Vec<UserSummary>>, AppError> {
    Ok(Json(user_service::list_users(&state).await?))
}

/// Fetch one user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found", body = UserSummary),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<UserSummary>, AppError> {
    Ok(Json(user_service::get_user(&state, id).await?))
}

/// Register a user.
#[utoipa::path(
    post,
    path = "/users",
    tag = "user",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User registered", body = UserSummary),
        (status = 409, description = "Pseudo or email already taken")
    )
)]
pub async fn create_user(
    State(state): State<SharedState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<UserSummary>, AppError> {
    payload.validate()?;
    Ok(Json(user_service::create_user(&state, payload).await?))
}

/// Replace a user's password.
#[utoipa::path(
    put,
    path = "/users/{id}/password",
    tag = "user",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = ChangePasswordRequest,
    responses(
        (status = 200, description = "Password changed", body = ActionResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn change_password(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    user_service::change_password(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Replace a user's email.
#[utoipa::path(
    put,
    path = "/users/{id}/email",
    tag = "user",
    params(("id" = i32, Path, description = "User identifier")),
    request_body = ChangeEmailRequest,
    responses(
        (status = 200, description = "Email changed", body = ActionResponse),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already taken")
    )
)]
pub async fn change_email(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<ChangeEmailRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    user_service::change_email(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "user",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = ActionResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    user_service::delete_user(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Credit citrons of one color to a user.
#[utoipa::path(
    post,
    path = "/users/{id}/citrons/{color}/add",
    tag = "citron",
    params(
        ("id" = i32, Path, description = "User identifier"),
        ("color" = String, Path, description = "Citron color: bleu, jaune, rouge, or vert")
    ),
    request_body = CitronRequest,
    responses(
        (status = 200, description = "Citrons credited", body = ActionResponse),
        (status = 404, description = "User not found")
    )
)]
pub async fn add_citrons(
    State(state): State<SharedState>,
    Path((id, color)): Path<(i32, CitronColor)>,
    Json(payload): Json<CitronRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    Ok(Json(user_service::add_citrons(&state, id, color, payload).await?))
}

/// Debit citrons of one color from a user, never below zero.
#[utoipa::path(
    post,
    path = "/users/{id}/citrons/{color}/remove",
    tag = "citron",
    params(
        ("id" = i32, Path, description = "User identifier"),
        ("color" = String, Path, description = "Citron color: bleu, jaune, rouge, or vert")
    ),
    request_body = CitronRequest,
    responses(
        (status = 200, description = "Citrons debited", body = ActionResponse),
        (status = 404, description = "User not found"),
        (status = 409, description = "Balance too low")
    )
)]
pub async fn remove_citrons(
    State(state): State<SharedState>,
    Path((id, color)): Path<(i32, CitronColor)>,
    Json(payload): Json<CitronRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    Ok(Json(
        user_service::remove_citrons(&state, id, color, payload).await?,
    ))
}
