//! Login route.

use axum::{Json, Router, extract::State, routing::post};
use validator::Validate;

use crate::{
    dto::auth::{LoginRequest, LoginResponse},
    error::AppError,
    services::auth_service,
    state::SharedState,
};

/// Configure the login routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new().route("/login", post(login))
}

/// Verify credentials and issue a signed token.
#[utoipa::path(
    post,
    path = "/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Unknown user or wrong password")
    )
)]
pub async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    payload.validate()?;
    Ok(Json(auth_service::login(&state, payload).await?))
}
