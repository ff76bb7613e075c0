//! Reward catalog and redemption routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use validator::Validate;

use crate::{
    dto::{
        common::ActionResponse,
        recompense::{RecompenseRequest, RecompenseSummary, RedeemRequest, VoucherSummary},
    },
    error::AppError,
    services::recompense_service,
    state::SharedState,
};

/// Configure the reward routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/recompenses", get(list_recompenses).post(create_recompense))
        .route(
            "/recompenses/{id}",
            get(get_recompense)
                .put(update_recompense)
                .delete(delete_recompense),
        )
        .route("/recompenses/{id}/redeem", post(redeem_recompense))
        .route("/users/{id}/recompenses", get(list_user_vouchers))
}

/// List every reward.
#[utoipa::path(
    get,
    path = "/recompenses",
    tag = "recompense",
    responses((status = 200, description = "All rewards", body = [RecompenseSummary]))
)]
pub async fn list_recompenses(
    State(state): State<SharedState>,
) -> Result<Json<Vec<RecompenseSummary>>, AppError> {
    Ok(Json(recompense_service::list_recompenses(&state).await?))
}

/// Fetch one reward.
#[utoipa::path(
    get,
    path = "/recompenses/{id}",
    tag = "recompense",
    params(("id" = i32, Path, description = "Reward identifier")),
    responses(
        (status = 200, description = "Reward found", body = RecompenseSummary),
        (status = 404, description = "Reward not found")
    )
)]
pub async fn get_recompense(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<RecompenseSummary>, AppError> {
    Ok(Json(recompense_service::get_recompense(&state, id).await?))
}

/// Create a reward.
#[utoipa::path(
    post,
    path = "/recompenses",
    tag = "recompense",
    request_body = RecompenseRequest,
    responses(
        (status = 200, description = "Reward created", body = RecompenseSummary),
        (status = 404, description = "Venue or category not found")
    )
)]
pub async fn create_recompense(
    State(state): State<SharedState>,
    Json(payload): Json<RecompenseRequest>,
) -> Result<Json<RecompenseSummary>, AppError> {
    payload.validate()?;
    Ok(Json(
        recompense_service::create_recompense(&state, payload).await?,
    ))
}

/// Overwrite a reward's fields.
#[utoipa::path(
    put,
    path = "/recompenses/{id}",
    tag = "recompense",
    params(("id" = i32, Path, description = "Reward identifier")),
    request_body = RecompenseRequest,
    responses(
        (status = 200, description = "Reward updated", body = ActionResponse),
        (status = 404, description = "Reward not found")
    )
)]
pub async fn update_recompense(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<RecompenseRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    recompense_service::update_recompense(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a reward.
#[utoipa::path(
    delete,
    path = "/recompenses/{id}",
    tag = "recompense",
    params(("id" = i32, Path, description = "Reward identifier")),
    responses(
        (status = 200, description = "Reward deleted", body = ActionResponse),
        (status = 404, description = "Reward not found")
    )
)]
pub async fn delete_recompense(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    recompense_service::delete_recompense(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Redeem a reward for a user, debiting their citron counters.
#[utoipa::path(
    post,
    path = "/recompenses/{id}/redeem",
    tag = "recompense",
    params(("id" = i32, Path, description = "Reward identifier")),
    request_body = RedeemRequest,
    responses(
        (status = 200, description = "Voucher issued", body = VoucherSummary),
        (status = 404, description = "Reward or user not found"),
        (status = 409, description = "Citron balance too low")
    )
)]
pub async fn redeem_recompense(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<RedeemRequest>,
) -> Result<Json<VoucherSummary>, AppError> {
    payload.validate()?;
    Ok(Json(
        recompense_service::redeem_recompense(&state, id, payload).await?,
    ))
}

/// List the vouchers one user has claimed.
#[utoipa::path(
    get,
    path = "/users/{id}/recompenses",
    tag = "recompense",
    params(("id" = i32, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Claimed vouchers", body = [VoucherSummary]),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_user_vouchers(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<VoucherSummary>>, AppError> {
    Ok(Json(
        recompense_service::list_user_vouchers(&state, id).await?,
    ))
}
