//! Venue catalog routes, including the soft-disable toggles.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, put},
};
use validator::Validate;

use crate::{
    dto::{
        common::ActionResponse,
        lieu::{LieuCodeResponse, LieuNameResponse, LieuRequest, LieuSummary, UpdateCodeRequest},
    },
    error::AppError,
    services::catalog_service,
    state::SharedState,
};

/// Configure the venue routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/lieux", get(list_lieux).post(create_lieu))
        .route(
            "/lieux/{id}",
            get(get_lieu).put(update_lieu).delete(delete_lieu),
        )
        .route("/lieux/{id}/name", get(get_lieu_name))
        .route("/lieux/{id}/code", get(get_lieu_code).put(update_lieu_code))
        .route("/lieux/{id}/activate", put(activate_lieu))
        .route("/lieux/{id}/deactivate", put(deactivate_lieu))
}

/// List every venue.
#[utoipa::path(
    get,
    path = "/lieux",
    tag = "lieu",
    responses((status = 200, description = "All venues", body = [LieuSummary]))
)]
pub async fn list_lieux(
    State(state): State<SharedState>,
) -> Result<Json<Vec<LieuSummary>>, AppError> {
    Ok(Json(catalog_service::list_lieux(&state).await?))
}

/// Fetch one venue.
#[utoipa::path(
    get,
    path = "/lieux/{id}",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    responses(
        (status = 200, description = "Venue found", body = LieuSummary),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn get_lieu(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<LieuSummary>, AppError> {
    Ok(Json(catalog_service::get_lieu(&state, id).await?))
}

/// Fetch one venue's display name.
#[utoipa::path(
    get,
    path = "/lieux/{id}/name",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    responses(
        (status = 200, description = "Venue name", body = LieuNameResponse),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn get_lieu_name(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<LieuNameResponse>, AppError> {
    Ok(Json(catalog_service::get_lieu_name(&state, id).await?))
}

/// Create a venue.
#[utoipa::path(
    post,
    path = "/lieux",
    tag = "lieu",
    request_body = LieuRequest,
    responses(
        (status = 200, description = "Venue created", body = LieuSummary),
        (status = 404, description = "City not found")
    )
)]
pub async fn create_lieu(
    State(state): State<SharedState>,
    Json(payload): Json<LieuRequest>,
) -> Result<Json<LieuSummary>, AppError> {
    payload.validate()?;
    Ok(Json(catalog_service::create_lieu(&state, payload).await?))
}

/// Overwrite a venue's editable fields.
#[utoipa::path(
    put,
    path = "/lieux/{id}",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    request_body = LieuRequest,
    responses(
        (status = 200, description = "Venue updated", body = ActionResponse),
        (status = 404, description = "Venue or city not found")
    )
)]
pub async fn update_lieu(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<LieuRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    catalog_service::update_lieu(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Read one venue's unlock code.
#[utoipa::path(
    get,
    path = "/lieux/{id}/code",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    responses(
        (status = 200, description = "Unlock code", body = LieuCodeResponse),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn get_lieu_code(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<LieuCodeResponse>, AppError> {
    Ok(Json(catalog_service::get_lieu_code(&state, id).await?))
}

/// Replace one venue's unlock code.
#[utoipa::path(
    put,
    path = "/lieux/{id}/code",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    request_body = UpdateCodeRequest,
    responses(
        (status = 200, description = "Unlock code updated", body = ActionResponse),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn update_lieu_code(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCodeRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    catalog_service::update_lieu_code(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Re-enable a venue.
#[utoipa::path(
    put,
    path = "/lieux/{id}/activate",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    responses(
        (status = 200, description = "Venue activated", body = ActionResponse),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn activate_lieu(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::set_lieu_active(&state, id, true).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Soft-disable a venue without deleting it.
#[utoipa::path(
    put,
    path = "/lieux/{id}/deactivate",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    responses(
        (status = 200, description = "Venue deactivated", body = ActionResponse),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn deactivate_lieu(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::set_lieu_active(&state, id, false).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a venue.
#[utoipa::path(
    delete,
    path = "/lieux/{id}",
    tag = "lieu",
    params(("id" = i32, Path, description = "Venue identifier")),
    responses(
        (status = 200, description = "Venue deleted", body = ActionResponse),
        (status = 404, description = "Venue not found")
    )
)]
pub async fn delete_lieu(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::delete_lieu(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}
