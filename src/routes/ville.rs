//! City catalog routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::{
        common::ActionResponse,
        ville::{VilleRequest, VilleSummary},
    },
    error::AppError,
    services::catalog_service,
    state::SharedState,
};

/// Configure the city routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/villes", get(list_villes).post(create_ville))
        .route(
            "/villes/{id}",
            get(get_ville).put(update_ville).delete(delete_ville),
        )
}

/// List every city.
#[utoipa::path(
    get,
    path = "/villes",
    tag = "ville",
    responses((status = 200, description = "All cities", body = [VilleSummary]))
)]
pub async fn list_villes(
    State(state): State<SharedState>,
) -> Result<Json<Vec<VilleSummary>>, AppError> {
    Ok(Json(catalog_service::list_villes(&state).await?))
}

/// Fetch one city.
#[utoipa::path(
    get,
    path = "/villes/{id}",
    tag = "ville",
    params(("id" = i32, Path, description = "City identifier")),
    responses(
        (status = 200, description = "City found", body = VilleSummary),
        (status = 404, description = "City not found")
    )
)]
pub async fn get_ville(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<VilleSummary>, AppError> {
    Ok(Json(catalog_service::get_ville(&state, id).await?))
}

/// Create a city.
#[utoipa::path(
    post,
    path = "/villes",
    tag = "ville",
    request_body = VilleRequest,
    responses((status = 200, description = "City created", body = VilleSummary))
)]
pub async fn create_ville(
    State(state): State<SharedState>,
    Json(payload): Json<VilleRequest>,
) -> Result<Json<VilleSummary>, AppError> {
    payload.validate()?;
    Ok(Json(catalog_service::create_ville(&state, payload).await?))
}

/// Rename a city.
#[utoipa::path(
    put,
    path = "/villes/{id}",
    tag = "ville",
    params(("id" = i32, Path, description = "City identifier")),
    request_body = VilleRequest,
    responses(
        (status = 200, description = "City renamed", body = ActionResponse),
        (status = 404, description = "City not found")
    )
)]
pub async fn update_ville(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<VilleRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    catalog_service::update_ville(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a city.
#[utoipa::path(
    delete,
    path = "/villes/{id}",
    tag = "ville",
    params(("id" = i32, Path, description = "City identifier")),
    responses(
        (status = 200, description = "City deleted", body = ActionResponse),
        (status = 404, description = "City not found")
    )
)]
pub async fn delete_ville(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::delete_ville(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}
