//! Route catalog routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::{
        common::ActionResponse,
        parkour::{ParkourDetail, ParkourRequest, ParkourSummary},
    },
    error::AppError,
    services::catalog_service,
    state::SharedState,
};

/// Configure the route catalog subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/parkours", get(list_parkours).post(create_parkour))
        .route(
            "/parkours/{id}",
            get(get_parkour).put(update_parkour).delete(delete_parkour),
        )
        .route("/parkours/{id}/lieux", get(get_parkour_detail))
}

/// List every route.
#[utoipa::path(
    get,
    path = "/parkours",
    tag = "parkour",
    responses((status = 200, description = "All routes", body = [ParkourSummary]))
)]
pub async fn list_parkours(
    State(state): State<SharedState>,
) -> Result<Json<Vec<ParkourSummary>>, AppError> {
    Ok(Json(catalog_service::list_parkours(&state).await?))
}

/// Fetch one route.
#[utoipa::path(
    get,
    path = "/parkours/{id}",
    tag = "parkour",
    params(("id" = i32, Path, description = "Route identifier")),
    responses(
        (status = 200, description = "Route found", body = ParkourSummary),
        (status = 404, description = "Route not found")
    )
)]
pub async fn get_parkour(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ParkourSummary>, AppError> {
    Ok(Json(catalog_service::get_parkour(&state, id).await?))
}

/// Fetch one route with its checkpoint venues resolved.
#[utoipa::path(
    get,
    path = "/parkours/{id}/lieux",
    tag = "parkour",
    params(("id" = i32, Path, description = "Route identifier")),
    responses(
        (status = 200, description = "Route with venues", body = ParkourDetail),
        (status = 404, description = "Route not found")
    )
)]
pub async fn get_parkour_detail(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ParkourDetail>, AppError> {
    Ok(Json(catalog_service::get_parkour_detail(&state, id).await?))
}

/// Create a route.
#[utoipa::path(
    post,
    path = "/parkours",
    tag = "parkour",
    request_body = ParkourRequest,
    responses(
        (status = 200, description = "Route created", body = ParkourSummary),
        (status = 400, description = "Duplicate checkpoint slots"),
        (status = 404, description = "Venue or category not found")
    )
)]
pub async fn create_parkour(
    State(state): State<SharedState>,
    Json(payload): Json<ParkourRequest>,
) -> Result<Json<ParkourSummary>, AppError> {
    payload.validate()?;
    Ok(Json(catalog_service::create_parkour(&state, payload).await?))
}

/// Overwrite a route's fields.
#[utoipa::path(
    put,
    path = "/parkours/{id}",
    tag = "parkour",
    params(("id" = i32, Path, description = "Route identifier")),
    request_body = ParkourRequest,
    responses(
        (status = 200, description = "Route updated", body = ActionResponse),
        (status = 400, description = "Duplicate checkpoint slots"),
        (status = 404, description = "Route, venue, or category not found")
    )
)]
pub async fn update_parkour(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<ParkourRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    catalog_service::update_parkour(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a route; dependent sessions go with it.
#[utoipa::path(
    delete,
    path = "/parkours/{id}",
    tag = "parkour",
    params(("id" = i32, Path, description = "Route identifier")),
    responses(
        (status = 200, description = "Route deleted", body = ActionResponse),
        (status = 404, description = "Route not found")
    )
)]
pub async fn delete_parkour(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::delete_parkour(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}
