//! Category catalog routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use validator::Validate;

use crate::{
    dto::{
        category::{CategoryRequest, CategorySummary},
        common::ActionResponse,
    },
    error::AppError,
    services::catalog_service,
    state::SharedState,
};

/// Configure the category routes subtree.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/{id}",
            get(get_category).put(update_category).delete(delete_category),
        )
}

/// List every category.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "category",
    responses((status = 200, description = "All categories", body = [CategorySummary]))
)]
pub async fn list_categories(
    State(state): State<SharedState>,
) -> Result<Json<Vec<CategorySummary>>, AppError> {
    Ok(Json(catalog_service::list_categories(&state).await?))
}

/// Fetch one category.
#[utoipa::path(
    get,
    path = "/categories/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category found", body = CategorySummary),
        (status = 404, description = "Category not found")
    )
)]
pub async fn get_category(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<CategorySummary>, AppError> {
    Ok(Json(catalog_service::get_category(&state, id).await?))
}

/// Create a category.
#[utoipa::path(
    post,
    path = "/categories",
    tag = "category",
    request_body = CategoryRequest,
    responses((status = 200, description = "Category created", body = CategorySummary))
)]
pub async fn create_category(
    State(state): State<SharedState>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategorySummary>, AppError> {
    payload.validate()?;
    Ok(Json(catalog_service::create_category(&state, payload).await?))
}

/// Rename a category.
#[utoipa::path(
    put,
    path = "/categories/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category identifier")),
    request_body = CategoryRequest,
    responses(
        (status = 200, description = "Category renamed", body = ActionResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn update_category(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<ActionResponse>, AppError> {
    payload.validate()?;
    catalog_service::update_category(&state, id, payload).await?;
    Ok(Json(ActionResponse::ok()))
}

/// Delete a category.
#[utoipa::path(
    delete,
    path = "/categories/{id}",
    tag = "category",
    params(("id" = i32, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category deleted", body = ActionResponse),
        (status = 404, description = "Category not found")
    )
)]
pub async fn delete_category(
    State(state): State<SharedState>,
    Path(id): Path<i32>,
) -> Result<Json<ActionResponse>, AppError> {
    catalog_service::delete_category(&state, id).await?;
    Ok(Json(ActionResponse::ok()))
}
