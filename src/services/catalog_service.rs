//! Catalog CRUD for cities, categories, venues, routes, and questions.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::{
    dao::{
        categories::CategoryRepository,
        lieux::{LieuInput, LieuRepository},
        parkours::{ParkourInput, ParkourRepository},
        questions::{QuestionInput, QuestionRepository},
        villes::VilleRepository,
    },
    dto::{
        category::{CategoryRequest, CategorySummary},
        lieu::{LieuCodeResponse, LieuNameResponse, LieuRequest, LieuSummary, UpdateCodeRequest},
        parkour::{ParkourDetail, ParkourRequest, ParkourSummary},
        question::{QuestionIdsResponse, QuestionRequest, QuestionSummary},
        ville::{VilleRequest, VilleSummary},
    },
    error::ServiceError,
    state::SharedState,
};

// --- villes ---

/// Fetch every city.
pub async fn list_villes(state: &SharedState) -> Result<Vec<VilleSummary>, ServiceError> {
    let repository = VilleRepository::new(state.require_db().await?);
    Ok(repository.list().await?.into_iter().map(Into::into).collect())
}

/// Fetch one city.
pub async fn get_ville(state: &SharedState, id: i32) -> Result<VilleSummary, ServiceError> {
    let repository = VilleRepository::new(state.require_db().await?);
    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!("ville `{id}` not found")));
    };
    Ok(model.into())
}

/// Create a city.
pub async fn create_ville(
    state: &SharedState,
    request: VilleRequest,
) -> Result<VilleSummary, ServiceError> {
    let repository = VilleRepository::new(state.require_db().await?);
    Ok(repository.insert(request.name).await?.into())
}

/// Rename a city.
pub async fn update_ville(
    state: &SharedState,
    id: i32,
    request: VilleRequest,
) -> Result<(), ServiceError> {
    let repository = VilleRepository::new(state.require_db().await?);
    if !repository.update(id, request.name).await? {
        return Err(ServiceError::NotFound(format!("ville `{id}` not found")));
    }
    Ok(())
}

/// Delete a city.
pub async fn delete_ville(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let repository = VilleRepository::new(state.require_db().await?);
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!("ville `{id}` not found")));
    }
    Ok(())
}

// --- categories ---

/// Fetch every category.
pub async fn list_categories(state: &SharedState) -> Result<Vec<CategorySummary>, ServiceError> {
    let repository = CategoryRepository::new(state.require_db().await?);
    Ok(repository.list().await?.into_iter().map(Into::into).collect())
}

/// Fetch one category.
pub async fn get_category(state: &SharedState, id: i32) -> Result<CategorySummary, ServiceError> {
    let repository = CategoryRepository::new(state.require_db().await?);
    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!("category `{id}` not found")));
    };
    Ok(model.into())
}

/// Create a category.
pub async fn create_category(
    state: &SharedState,
    request: CategoryRequest,
) -> Result<CategorySummary, ServiceError> {
    let repository = CategoryRepository::new(state.require_db().await?);
    Ok(repository.insert(request.name).await?.into())
}

/// Rename a category.
pub async fn update_category(
    state: &SharedState,
    id: i32,
    request: CategoryRequest,
) -> Result<(), ServiceError> {
    let repository = CategoryRepository::new(state.require_db().await?);
    if !repository.update(id, request.name).await? {
        return Err(ServiceError::NotFound(format!("category `{id}` not found")));
    }
    Ok(())
}

/// Delete a category.
pub async fn delete_category(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let repository = CategoryRepository::new(state.require_db().await?);
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!("category `{id}` not found")));
    }
    Ok(())
}

// --- lieux ---

/// Fetch every venue.
pub async fn list_lieux(state: &SharedState) -> Result<Vec<LieuSummary>, ServiceError> {
    let repository = LieuRepository::new(state.require_db().await?);
    Ok(repository.list().await?.into_iter().map(Into::into).collect())
}

/// Fetch one venue.
pub async fn get_lieu(state: &SharedState, id: i32) -> Result<LieuSummary, ServiceError> {
    let repository = LieuRepository::new(state.require_db().await?);
    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!("lieu `{id}` not found")));
    };
    Ok(model.into())
}

/// Fetch one venue's display name.
pub async fn get_lieu_name(state: &SharedState, id: i32) -> Result<LieuNameResponse, ServiceError> {
    let lieu = get_lieu(state, id).await?;
    Ok(LieuNameResponse { name: lieu.name })
}

/// Create a venue, verifying its city when one is referenced.
pub async fn create_lieu(
    state: &SharedState,
    request: LieuRequest,
) -> Result<LieuSummary, ServiceError> {
    let conn = state.require_db().await?;
    ensure_ville_exists(&conn, request.ville_id).await?;

    let repository = LieuRepository::new(conn);
    let model = repository
        .insert(LieuInput {
            name: request.name,
            gps: request.gps,
            info: request.info,
            code: request.code,
            ville_id: request.ville_id,
        })
        .await?;

    info!(lieu_id = model.id, "venue created");
    Ok(model.into())
}

/// Overwrite a venue's editable fields.
pub async fn update_lieu(
    state: &SharedState,
    id: i32,
    request: LieuRequest,
) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;
    ensure_ville_exists(&conn, request.ville_id).await?;

    let repository = LieuRepository::new(conn);
    let updated = repository
        .update(
            id,
            LieuInput {
                name: request.name,
                gps: request.gps,
                info: request.info,
                code: request.code,
                ville_id: request.ville_id,
            },
        )
        .await?;

    if !updated {
        return Err(ServiceError::NotFound(format!("lieu `{id}` not found")));
    }
    Ok(())
}

/// Read one venue's unlock code directly, outside any session.
pub async fn get_lieu_code(state: &SharedState, id: i32) -> Result<LieuCodeResponse, ServiceError> {
    let repository = LieuRepository::new(state.require_db().await?);
    let Some(code) = repository.code(id).await? else {
        return Err(ServiceError::NotFound(format!("lieu `{id}` not found")));
    };
    Ok(LieuCodeResponse { code })
}

/// Replace one venue's unlock code.
pub async fn update_lieu_code(
    state: &SharedState,
    id: i32,
    request: UpdateCodeRequest,
) -> Result<(), ServiceError> {
    let repository = LieuRepository::new(state.require_db().await?);
    if !repository.update_code(id, request.code).await? {
        return Err(ServiceError::NotFound(format!("lieu `{id}` not found")));
    }
    Ok(())
}

/// Toggle a venue's active flag without deleting it.
pub async fn set_lieu_active(
    state: &SharedState,
    id: i32,
    active: bool,
) -> Result<(), ServiceError> {
    let repository = LieuRepository::new(state.require_db().await?);
    if !repository.set_active(id, active).await? {
        return Err(ServiceError::NotFound(format!("lieu `{id}` not found")));
    }

    info!(lieu_id = id, active, "venue active flag updated");
    Ok(())
}

/// Delete a venue.
pub async fn delete_lieu(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let repository = LieuRepository::new(state.require_db().await?);
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!("lieu `{id}` not found")));
    }
    Ok(())
}

// --- parkours ---

/// Fetch every route.
pub async fn list_parkours(state: &SharedState) -> Result<Vec<ParkourSummary>, ServiceError> {
    let repository = ParkourRepository::new(state.require_db().await?);
    Ok(repository.list().await?.into_iter().map(Into::into).collect())
}

/// Fetch one route.
pub async fn get_parkour(state: &SharedState, id: i32) -> Result<ParkourSummary, ServiceError> {
    let repository = ParkourRepository::new(state.require_db().await?);
    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!("parkour `{id}` not found")));
    };
    Ok(model.into())
}

/// Fetch one route with its checkpoint venues resolved.
pub async fn get_parkour_detail(
    state: &SharedState,
    id: i32,
) -> Result<ParkourDetail, ServiceError> {
    let repository = ParkourRepository::new(state.require_db().await?);
    let Some(detail) = repository.find_with_lieux(id).await? else {
        return Err(ServiceError::NotFound(format!("parkour `{id}` not found")));
    };
    Ok(detail.into())
}

/// Create a route after validating its checkpoint and category references.
pub async fn create_parkour(
    state: &SharedState,
    request: ParkourRequest,
) -> Result<ParkourSummary, ServiceError> {
    let conn = state.require_db().await?;
    validate_parkour_refs(&conn, &request).await?;

    let repository = ParkourRepository::new(conn);
    let model = repository
        .insert(ParkourInput {
            lieu_ids: request.lieu_ids(),
            name: request.name,
            category_id: request.category_id,
        })
        .await?;

    info!(parkour_id = model.id, "route created");
    Ok(model.into())
}

/// Overwrite a route after validating its checkpoint and category references.
pub async fn update_parkour(
    state: &SharedState,
    id: i32,
    request: ParkourRequest,
) -> Result<(), ServiceError> {
    let conn = state.require_db().await?;
    validate_parkour_refs(&conn, &request).await?;

    let repository = ParkourRepository::new(conn);
    let updated = repository
        .update(
            id,
            ParkourInput {
                lieu_ids: request.lieu_ids(),
                name: request.name,
                category_id: request.category_id,
            },
        )
        .await?;

    if !updated {
        return Err(ServiceError::NotFound(format!("parkour `{id}` not found")));
    }
    Ok(())
}

/// Delete a route; dependent sessions go with it.
pub async fn delete_parkour(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let repository = ParkourRepository::new(state.require_db().await?);
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!("parkour `{id}` not found")));
    }

    info!(parkour_id = id, "route deleted");
    Ok(())
}

// --- questions ---

/// Fetch every question.
pub async fn list_questions(state: &SharedState) -> Result<Vec<QuestionSummary>, ServiceError> {
    let repository = QuestionRepository::new(state.require_db().await?);
    Ok(repository.list().await?.into_iter().map(Into::into).collect())
}

/// Fetch every question id.
pub async fn list_question_ids(state: &SharedState) -> Result<QuestionIdsResponse, ServiceError> {
    let repository = QuestionRepository::new(state.require_db().await?);
    Ok(QuestionIdsResponse {
        ids: repository.ids().await?,
    })
}

/// Fetch one question.
pub async fn get_question(state: &SharedState, id: i32) -> Result<QuestionSummary, ServiceError> {
    let repository = QuestionRepository::new(state.require_db().await?);
    let Some(model) = repository.find(id).await? else {
        return Err(ServiceError::NotFound(format!("question `{id}` not found")));
    };
    Ok(model.into())
}

/// Create a question.
pub async fn create_question(
    state: &SharedState,
    request: QuestionRequest,
) -> Result<QuestionSummary, ServiceError> {
    let repository = QuestionRepository::new(state.require_db().await?);
    let model = repository
        .insert(QuestionInput {
            text: request.text,
            answers: [
                request.answer1,
                request.answer2,
                request.answer3,
                request.answer4,
            ],
            correct_answer: request.correct_answer,
        })
        .await?;
    Ok(model.into())
}

/// Overwrite a question's fields.
pub async fn update_question(
    state: &SharedState,
    id: i32,
    request: QuestionRequest,
) -> Result<(), ServiceError> {
    let repository = QuestionRepository::new(state.require_db().await?);
    let updated = repository
        .update(
            id,
            QuestionInput {
                text: request.text,
                answers: [
                    request.answer1,
                    request.answer2,
                    request.answer3,
                    request.answer4,
                ],
                correct_answer: request.correct_answer,
            },
        )
        .await?;

    if !updated {
        return Err(ServiceError::NotFound(format!("question `{id}` not found")));
    }
    Ok(())
}

/// Delete a question; its session associations go with it.
pub async fn delete_question(state: &SharedState, id: i32) -> Result<(), ServiceError> {
    let repository = QuestionRepository::new(state.require_db().await?);
    if !repository.delete(id).await? {
        return Err(ServiceError::NotFound(format!("question `{id}` not found")));
    }
    Ok(())
}

// --- shared reference checks ---

async fn ensure_ville_exists(
    conn: &DatabaseConnection,
    ville_id: Option<i32>,
) -> Result<(), ServiceError> {
    let Some(id) = ville_id else {
        return Ok(());
    };

    if VilleRepository::new(conn.clone()).find(id).await?.is_none() {
        return Err(ServiceError::NotFound(format!("ville `{id}` not found")));
    }
    Ok(())
}

/// The four slots of one route must name distinct, existing venues; the
/// category, when given, must exist as well.
async fn validate_parkour_refs(
    conn: &DatabaseConnection,
    request: &ParkourRequest,
) -> Result<(), ServiceError> {
    let mut seen = HashSet::new();
    for lieu_id in request.lieu_ids().into_iter().flatten() {
        if !seen.insert(lieu_id) {
            return Err(ServiceError::InvalidInput(format!(
                "lieu `{lieu_id}` appears in more than one checkpoint slot"
            )));
        }
    }

    let lieux = LieuRepository::new(conn.clone());
    for lieu_id in seen {
        if lieux.find(lieu_id).await?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "lieu `{lieu_id}` not found"
            )));
        }
    }

    if let Some(category_id) = request.category_id {
        if CategoryRepository::new(conn.clone())
            .find(category_id)
            .await?
            .is_none()
        {
            return Err(ServiceError::NotFound(format!(
                "category `{category_id}` not found"
            )));
        }
    }

    Ok(())
}
