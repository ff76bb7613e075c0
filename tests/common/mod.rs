//! Shared fixtures for the integration suites: an in-memory SQLite database
//! with the real migrations applied, plus seed helpers going through the
//! public services.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use lemonmaze_back::config::AppConfig;
use lemonmaze_back::dao::migration::Migrator;
use lemonmaze_back::dto::{
    lieu::LieuRequest, parkour::ParkourRequest, question::QuestionRequest, user::CreateUserRequest,
    ville::VilleRequest,
};
use lemonmaze_back::services::catalog_service;
use lemonmaze_back::services::user_service;
use lemonmaze_back::state::{AppState, SharedState};
use sea_orm::{ConnectOptions, Database};
use sea_orm_migration::MigratorTrait;

/// Build an application state backed by a fresh in-memory database.
pub async fn setup_state() -> SharedState {
    // A single pooled connection keeps every handle on the same in-memory
    // database.
    let mut options = ConnectOptions::new("sqlite::memory:".to_owned());
    options.max_connections(1).sqlx_logging(false);

    let conn = Database::connect(options)
        .await
        .expect("open in-memory sqlite");
    Migrator::up(&conn, None).await.expect("apply migrations");

    let state = AppState::new(AppConfig::default());
    state.install_db(conn).await;
    state
}

/// Register a user and return its id.
pub async fn seed_user(state: &SharedState, pseudo: &str) -> i32 {
    user_service::create_user(
        state,
        CreateUserRequest {
            pseudo: pseudo.to_owned(),
            email: format!("{pseudo}@example.com"),
            password: "hunter2".to_owned(),
            age: 27,
            city: "Rennes".to_owned(),
        },
    )
    .await
    .expect("seed user")
    .id
}

/// Create a venue with the given unlock code and return its id.
pub async fn seed_lieu(state: &SharedState, name: &str, code: i32) -> i32 {
    catalog_service::create_lieu(
        state,
        LieuRequest {
            name: name.to_owned(),
            gps: format!("https://maps.example.com/{name}"),
            info: "Un lieu du parcours.".to_owned(),
            code,
            ville_id: None,
        },
    )
    .await
    .expect("seed lieu")
    .id
}

/// Create a city and return its id.
pub async fn seed_ville(state: &SharedState, name: &str) -> i32 {
    catalog_service::create_ville(
        state,
        VilleRequest {
            name: name.to_owned(),
        },
    )
    .await
    .expect("seed ville")
    .id
}

/// Create a four-checkpoint route over the given venues and return its id.
pub async fn seed_parkour(state: &SharedState, name: &str, lieux: [i32; 4]) -> i32 {
    catalog_service::create_parkour(
        state,
        ParkourRequest {
            name: name.to_owned(),
            lieu1_id: Some(lieux[0]),
            lieu2_id: Some(lieux[1]),
            lieu3_id: Some(lieux[2]),
            lieu4_id: Some(lieux[3]),
            category_id: None,
        },
    )
    .await
    .expect("seed parkour")
    .id
}

/// Create `count` questions and return their ids.
pub async fn seed_questions(state: &SharedState, count: usize) -> Vec<i32> {
    let mut ids = Vec::with_capacity(count);
    for index in 0..count {
        let summary = catalog_service::create_question(
            state,
            QuestionRequest {
                text: format!("Question {index}?"),
                answer1: "A".to_owned(),
                answer2: "B".to_owned(),
                answer3: "C".to_owned(),
                answer4: "D".to_owned(),
                correct_answer: 2,
            },
        )
        .await
        .expect("seed question");
        ids.push(summary.id);
    }
    ids
}

/// Seed a full playable board: four venues, one route, one user, and a
/// question pool. Returns (parkour_id, user_id, question_ids).
pub async fn seed_board(state: &SharedState, pool_size: usize) -> (i32, i32, Vec<i32>) {
    let lieux = [
        seed_lieu(state, "Little Delirium", 4925).await,
        seed_lieu(state, "Le Comptoir", 2573).await,
        seed_lieu(state, "WarpZone", 4428).await,
        seed_lieu(state, "Penny Lane", 1430).await,
    ];
    let parkour_id = seed_parkour(state, "Parcours Bar 1", lieux).await;
    let user_id = seed_user(state, "kim").await;
    let question_ids = seed_questions(state, pool_size).await;
    (parkour_id, user_id, question_ids)
}
