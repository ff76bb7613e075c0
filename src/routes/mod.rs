//! HTTP route trees, one module per resource.

use axum::Router;

use crate::state::SharedState;

pub mod auth;
pub mod category;
pub mod docs;
pub mod health;
pub mod lieu;
pub mod parkour;
pub mod party;
pub mod party_question;
pub mod question;
pub mod recompense;
pub mod user;
pub mod ville;

/// Compose all route trees, wiring in shared state and documentation routes.
pub fn router(state: SharedState) -> Router<()> {
    let api_router = health::router()
        .merge(auth::router())
        .merge(party::router())
        .merge(party_question::router())
        .merge(ville::router())
        .merge(category::router())
        .merge(lieu::router())
        .merge(parkour::router())
        .merge(question::router())
        .merge(user::router())
        .merge(recompense::router());

    let docs_router = docs::router(state.clone());

    api_router.merge(docs_router).with_state(state)
}
