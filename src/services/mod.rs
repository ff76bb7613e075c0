//! Service layer: request orchestration between the HTTP surface and the repositories.

/// Login and token issuance.
pub mod auth_service;
/// Catalog CRUD for cities, categories, venues, routes, and questions.
pub mod catalog_service;
/// OpenAPI documentation generation.
pub mod documentation;
/// Health check service.
pub mod health_service;
/// Core session progression logic.
pub mod party_service;
/// Session/question association management.
pub mod party_question_service;
/// Reward catalog and redemption.
pub mod recompense_service;
/// User accounts and citron counters.
pub mod user_service;
