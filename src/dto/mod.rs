//! Request/response payloads exchanged over the HTTP surface.

use chrono::{DateTime, SecondsFormat, Utc};

/// Login payloads.
pub mod auth;
/// Category payloads.
pub mod category;
/// Payloads shared across resources.
pub mod common;
/// Health payloads.
pub mod health;
/// Venue payloads.
pub mod lieu;
/// Route payloads.
pub mod parkour;
/// Session payloads.
pub mod party;
/// Session/question association payloads.
pub mod party_question;
/// Question payloads.
pub mod question;
/// Reward payloads.
pub mod recompense;
/// User payloads.
pub mod user;
/// Validation helpers for DTOs.
pub mod validation;
/// City payloads.
pub mod ville;

fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Secs, true)
}
