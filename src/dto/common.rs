//! Payloads shared across resources.

use serde::Serialize;
use utoipa::ToSchema;

/// Generic acknowledgement returned by mutations without a richer payload.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Outcome marker, always `"ok"` on success paths.
    pub status: String,
}

impl ActionResponse {
    /// Acknowledge a successful mutation.
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}
