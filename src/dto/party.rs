//! Session payloads.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    dao::entity::{parkour, party},
    dto::format_datetime,
};

/// Payload used to start a new session.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CreatePartyRequest {
    /// Route to play.
    #[validate(range(min = 1))]
    pub parkour_id: i32,
    /// Player starting the session.
    #[validate(range(min = 1))]
    pub user_id: i32,
}

/// Response returned once a session has been created and its questions drawn.
#[derive(Debug, Serialize, ToSchema)]
pub struct PartyCreated {
    /// Identifier of the new session.
    pub party_id: i32,
    /// Assigned question ids, in draw order.
    pub question_ids: Vec<i32>,
}

/// Full session snapshot.
#[derive(Debug, Serialize, ToSchema)]
pub struct PartySummary {
    /// Session identifier.
    pub id: i32,
    /// Start timestamp (RFC 3339).
    pub started_at: String,
    /// End timestamp (RFC 3339), once the session is over.
    pub ended_at: Option<String>,
    /// Zero-based index of the current checkpoint.
    pub etat: i32,
    /// Whether the session was abandoned.
    pub abandoned: bool,
    /// Route being played.
    pub parkour_id: i32,
    /// Player owning the session.
    pub user_id: i32,
}

impl From<party::Model> for PartySummary {
    fn from(model: party::Model) -> Self {
        Self {
            id: model.id,
            started_at: format_datetime(model.started_at),
            ended_at: model.ended_at.map(format_datetime),
            etat: model.etat,
            abandoned: model.abandoned,
            parkour_id: model.parkour_id,
            user_id: model.user_id,
        }
    }
}

/// Response returned after advancing a session one checkpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct AdvanceResponse {
    /// New checkpoint index.
    pub etat: i32,
    /// True once the session has passed the last checkpoint of its route.
    pub finished: bool,
}

impl AdvanceResponse {
    /// Build the response, deriving the completion flag from the route length.
    pub fn new(etat: i32) -> Self {
        Self {
            etat,
            finished: etat >= parkour::CHECKPOINT_COUNT as i32,
        }
    }
}

/// Current checkpoint index and the unlock code it resolves to.
#[derive(Debug, Serialize, ToSchema)]
pub struct CurrentCodeResponse {
    /// Zero-based checkpoint index.
    pub etat: i32,
    /// Unlock code of the current checkpoint, or null outside the route.
    pub code: Option<i32>,
}

/// Bare checkpoint index.
#[derive(Debug, Serialize, ToSchema)]
pub struct EtatResponse {
    /// Zero-based checkpoint index.
    pub etat: i32,
}

/// Payload used to overwrite a session's checkpoint index.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SetEtatRequest {
    /// New checkpoint index; must not be negative.
    pub etat: i32,
}

/// Payload used to re-point a session at another route and user.
#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct UpdatePartyRequest {
    /// New route.
    #[validate(range(min = 1))]
    pub parkour_id: i32,
    /// New owning player.
    #[validate(range(min = 1))]
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_response_flags_completion_past_the_last_checkpoint() {
        assert!(!AdvanceResponse::new(1).finished);
        assert!(!AdvanceResponse::new(3).finished);
        assert!(AdvanceResponse::new(4).finished);
        assert!(AdvanceResponse::new(7).finished);
    }
}
