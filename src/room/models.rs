use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::types::CreateRoomRequest;

/// Fallback room capacity when the client omits it or sends a
/// non-positive value.
pub const DEFAULT_MAX_PARTICIPANTS: u32 = 10;

/// Registry record for one logical room.
///
/// Records are fully built before insertion and never mutated afterwards,
/// so concurrent readers can only ever observe complete entries.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoomMetadata {
    pub room_id: String, // Generated, format "room-<uuid>"
    pub room_title: String,
    pub description: String,
    pub max_participants: u32,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

impl RoomMetadata {
    /// Builds a new record from a creation request: generates the room id
    /// and resolves all optional fields to their defaults in one place.
    ///
    /// Pure apart from the id and timestamp, so defaulting is testable
    /// without touching any external service.
    pub fn new(request: &CreateRoomRequest) -> Self {
        let room_id = format!("room-{}", Uuid::new_v4());

        Self {
            room_id,
            room_title: request
                .room_title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("{}'s room", request.user_name)),
            description: request.description.clone().unwrap_or_default(),
            max_participants: request
                .max_participants
                .filter(|&n| n > 0)
                .and_then(|n| u32::try_from(n).ok())
                .unwrap_or(DEFAULT_MAX_PARTICIPANTS),
            created_by: request.user_name.clone(),
            created_at: Utc::now(),
        }
    }
}
