use serde::{Deserialize, Serialize};

use super::models::RoomMetadata;

/// Request payload for minting a room entry token
///
/// Required fields default to empty strings so a missing field surfaces
/// as a validation error instead of a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenRequest {
    #[serde(default)]
    pub room_name: String,
    #[serde(default)]
    pub user_name: String,
}

/// Response payload for token issuance
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub token: String,
    pub url: String,
}

/// Request payload for creating a new room
///
/// `max_participants` is signed so that client-supplied zero or negative
/// values can be detected and defaulted rather than rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomRequest {
    #[serde(default)]
    pub user_name: String,
    pub room_title: Option<String>,
    pub description: Option<String>,
    pub max_participants: Option<i64>,
}

/// Composite response for room creation: the registered metadata plus
/// the creator's entry token and connection endpoints.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomResponse {
    pub room_id: String,
    pub room_url: String,
    pub room_title: String,
    pub description: String,
    pub max_participants: u32,
    pub user_name: String,
    pub token: String,
    pub livekit_url: String,
}

/// Response payload for the room listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RoomListResponse {
    pub rooms: Vec<RoomMetadata>,
    pub total: usize,
}
