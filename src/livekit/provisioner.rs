use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, instrument, warn};

use super::token::{sign_admin_token, VideoGrant};
use crate::shared::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Creates rooms on the external media platform.
#[async_trait]
pub trait RoomProvisioner {
    async fn provision_room(&self, room_id: &str, max_participants: u32) -> Result<(), AppError>;
}

/// LiveKit server API client.
///
/// Room creation goes through the Twirp-style RoomService endpoint,
/// authenticated with a short-lived admin token.
#[derive(Clone)]
pub struct LiveKitRoomClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    api_secret: String,
}

impl LiveKitRoomClient {
    pub fn new(base_url: String, api_key: String, api_secret: String) -> Self {
        // Constructed once at startup; a timeout-only builder cannot fail
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");

        Self {
            http,
            base_url,
            api_key,
            api_secret,
        }
    }
}

#[async_trait]
impl RoomProvisioner for LiveKitRoomClient {
    #[instrument(skip(self))]
    async fn provision_room(&self, room_id: &str, max_participants: u32) -> Result<(), AppError> {
        let url = format!("{}/twirp/livekit.RoomService/CreateRoom", self.base_url);
        let admin_token = sign_admin_token(
            &self.api_key,
            &self.api_secret,
            VideoGrant {
                room_create: Some(true),
                ..VideoGrant::default()
            },
        )?;

        debug!(room_id = %room_id, max_participants, "Creating room on LiveKit");

        let response = self
            .http
            .post(&url)
            .bearer_auth(admin_token)
            .json(&json!({
                "name": room_id,
                "max_participants": max_participants,
            }))
            .send()
            .await
            .map_err(|e| {
                warn!(room_id = %room_id, error = %e, "LiveKit room creation request failed");
                AppError::Upstream(format!("room provisioning failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(room_id = %room_id, status = %status, body = %body, "LiveKit rejected room creation");
            return Err(AppError::Upstream(format!(
                "room provisioning failed with status {}: {}",
                status, body
            )));
        }

        debug!(room_id = %room_id, "Room created on LiveKit");
        Ok(())
    }
}
