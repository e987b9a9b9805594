use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use super::{
    models::RoomMetadata,
    repository::RoomRepository,
    types::{CreateRoomRequest, CreateRoomResponse, RoomListResponse, TokenRequest, TokenResponse},
};
use crate::{
    config::AppConfig,
    livekit::{RoomProvisioner, TokenIssuer},
    shared::AppError,
};

/// Service for room registry and token orchestration logic
pub struct RoomService {
    repository: Arc<dyn RoomRepository + Send + Sync>,
    provisioner: Arc<dyn RoomProvisioner + Send + Sync>,
    token_issuer: Arc<dyn TokenIssuer + Send + Sync>,
    config: Arc<AppConfig>,
}

impl RoomService {
    pub fn new(
        repository: Arc<dyn RoomRepository + Send + Sync>,
        provisioner: Arc<dyn RoomProvisioner + Send + Sync>,
        token_issuer: Arc<dyn TokenIssuer + Send + Sync>,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            repository,
            provisioner,
            token_issuer,
            config,
        }
    }

    /// Creates a room end to end: provisions it on the media platform,
    /// registers the metadata, and mints the creator's entry token.
    ///
    /// The first failing step aborts the sequence. A token failure after
    /// registration leaves the room registered without a creator token;
    /// the registry has no delete, so there is no compensation step.
    #[instrument(skip(self))]
    pub async fn create_room(
        &self,
        request: CreateRoomRequest,
    ) -> Result<CreateRoomResponse, AppError> {
        if request.user_name.is_empty() {
            return Err(AppError::Validation("userName is required".to_string()));
        }

        let room = RoomMetadata::new(&request);
        debug!(room_id = %room.room_id, "Generated room metadata");

        self.provisioner
            .provision_room(&room.room_id, room.max_participants)
            .await?;

        self.repository.insert_room(&room).await?;

        let token = self
            .token_issuer
            .issue_token(&room.room_id, &room.created_by)
            .await
            .map_err(|e| {
                warn!(
                    room_id = %room.room_id,
                    error = %e,
                    "Token minting failed after registration; room remains registered"
                );
                e
            })?;

        info!(
            room_id = %room.room_id,
            created_by = %room.created_by,
            max_participants = room.max_participants,
            "Room created successfully"
        );

        Ok(CreateRoomResponse {
            room_url: self.config.room_url(&room.room_id),
            room_id: room.room_id,
            room_title: room.room_title,
            description: room.description,
            max_participants: room.max_participants,
            user_name: room.created_by,
            token,
            livekit_url: self.config.livekit_url.clone(),
        })
    }

    /// Looks up a single room by id
    #[instrument(skip(self))]
    pub async fn get_room(&self, room_id: &str) -> Result<RoomMetadata, AppError> {
        self.repository
            .get_room(room_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Room not found".to_string()))
    }

    /// Lists all registered rooms with a total count
    #[instrument(skip(self))]
    pub async fn list_rooms(&self) -> Result<RoomListResponse, AppError> {
        let rooms = self.repository.list_rooms().await?;

        info!(room_count = rooms.len(), "Rooms retrieved successfully");

        Ok(RoomListResponse {
            total: rooms.len(),
            rooms,
        })
    }

    /// Mints an entry token for a named user into a named room.
    ///
    /// Validation runs before the issuer is invoked so invalid requests
    /// never reach the external service.
    #[instrument(skip(self))]
    pub async fn issue_token(&self, request: TokenRequest) -> Result<TokenResponse, AppError> {
        if request.room_name.is_empty() || request.user_name.is_empty() {
            return Err(AppError::Validation(
                "roomName and userName are required".to_string(),
            ));
        }

        let token = self
            .token_issuer
            .issue_token(&request.room_name, &request.user_name)
            .await?;

        debug!(
            room_name = %request.room_name,
            user_name = %request.user_name,
            "Token issued"
        );

        Ok(TokenResponse {
            token,
            url: self.config.livekit_url.clone(),
        })
    }
}
