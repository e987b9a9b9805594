use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::{
    models::RoomMetadata,
    service::RoomService,
    types::{CreateRoomRequest, CreateRoomResponse, RoomListResponse, TokenRequest, TokenResponse},
};
use crate::shared::{AppError, AppState};

fn service(state: &AppState) -> RoomService {
    RoomService::new(
        Arc::clone(&state.room_repository),
        Arc::clone(&state.provisioner),
        Arc::clone(&state.token_issuer),
        Arc::clone(&state.config),
    )
}

/// HTTP handler for minting a room entry token
///
/// POST /api/token
#[instrument(name = "issue_token", skip(state, request))]
pub async fn issue_token(
    State(state): State<AppState>,
    Json(request): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    info!(room_name = %request.room_name, user_name = %request.user_name, "Issuing token");

    let response = service(&state).issue_token(request).await?;

    Ok(Json(response))
}

/// HTTP handler for creating a new room
///
/// POST /api/room/create
/// Provisions the room on the media platform, registers its metadata,
/// and returns the full descriptor with the creator's entry token.
#[instrument(name = "create_room", skip(state, request))]
pub async fn create_room(
    State(state): State<AppState>,
    Json(request): Json<CreateRoomRequest>,
) -> Result<Json<CreateRoomResponse>, AppError> {
    info!(user_name = %request.user_name, "Creating new room");

    let response = service(&state).create_room(request).await?;

    info!(
        room_id = %response.room_id,
        user_name = %response.user_name,
        "Room created successfully"
    );

    Ok(Json(response))
}

/// HTTP handler for fetching one room's metadata
///
/// GET /api/room/:room_id
#[instrument(name = "get_room", skip(state))]
pub async fn get_room(
    State(state): State<AppState>,
    Path(room_id): Path<String>,
) -> Result<Json<RoomMetadata>, AppError> {
    let room = service(&state).get_room(&room_id).await?;

    Ok(Json(room))
}

/// HTTP handler for listing all rooms
///
/// GET /api/rooms
#[instrument(name = "list_rooms", skip(state))]
pub async fn list_rooms(
    State(state): State<AppState>,
) -> Result<Json<RoomListResponse>, AppError> {
    info!("Listing rooms");

    let response = service(&state).list_rooms().await?;

    Ok(Json(response))
}
