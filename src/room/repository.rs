use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::RoomMetadata;
use crate::shared::AppError;

/// Trait for room registry operations
///
/// Records are insert-only: no update or delete exists, and a stored
/// record is never mutated after insertion.
#[async_trait]
pub trait RoomRepository {
    async fn insert_room(&self, room: &RoomMetadata) -> Result<(), AppError>;
    async fn get_room(&self, room_id: &str) -> Result<Option<RoomMetadata>, AppError>;

    /// Returns all known rooms in insertion order. Each call re-reads the
    /// full current state; there is no cursor.
    async fn list_rooms(&self) -> Result<Vec<RoomMetadata>, AppError>;
}

/// In-memory implementation of RoomRepository
///
/// A single mutex guards both the id map and the insertion-order index,
/// so inserts are atomic with respect to reads.
pub struct InMemoryRoomRepository {
    rooms: Mutex<RoomStore>,
}

#[derive(Default)]
struct RoomStore {
    by_id: HashMap<String, RoomMetadata>,
    insertion_order: Vec<String>,
}

impl Default for InMemoryRoomRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRoomRepository {
    /// Creates a new empty in-memory registry
    pub fn new() -> Self {
        Self {
            rooms: Mutex::new(RoomStore::default()),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    #[instrument(skip(self, room))]
    async fn insert_room(&self, room: &RoomMetadata) -> Result<(), AppError> {
        debug!(room_id = %room.room_id, created_by = %room.created_by, "Inserting room into registry");

        let mut store = self.rooms.lock().unwrap();
        if store.by_id.contains_key(&room.room_id) {
            // Unreachable with generated uuids, kept as a guard
            warn!(room_id = %room.room_id, "Room id already registered");
            return Err(AppError::Internal);
        }
        store.insertion_order.push(room.room_id.clone());
        store.by_id.insert(room.room_id.clone(), room.clone());

        debug!(room_id = %room.room_id, "Room registered");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_room(&self, room_id: &str) -> Result<Option<RoomMetadata>, AppError> {
        debug!(room_id = %room_id, "Fetching room from registry");

        let store = self.rooms.lock().unwrap();
        let room = store.by_id.get(room_id).cloned();

        match &room {
            Some(r) => debug!(room_id = %room_id, created_by = %r.created_by, "Room found"),
            None => debug!(room_id = %room_id, "Room not found"),
        }

        Ok(room)
    }

    #[instrument(skip(self))]
    async fn list_rooms(&self) -> Result<Vec<RoomMetadata>, AppError> {
        let store = self.rooms.lock().unwrap();
        let rooms = store
            .insertion_order
            .iter()
            .filter_map(|id| store.by_id.get(id).cloned())
            .collect::<Vec<_>>();

        debug!(room_count = rooms.len(), "Listed rooms");
        Ok(rooms)
    }
}
