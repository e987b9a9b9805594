// Library crate for the AURA room façade
// This file exposes the public API for integration tests

pub mod config;
pub mod health;
pub mod livekit;
pub mod room;
pub mod shared;

// Re-export commonly used types for easier access in tests
pub use config::AppConfig;
pub use livekit::{RoomProvisioner, TokenIssuer};
pub use room::{models::RoomMetadata, repository::RoomRepository};
pub use shared::{AppError, AppState};
