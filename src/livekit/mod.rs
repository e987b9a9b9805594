// Public API - what other modules can use
pub use provisioner::{LiveKitRoomClient, RoomProvisioner};
pub use token::{AccessClaims, AccessTokenIssuer, TokenIssuer, VideoGrant};

// Internal modules
mod provisioner;
mod token;
