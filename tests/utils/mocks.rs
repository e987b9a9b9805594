use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use aura_backend::{AppError, RoomProvisioner, TokenIssuer};

// ============================================================================
// Mock Infrastructure
// ============================================================================

/// Provisioner mock recording every room it was asked to create.
pub struct RecordingProvisioner {
    provisioned: Mutex<Vec<(String, u32)>>,
    fail: bool,
}

impl RecordingProvisioner {
    pub fn new() -> Self {
        Self {
            provisioned: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            provisioned: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn provisioned_rooms(&self) -> Vec<(String, u32)> {
        self.provisioned.lock().unwrap().clone()
    }
}

#[async_trait]
impl RoomProvisioner for RecordingProvisioner {
    async fn provision_room(&self, room_id: &str, max_participants: u32) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Upstream("provisioner unavailable".to_string()));
        }
        self.provisioned
            .lock()
            .unwrap()
            .push((room_id.to_string(), max_participants));
        Ok(())
    }
}

/// Token issuer mock producing predictable tokens and counting calls.
pub struct RecordingTokenIssuer {
    calls: AtomicUsize,
    fail: bool,
}

impl RecordingTokenIssuer {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TokenIssuer for RecordingTokenIssuer {
    async fn issue_token(&self, room_name: &str, user_name: &str) -> Result<String, AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Upstream("token service unavailable".to_string()));
        }
        Ok(format!("token-{}-{}", room_name, user_name))
    }
}
