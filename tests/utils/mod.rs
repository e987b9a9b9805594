pub mod mocks;

use std::sync::Arc;

use axum::{
    body::Body,
    http::Request,
    routing::{get, post},
    Router,
};
use serde_json::Value;

use aura_backend::room::repository::InMemoryRoomRepository;
use aura_backend::{health, room, AppConfig, AppState, RoomProvisioner, TokenIssuer};

use mocks::{RecordingProvisioner, RecordingTokenIssuer};

pub fn test_config() -> AppConfig {
    AppConfig {
        livekit_url: "ws://localhost:7880".to_string(),
        frontend_url: "http://localhost:3000".to_string(),
        api_key: "devkey".to_string(),
        api_secret: "secret".to_string(),
        port: 3000,
    }
}

/// Full application setup over mocked platform collaborators.
pub struct TestApp {
    pub router: Router,
    pub provisioner: Arc<RecordingProvisioner>,
    pub token_issuer: Arc<RecordingTokenIssuer>,
}

pub struct TestAppBuilder {
    provisioner: RecordingProvisioner,
    token_issuer: RecordingTokenIssuer,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            provisioner: RecordingProvisioner::new(),
            token_issuer: RecordingTokenIssuer::new(),
        }
    }

    pub fn with_failing_provisioner(mut self) -> Self {
        self.provisioner = RecordingProvisioner::failing();
        self
    }

    pub fn with_failing_token_issuer(mut self) -> Self {
        self.token_issuer = RecordingTokenIssuer::failing();
        self
    }

    pub fn build(self) -> TestApp {
        let provisioner = Arc::new(self.provisioner);
        let token_issuer = Arc::new(self.token_issuer);

        let state = AppState::new(
            Arc::new(InMemoryRoomRepository::new()),
            Arc::clone(&provisioner) as Arc<dyn RoomProvisioner + Send + Sync>,
            Arc::clone(&token_issuer) as Arc<dyn TokenIssuer + Send + Sync>,
            Arc::new(test_config()),
        );

        // Same routes as the production router in main.rs
        let router = Router::new()
            .route("/", get(health::service_info))
            .route("/health", get(health::health_check))
            .route("/api/health", get(health::health_check))
            .route("/api/token", post(room::issue_token))
            .route("/api/room/create", post(room::create_room))
            .route("/api/room/:room_id", get(room::get_room))
            .route("/api/rooms", get(room::list_rooms))
            .with_state(state);

        TestApp {
            router,
            provisioner,
            token_issuer,
        }
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
