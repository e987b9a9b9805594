mod config;
mod health;
mod livekit;
mod room;
mod shared;

use axum::{
    routing::{get, post},
    Router,
};
use config::AppConfig;
use livekit::{AccessTokenIssuer, LiveKitRoomClient};
use room::repository::InMemoryRoomRepository;
use shared::AppState;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aura_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting AURA room facade");

    let config = Arc::new(AppConfig::from_env());

    // Create shared application state with dependency injection
    let room_repository = Arc::new(InMemoryRoomRepository::new());
    let provisioner = Arc::new(LiveKitRoomClient::new(
        config.livekit_http_url(),
        config.api_key.clone(),
        config.api_secret.clone(),
    ));
    let token_issuer = Arc::new(AccessTokenIssuer::new(
        config.api_key.clone(),
        config.api_secret.clone(),
    ));

    let app_state = AppState::new(
        room_repository,
        provisioner,
        token_issuer,
        Arc::clone(&config),
    );

    // build our application routes
    let app = Router::new()
        .route("/", get(health::service_info))
        .route("/health", get(health::health_check))
        .route("/api/health", get(health::health_check))
        .route("/api/token", post(room::issue_token))
        .route("/api/room/create", post(room::create_room))
        .route("/api/room/:room_id", get(room::get_room))
        .route("/api/rooms", get(room::list_rooms))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Server running on http://localhost:{}", config.port);
    axum::serve(listener, app).await.unwrap();
}
