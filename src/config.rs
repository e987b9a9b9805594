use tracing::info;

/// Application configuration read from the environment at startup.
///
/// Every value has a local-development fallback so the server runs
/// out of the box against a local LiveKit instance.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Client-facing LiveKit connection URL (ws:// or wss://).
    pub livekit_url: String,
    /// Base URL the frontend serves rooms from, used to build room links.
    pub frontend_url: String,
    /// LiveKit API key used as the JWT issuer.
    pub api_key: String,
    /// LiveKit API secret used to sign tokens.
    pub api_secret: String,
    /// Port the HTTP server listens on.
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let config = Self {
            livekit_url: std::env::var("LIVEKIT_URL")
                .unwrap_or_else(|_| "ws://localhost:7880".to_string()),
            frontend_url: std::env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            api_key: std::env::var("LIVEKIT_API_KEY").unwrap_or_else(|_| "devkey".to_string()),
            api_secret: std::env::var("LIVEKIT_API_SECRET")
                .unwrap_or_else(|_| "secret".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3000),
        };

        info!(
            livekit_url = %config.livekit_url,
            frontend_url = %config.frontend_url,
            port = config.port,
            "Loaded configuration"
        );

        config
    }

    /// HTTP base URL for the LiveKit server API.
    ///
    /// The server API lives on the same host as the websocket endpoint,
    /// so ws:// maps to http:// and wss:// to https://.
    pub fn livekit_http_url(&self) -> String {
        if let Some(rest) = self.livekit_url.strip_prefix("wss://") {
            format!("https://{}", rest)
        } else if let Some(rest) = self.livekit_url.strip_prefix("ws://") {
            format!("http://{}", rest)
        } else {
            self.livekit_url.clone()
        }
    }

    /// URL a user opens to join the given room.
    pub fn room_url(&self, room_id: &str) -> String {
        format!("{}/room/{}", self.frontend_url, room_id)
    }
}
