use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::shared::AppError;

/// Video grant embedded in LiveKit access tokens.
///
/// Fields are camelCase on the wire and omitted when unset, matching
/// what the LiveKit server expects.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VideoGrant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_join: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_create: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_publish: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub can_subscribe: Option<bool>,
}

/// JWT claims for a LiveKit token.
///
/// `iss` is the API key, `sub` the participant identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AccessClaims {
    pub iss: String,
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub exp: usize,
    pub nbf: usize,
    pub video: VideoGrant,
}

/// Mints entry credentials for a named user into a specific room.
///
/// Modeled as a fallible async call so orchestration code treats token
/// minting the same as any other external dependency.
#[async_trait]
pub trait TokenIssuer {
    async fn issue_token(&self, room_name: &str, user_name: &str) -> Result<String, AppError>;
}

/// Signs LiveKit access tokens with the configured API key/secret.
#[derive(Clone)]
pub struct AccessTokenIssuer {
    api_key: String,
    api_secret: String,
    ttl_hours: i64,
}

impl AccessTokenIssuer {
    pub fn new(api_key: String, api_secret: String) -> Self {
        // Allow configuring token lifetime via env var, default to 6 hours
        let ttl_hours = std::env::var("TOKEN_TTL_HOURS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(6);

        Self {
            api_key,
            api_secret,
            ttl_hours,
        }
    }
}

#[async_trait]
impl TokenIssuer for AccessTokenIssuer {
    #[instrument(skip(self))]
    async fn issue_token(&self, room_name: &str, user_name: &str) -> Result<String, AppError> {
        let now = Utc::now();
        let exp = (now + Duration::hours(self.ttl_hours)).timestamp() as usize;

        debug!(
            ttl_hours = self.ttl_hours,
            exp_timestamp = exp,
            "Creating access token"
        );

        let claims = AccessClaims {
            iss: self.api_key.clone(),
            sub: user_name.to_string(),
            name: Some(user_name.to_string()),
            exp,
            nbf: now.timestamp() as usize,
            video: VideoGrant {
                room: Some(room_name.to_string()),
                room_join: Some(true),
                can_publish: Some(true),
                can_subscribe: Some(true),
                ..VideoGrant::default()
            },
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.api_secret.as_ref()),
        )
        .map_err(|e| {
            debug!(error = %e, "Failed to encode access token");
            AppError::Upstream(format!("token signing failed: {}", e))
        })
    }
}

/// Signs a short-lived admin token carrying the given grant, used to
/// authenticate server-to-server API calls.
pub fn sign_admin_token(
    api_key: &str,
    api_secret: &str,
    grant: VideoGrant,
) -> Result<String, AppError> {
    let now = Utc::now();
    let claims = AccessClaims {
        iss: api_key.to_string(),
        sub: api_key.to_string(),
        name: None,
        exp: (now + Duration::minutes(10)).timestamp() as usize,
        nbf: now.timestamp() as usize,
        video: grant,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(api_secret.as_ref()),
    )
    .map_err(|e| AppError::Upstream(format!("token signing failed: {}", e)))
}
