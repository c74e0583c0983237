//! App access tokens for the Helix API.
//!
//! Tokens come from the OAuth client-credentials grant and are cached until
//! shortly before they expire. A static token can be supplied instead.

use crate::twitch::error::{TwitchError, TwitchResult};
use crate::twitch::upstream_message;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info};
use serde::Deserialize;
use tokio::sync::Mutex;

/// Default OAuth base URL.
pub const DEFAULT_AUTH_URL: &str = "https://id.twitch.tv/oauth2";

/// Refresh this many seconds before the upstream expiry.
const EXPIRY_MARGIN_SECS: i64 = 60;

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

#[derive(Debug)]
enum Source {
    Static(String),
    ClientCredentials {
        auth_url: String,
        client_secret: String,
        cache: Mutex<Option<CachedToken>>,
    },
}

/// Supplies bearer tokens for Helix requests.
#[derive(Debug)]
pub struct AppTokenProvider {
    client_id: String,
    source: Source,
}

impl AppTokenProvider {
    /// Use a pre-issued token as is.
    pub fn with_static_token(client_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            source: Source::Static(token.into()),
        }
    }

    /// Obtain tokens with the client-credentials grant.
    pub fn client_credentials(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        auth_url: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            source: Source::ClientCredentials {
                auth_url: auth_url.into(),
                client_secret: client_secret.into(),
                cache: Mutex::new(None),
            },
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Current token, fetching a new one when none is cached or it is about to expire.
    pub async fn token(&self, http: &reqwest::Client) -> TwitchResult<String> {
        let (auth_url, client_secret, cache) = match &self.source {
            Source::Static(token) => return Ok(token.clone()),
            Source::ClientCredentials {
                auth_url,
                client_secret,
                cache,
            } => (auth_url, client_secret, cache),
        };

        let mut cached = cache.lock().await;
        if let Some(token) = cached.as_ref()
            && token.expires_at > Utc::now()
        {
            return Ok(token.value.clone());
        }

        debug!("requesting app access token from {auth_url}");
        let resp = http
            .post(format!("{auth_url}/token"))
            .form(&[
                ("client_id", self.client_id.as_str()),
                ("client_secret", client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            if status == reqwest::StatusCode::BAD_REQUEST
                || status == reqwest::StatusCode::FORBIDDEN
                || status == reqwest::StatusCode::UNAUTHORIZED
            {
                info!("app token request rejected: {}", upstream_message(&body));
                return Err(TwitchError::AuthRequired);
            }
            return Err(TwitchError::Status {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        let token: TokenResponse = resp.json().await?;
        let expires_at = Utc::now() + Duration::seconds(token.expires_in - EXPIRY_MARGIN_SECS);
        *cached = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at,
        });
        Ok(token.access_token)
    }

    /// Forget the cached token so the next request fetches a fresh one.
    pub async fn invalidate(&self) {
        if let Source::ClientCredentials { cache, .. } = &self.source {
            cache.lock().await.take();
        }
    }
}
