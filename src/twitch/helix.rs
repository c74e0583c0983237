//! Helix REST transport.

use crate::twitch::auth::AppTokenProvider;
use crate::twitch::error::{TwitchError, TwitchResult};
use crate::twitch::upstream_message;
use log::debug;
use serde::Deserialize;
use serde::de::DeserializeOwned;

/// Default Helix base URL.
pub const DEFAULT_HELIX_URL: &str = "https://api.twitch.tv/helix";

/// Every Helix collection endpoint wraps its items in `data`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

/// Authenticated GET access to Helix.
#[derive(Debug)]
pub struct HelixClient {
    http: reqwest::Client,
    base_url: String,
    auth: AppTokenProvider,
}

impl HelixClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, auth: AppTokenProvider) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            auth,
        }
    }

    /// GET `path` and return the `data` array.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> TwitchResult<Vec<T>> {
        let token = self.auth.token(&self.http).await?;
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {url} {query:?}");

        let resp = self
            .http
            .get(&url)
            .header("Client-Id", self.auth.client_id())
            .bearer_auth(token)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            self.auth.invalidate().await;
            return Err(TwitchError::AuthRequired);
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(TwitchError::RateLimitExceeded);
        }
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TwitchError::Status {
                status: status.as_u16(),
                message: upstream_message(&body),
            });
        }

        let envelope: Envelope<T> = resp
            .json()
            .await
            .map_err(|e| TwitchError::UnexpectedResponse(format!("{path}: {e}")))?;
        Ok(envelope.data)
    }

    /// GET `path` and return the first item, if any.
    pub async fn get_one<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> TwitchResult<Option<T>> {
        Ok(self.get(path, query).await?.into_iter().next())
    }
}
