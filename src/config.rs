//! Environment configuration for the server binary.

use crate::twitch::auth::DEFAULT_AUTH_URL;
use crate::twitch::comments::{DEFAULT_GQL_CLIENT_ID, DEFAULT_GQL_URL, DEFAULT_PAGE_DELAY};
use crate::twitch::helix::DEFAULT_HELIX_URL;
use crate::twitch::{TwitchClient, TwitchClientBuilder, TwitchError, TwitchResult};
use std::time::Duration;

pub const ENV_CLIENT_ID: &str = "TWITCH_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "TWITCH_CLIENT_SECRET";
pub const ENV_ACCESS_TOKEN: &str = "TWITCH_ACCESS_TOKEN";
pub const ENV_HELIX_URL: &str = "TWITCH_HELIX_URL";
pub const ENV_AUTH_URL: &str = "TWITCH_AUTH_URL";
pub const ENV_GQL_URL: &str = "TWITCH_GQL_URL";
pub const ENV_GQL_CLIENT_ID: &str = "TWITCH_GQL_CLIENT_ID";
pub const ENV_COMMENT_PAGE_DELAY_MS: &str = "TWITCH_COMMENT_PAGE_DELAY_MS";

/// Settings read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TwitchConfig {
    pub client_id: String,
    pub client_secret: Option<String>,
    pub access_token: Option<String>,
    pub helix_url: String,
    pub auth_url: String,
    pub gql_url: String,
    pub gql_client_id: String,
    pub comment_page_delay: Duration,
}

impl TwitchConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> TwitchResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> TwitchResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let client_id = get(ENV_CLIENT_ID).ok_or_else(|| {
            TwitchError::ClientSetup(format!("{ENV_CLIENT_ID} environment variable is required"))
        })?;
        let client_secret = get(ENV_CLIENT_SECRET);
        let access_token = get(ENV_ACCESS_TOKEN);
        if client_secret.is_none() && access_token.is_none() {
            return Err(TwitchError::ClientSetup(format!(
                "{ENV_CLIENT_SECRET} (or {ENV_ACCESS_TOKEN}) environment variable is required"
            )));
        }

        let comment_page_delay = match get(ENV_COMMENT_PAGE_DELAY_MS) {
            Some(raw) => {
                let delay = raw.trim().parse::<u64>().map(Duration::from_millis).map_err(|e| {
                    TwitchError::ClientSetup(format!("{ENV_COMMENT_PAGE_DELAY_MS}='{raw}': {e}"))
                })?;
                // The override may slow the traversal down, never speed it up.
                if delay < DEFAULT_PAGE_DELAY {
                    return Err(TwitchError::ClientSetup(format!(
                        "{ENV_COMMENT_PAGE_DELAY_MS} must be at least {} ms",
                        DEFAULT_PAGE_DELAY.as_millis()
                    )));
                }
                delay
            }
            None => DEFAULT_PAGE_DELAY,
        };

        Ok(Self {
            client_id,
            client_secret,
            access_token,
            helix_url: get(ENV_HELIX_URL).unwrap_or_else(|| DEFAULT_HELIX_URL.to_string()),
            auth_url: get(ENV_AUTH_URL).unwrap_or_else(|| DEFAULT_AUTH_URL.to_string()),
            gql_url: get(ENV_GQL_URL).unwrap_or_else(|| DEFAULT_GQL_URL.to_string()),
            gql_client_id: get(ENV_GQL_CLIENT_ID)
                .unwrap_or_else(|| DEFAULT_GQL_CLIENT_ID.to_string()),
            comment_page_delay,
        })
    }

    /// A client builder carrying these settings.
    #[must_use]
    pub fn builder(&self) -> TwitchClientBuilder {
        let mut builder = TwitchClient::builder()
            .client_id(self.client_id.clone())
            .helix_url(self.helix_url.clone())
            .auth_url(self.auth_url.clone())
            .gql_url(self.gql_url.clone())
            .gql_client_id(self.gql_client_id.clone())
            .comment_page_delay(self.comment_page_delay);
        if let Some(secret) = &self.client_secret {
            builder = builder.client_credentials(self.client_id.clone(), secret.clone());
        }
        if let Some(token) = &self.access_token {
            builder = builder.access_token(token.clone());
        }
        builder
    }

    pub fn build_client(&self) -> TwitchResult<TwitchClient> {
        self.builder().build()
    }
}
