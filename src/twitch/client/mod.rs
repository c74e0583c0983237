//! Twitch API client wrapper
//!
//! One handle for both upstreams: the Helix REST API (app token
//! authenticated) and the GraphQL endpoint used for archived comments.
//!
//! # Examples
//!
//! ```rust,no_run
//! use twitch_mcp::TwitchClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let twitch = TwitchClient::builder()
//!         .client_credentials("client-id", "client-secret")
//!         .build()?;
//!
//!     let user = twitch.get_user_by_name("twitchdev").await??;
//!     println!("{} ({})", user.display_name, user.id);
//!
//!     Ok(())
//! }
//! ```

use crate::twitch::auth::{AppTokenProvider, DEFAULT_AUTH_URL};
use crate::twitch::comments::{DEFAULT_GQL_CLIENT_ID, DEFAULT_GQL_URL, DEFAULT_PAGE_DELAY, GqlClient};
use crate::twitch::error::{TwitchError, TwitchResult};
use crate::twitch::helix::{DEFAULT_HELIX_URL, HelixClient};
use std::sync::Arc;
use std::time::Duration;

mod channels;
mod chat;
mod games;
mod streams;
mod users;
mod videos;

/// Default per-request HTTP timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Twitch API client.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct TwitchClient {
    helix: Arc<HelixClient>,
    gql: Arc<GqlClient>,
    comment_page_delay: Duration,
}

impl TwitchClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> TwitchClientBuilder {
        TwitchClientBuilder::new()
    }

    /// Delay between consecutive comment pages.
    #[must_use]
    pub fn comment_page_delay(&self) -> Duration {
        self.comment_page_delay
    }
}

/// Builder for creating `TwitchClient`
#[derive(Debug)]
pub struct TwitchClientBuilder {
    client_id: Option<String>,
    client_secret: Option<String>,
    access_token: Option<String>,
    helix_url: String,
    auth_url: String,
    gql_url: String,
    gql_client_id: String,
    comment_page_delay: Duration,
    timeout: Duration,
}

impl TwitchClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            client_id: None,
            client_secret: None,
            access_token: None,
            helix_url: DEFAULT_HELIX_URL.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            gql_url: DEFAULT_GQL_URL.to_string(),
            gql_client_id: DEFAULT_GQL_CLIENT_ID.to_string(),
            comment_page_delay: DEFAULT_PAGE_DELAY,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Application credentials used for the client-credentials grant
    pub fn client_credentials(
        mut self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        self.client_id = Some(client_id.into());
        self.client_secret = Some(client_secret.into());
        self
    }

    /// Application client id (needed alone when a static token is used)
    pub fn client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    /// Pre-issued app access token; skips the token exchange
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    pub fn helix_url(mut self, url: impl Into<String>) -> Self {
        self.helix_url = url.into();
        self
    }

    pub fn auth_url(mut self, url: impl Into<String>) -> Self {
        self.auth_url = url.into();
        self
    }

    pub fn gql_url(mut self, url: impl Into<String>) -> Self {
        self.gql_url = url.into();
        self
    }

    pub fn gql_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.gql_client_id = client_id.into();
        self
    }

    /// Delay before each continuation request of a comment traversal.
    ///
    /// Not bounded here; `TwitchConfig` keeps environment overrides at or
    /// above [`DEFAULT_PAGE_DELAY`]. Tests pass `Duration::ZERO`.
    pub fn comment_page_delay(mut self, delay: Duration) -> Self {
        self.comment_page_delay = delay;
        self
    }

    /// HTTP timeout for each request
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the `TwitchClient`
    pub fn build(self) -> TwitchResult<TwitchClient> {
        let client_id = self
            .client_id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| TwitchError::ClientSetup("client id is required".into()))?;

        let auth = match (self.access_token, self.client_secret) {
            (Some(token), _) if !token.is_empty() => {
                AppTokenProvider::with_static_token(client_id, token)
            }
            (_, Some(secret)) if !secret.is_empty() => {
                AppTokenProvider::client_credentials(client_id, secret, self.auth_url)
            }
            _ => {
                return Err(TwitchError::ClientSetup(
                    "a client secret or an access token is required".into(),
                ));
            }
        };

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| TwitchError::ClientSetup(e.to_string()))?;

        Ok(TwitchClient {
            helix: Arc::new(HelixClient::new(http.clone(), self.helix_url, auth)),
            gql: Arc::new(GqlClient::new(http, self.gql_url, self.gql_client_id)),
            comment_page_delay: self.comment_page_delay,
        })
    }
}

impl Default for TwitchClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
