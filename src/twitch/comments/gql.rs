//! Transport for Twitch's GraphQL endpoint.

use super::engine::CommentPageSource;
use super::page::CommentPage;
use super::query::VideoCommentsQuery;
use crate::twitch::error::{TwitchError, TwitchResult};
use log::debug;
use serde_json::Value;

/// Public web client id accepted by the GraphQL endpoint.
pub const DEFAULT_GQL_CLIENT_ID: &str = "kimne78kx3ncx6brgo4mv6wki5h1ko";

/// Default GraphQL endpoint.
pub const DEFAULT_GQL_URL: &str = "https://gql.twitch.tv/gql";

/// Sends batched queries to the GraphQL endpoint.
#[derive(Clone, Debug)]
pub struct GqlClient {
    http: reqwest::Client,
    url: String,
    client_id: String,
}

impl GqlClient {
    pub fn new(http: reqwest::Client, url: impl Into<String>, client_id: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
            client_id: client_id.into(),
        }
    }

    /// POST a one-element batch and return the raw JSON body.
    async fn execute(&self, query: &VideoCommentsQuery) -> TwitchResult<Value> {
        let resp = self
            .http
            .post(&self.url)
            .header("Client-Id", &self.client_id)
            .json(&[query])
            .send()
            .await?;

        let status = resp.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(TwitchError::VideoNotFound(video_id(query).to_string()));
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

        let body = resp.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| TwitchError::UnexpectedResponse(format!("invalid JSON body: {e}")))
    }
}

impl CommentPageSource for GqlClient {
    async fn fetch_page(&self, query: &VideoCommentsQuery) -> TwitchResult<CommentPage> {
        let video_id = video_id(query);
        debug!("POST {} for video {video_id}", self.url);
        let body = self.execute(query).await?;
        CommentPage::from_response(video_id, body)
    }
}

fn video_id(query: &VideoCommentsQuery) -> &str {
    match &query.variables {
        super::query::CommentsVariables::Offset { video_id, .. }
        | super::query::CommentsVariables::Cursor { video_id, .. } => video_id,
    }
}

/// Prefer the upstream `message` field over the raw body.
pub(crate) fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            if body.is_empty() {
                "no response body".to_string()
            } else {
                body.to_string()
            }
        })
}
