//! Comment models and parsing of one GraphQL comments page.

use crate::twitch::error::{TwitchError, TwitchResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Text used when a comment node carries no message fragments.
pub const EMPTY_MESSAGE: &str = "No message content";

/// Author of a comment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Commenter {
    pub id: String,
    pub display_name: String,
    pub login: String,
}

/// One archived chat message on a video.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub message: String,
    /// `None` when the upstream omits the author (deleted accounts).
    pub commenter: Option<Commenter>,
}

/// A parsed comment together with the cursor pointing just past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentEdge {
    pub cursor: String,
    pub comment: Comment,
}

/// One page of comments as returned by the upstream.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentPage {
    pub edges: Vec<CommentEdge>,
    pub has_next_page: bool,
}

// Raw upstream shapes. Only what we consume is modelled.

#[derive(Deserialize)]
struct RawComments {
    edges: Option<Vec<Value>>,
    #[serde(rename = "pageInfo")]
    page_info: Option<RawPageInfo>,
}

#[derive(Deserialize)]
struct RawPageInfo {
    #[serde(rename = "hasNextPage", default)]
    has_next_page: bool,
}

#[derive(Deserialize)]
struct RawEdge {
    cursor: String,
    node: RawNode,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawNode {
    id: String,
    created_at: DateTime<Utc>,
    commenter: Option<RawCommenter>,
    message: Option<RawMessage>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCommenter {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    login: Option<String>,
}

#[derive(Deserialize)]
struct RawMessage {
    #[serde(default)]
    fragments: Vec<RawFragment>,
}

#[derive(Deserialize)]
struct RawFragment {
    #[serde(default)]
    text: Option<String>,
}

impl RawCommenter {
    /// `None` when there is no login to identify the author by.
    fn into_commenter(self) -> Option<Commenter> {
        let login = self.login.filter(|login| !login.is_empty())?;
        let display_name = self
            .display_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| login.clone());
        Some(Commenter {
            id: self.id.unwrap_or_default(),
            display_name,
            login,
        })
    }
}

impl From<RawEdge> for CommentEdge {
    fn from(raw: RawEdge) -> Self {
        let RawNode {
            id,
            created_at,
            commenter,
            message,
        } = raw.node;

        let text: String = message
            .map(|m| m.fragments)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|f| f.text)
            .collect();
        let message = if text.is_empty() {
            EMPTY_MESSAGE.to_string()
        } else {
            text
        };

        Self {
            cursor: raw.cursor,
            comment: Comment {
                id,
                created_at,
                message,
                commenter: commenter.and_then(RawCommenter::into_commenter),
            },
        }
    }
}

impl CommentPage {
    /// Parse the body of a `POST /gql` batch response for `video_id`.
    ///
    /// The body is a JSON array whose first element is the envelope of our
    /// single query.
    pub fn from_response(video_id: &str, body: Value) -> TwitchResult<Self> {
        let envelope = match body {
            Value::Array(mut items) if !items.is_empty() => items.swap_remove(0),
            Value::Array(_) => {
                return Err(TwitchError::UnexpectedResponse(
                    "empty GraphQL batch response".into(),
                ));
            }
            other => {
                return Err(TwitchError::UnexpectedResponse(format!(
                    "expected a GraphQL batch array, got {}",
                    json_type(&other)
                )));
            }
        };

        let video = envelope
            .get("data")
            .and_then(|data| data.get("video"))
            .filter(|video| !video.is_null());

        let Some(video) = video else {
            if let Some(message) = graphql_error_message(&envelope) {
                return Err(TwitchError::Api(message));
            }
            return Err(TwitchError::VideoNotFound(video_id.to_string()));
        };

        let comments = match video.get("comments") {
            Some(comments) if !comments.is_null() => comments.clone(),
            _ => return Err(TwitchError::CommentsUnavailable(video_id.to_string())),
        };

        let raw: RawComments = serde_json::from_value(comments)
            .map_err(|e| TwitchError::MalformedPage(format!("comments connection: {e}")))?;

        let Some(raw_edges) = raw.edges else {
            return Err(TwitchError::CommentsUnavailable(video_id.to_string()));
        };

        let edges = raw_edges
            .into_iter()
            .enumerate()
            .map(|(index, edge)| {
                serde_json::from_value::<RawEdge>(edge)
                    .map(CommentEdge::from)
                    .map_err(|e| TwitchError::MalformedPage(format!("edge {index}: {e}")))
            })
            .collect::<TwitchResult<Vec<_>>>()?;

        Ok(Self {
            edges,
            has_next_page: raw.page_info.is_some_and(|info| info.has_next_page),
        })
    }

    /// Cursor of the last edge on this page.
    #[must_use]
    pub fn last_cursor(&self) -> Option<&str> {
        self.edges.last().map(|edge| edge.cursor.as_str())
    }
}

fn graphql_error_message(envelope: &Value) -> Option<String> {
    let errors = envelope.get("errors")?.as_array()?;
    let messages: Vec<&str> = errors
        .iter()
        .filter_map(|e| e.get("message").and_then(Value::as_str))
        .collect();
    if messages.is_empty() {
        None
    } else {
        Some(messages.join("; "))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
