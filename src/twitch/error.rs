//! Twitch API error types

use thiserror::Error;

/// Error types for Twitch API operations
#[derive(Debug, Error)]
pub enum TwitchError {
    /// Transport-level failure (connect, timeout, body decode)
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success HTTP status
    #[error("request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    /// Upstream reported an error in its payload
    #[error("{0}")]
    Api(String),

    /// Invalid input parameters
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Looked-up resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// The requested video does not exist or is not visible
    #[error("Video not found or invalid response: {0}")]
    VideoNotFound(String),

    /// The video exists but exposes no comments
    #[error("Comments are disabled or not available for video {0}")]
    CommentsUnavailable(String),

    /// A comments page did not have the expected shape
    #[error("Malformed comments page: {0}")]
    MalformedPage(String),

    /// Response body was not something we know how to read
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// Authentication required or failed
    #[error("Authentication required")]
    AuthRequired,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// How a failure is reported to the tool caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller asked for something that does not exist or cannot be served
    InvalidParams,
    /// Transport or upstream failure
    Internal,
}

impl TwitchError {
    /// Classify this error for the tool-dispatch layer.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput(_)
            | Self::NotFound(_)
            | Self::VideoNotFound(_)
            | Self::CommentsUnavailable(_)
            | Self::MalformedPage(_) => ErrorKind::InvalidParams,
            _ => ErrorKind::Internal,
        }
    }
}

/// Convenience result alias for Twitch operations
pub type TwitchResult<T> = Result<T, TwitchError>;

impl From<String> for TwitchError {
    fn from(s: String) -> Self {
        TwitchError::Api(s)
    }
}

impl From<&str> for TwitchError {
    fn from(s: &str) -> Self {
        TwitchError::Api(s.to_string())
    }
}
