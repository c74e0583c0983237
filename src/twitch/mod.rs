//! Twitch API operations module
//!
//! Helix REST operations plus the GraphQL comments traversal.

pub mod auth;
pub mod client;
pub mod comments;
pub mod error;
pub mod helix;
pub mod models;
pub mod util;

// Re-export client types
pub use client::{TwitchClient, TwitchClientBuilder};

// Re-export error types
pub use error::{ErrorKind, TwitchError, TwitchResult};
pub use util::spawn_task;

pub(crate) use comments::gql::upstream_message;

/// Page size used when a tool caller gives no limit.
pub const DEFAULT_LIMIT: u32 = 20;

// Helix operations (internal)
pub(crate) mod get_channel_info;
pub(crate) mod get_chat_metadata;
pub(crate) mod get_clips;
pub(crate) mod get_games;
pub(crate) mod get_streams;
pub(crate) mod get_users;
pub(crate) mod get_videos;
pub(crate) mod search;

// GraphQL operations (internal)
pub(crate) mod get_video_comments;

pub use get_users::MAX_LOGINS;
