//! `twitch_mcp` - Twitch data over the Model Context Protocol
//!
//! An async service layer over the Twitch Helix REST API and the GraphQL
//! endpoint that serves archived video comments. Each operation lives in its
//! own module and returns an [`AsyncTask`]; the MCP tools in [`tool`] wrap
//! those operations and [`server`] exposes them over stdio.

// Module declarations
pub mod config;
pub mod runtime;
pub mod twitch;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export Twitch client types
pub use twitch::{TwitchClient, TwitchClientBuilder};

// Re-export Twitch error types
pub use twitch::{ErrorKind, TwitchError, TwitchResult};

// Re-export configuration
pub use config::TwitchConfig;

// Re-export comment traversal types
pub use twitch::comments::{
    Comment, CommentFetchRequest, CommentPageSource, Commenter, FetchResult, fetch_comments,
};

// MCP tools and server (conditional compilation)
#[cfg(feature = "mcp")]
pub mod server;
#[cfg(feature = "mcp")]
pub mod tool;

#[cfg(feature = "mcp")]
pub use server::TwitchMcp;
