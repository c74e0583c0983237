//! MCP tools for Twitch
//!
//! Each module declares the tool's argument schema and turns one call into
//! client operations plus a JSON payload. Dispatch lives in [`crate::server`].

// Channel & user tools
pub mod get_channel_info;
pub mod get_users;
pub mod search_channels;

// Stream tools
pub mod get_stream_info;
pub mod get_streams;

// Game tools
pub mod get_game;
pub mod get_top_games;
pub mod search_categories;

// Chat tools
pub mod get_chat_settings;
pub mod get_global_badges;
pub mod get_global_emotes;

// Video tools
pub mod get_clips;
pub mod get_video_comments;
pub mod get_videos;

pub use get_channel_info::GetChannelInfoArgs;
pub use get_chat_settings::GetChatSettingsArgs;
pub use get_clips::GetClipsArgs;
pub use get_game::GetGameArgs;
pub use get_stream_info::GetStreamInfoArgs;
pub use get_streams::GetStreamsArgs;
pub use get_top_games::GetTopGamesArgs;
pub use get_users::GetUsersArgs;
pub use get_video_comments::GetVideoCommentsArgs;
pub use get_videos::GetVideosArgs;
pub use search_categories::SearchCategoriesArgs;
pub use search_channels::SearchChannelsArgs;

use crate::runtime::AsyncTask;
use crate::twitch::{ErrorKind, TwitchError};
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Translate a client failure into the protocol error the caller sees.
pub fn to_mcp_error(err: TwitchError) -> McpError {
    match err.kind() {
        ErrorKind::InvalidParams => McpError::invalid_params(err.to_string(), None),
        ErrorKind::Internal => {
            log::error!("Twitch API error: {err}");
            McpError::internal_error(format!("Twitch API error: {err}"), None)
        }
    }
}

/// Await a client task, flattening channel and API failures.
pub(crate) async fn run_task<T>(task: AsyncTask<Result<T, TwitchError>>) -> Result<T, McpError>
where
    T: Send + 'static,
{
    task.await
        .map_err(|e| McpError::internal_error(format!("Task channel error: {e}"), None))?
        .map_err(to_mcp_error)
}

/// Single text content holding pretty-printed JSON.
pub(crate) fn json_result<T: Serialize>(payload: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(payload)
        .map_err(|e| McpError::internal_error(format!("Failed to serialize response: {e}"), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}
