//! MCP server exposing the Twitch tools.

use crate::TwitchClient;
use crate::tool::{
    GetChannelInfoArgs, GetChatSettingsArgs, GetClipsArgs, GetGameArgs, GetStreamInfoArgs,
    GetStreamsArgs, GetTopGamesArgs, GetUsersArgs, GetVideoCommentsArgs, GetVideosArgs,
    SearchCategoriesArgs, SearchChannelsArgs,
};
use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};

/// MCP server that answers tool calls from a shared [`TwitchClient`].
#[derive(Clone)]
pub struct TwitchMcp {
    client: TwitchClient,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TwitchMcp {
    pub fn new(client: TwitchClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    // Channels & users

    #[tool(description = "Get a Twitch channel's profile (id, names, description, profile picture, creation date) and its current channel settings (game, title, language, tags).")]
    async fn get_channel_info(
        &self,
        params: Parameters<GetChannelInfoArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_channel_info::execute(&self.client, params.0).await
    }

    #[tool(description = "Look up Twitch users by login name (up to 100 at once). Unknown names are left out of the result.")]
    async fn get_users(
        &self,
        params: Parameters<GetUsersArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_users::execute(&self.client, params.0).await
    }

    #[tool(description = "Search Twitch channels by keyword.")]
    async fn search_channels(
        &self,
        params: Parameters<SearchChannelsArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::search_channels::execute(&self.client, params.0).await
    }

    // Streams

    #[tool(description = "Get the live stream of a channel: title, game, viewer count, start time, language, thumbnail and tags. Reports status \"offline\" when the channel is not live.")]
    async fn get_stream_info(
        &self,
        params: Parameters<GetStreamInfoArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_stream_info::execute(&self.client, params.0).await
    }

    #[tool(description = "List streams that are live right now, most viewers first. Optionally filter by game name and by language code (e.g. ja, en).")]
    async fn get_streams(
        &self,
        params: Parameters<GetStreamsArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_streams::execute(&self.client, params.0).await
    }

    // Games

    #[tool(description = "List the games currently most watched on Twitch.")]
    async fn get_top_games(
        &self,
        params: Parameters<GetTopGamesArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_top_games::execute(&self.client, params.0).await
    }

    #[tool(description = "Get a game by its exact name.")]
    async fn get_game(&self, params: Parameters<GetGameArgs>) -> Result<CallToolResult, McpError> {
        crate::tool::get_game::execute(&self.client, params.0).await
    }

    #[tool(description = "Search games and categories by keyword.")]
    async fn search_categories(
        &self,
        params: Parameters<SearchCategoriesArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::search_categories::execute(&self.client, params.0).await
    }

    // Chat

    #[tool(description = "List Twitch's global chat emotes with image URLs at 1x, 2x and 4x.")]
    async fn get_global_emotes(&self) -> Result<CallToolResult, McpError> {
        crate::tool::get_global_emotes::execute(&self.client).await
    }

    #[tool(description = "List Twitch's global chat badges. Each badge set maps its version ids to a title and image URL.")]
    async fn get_global_badges(&self) -> Result<CallToolResult, McpError> {
        crate::tool::get_global_badges::execute(&self.client).await
    }

    #[tool(description = "Get a channel's chat settings: emote-only, follower-only (with delay in minutes), slow mode (with delay in seconds), subscriber-only and unique-chat modes.")]
    async fn get_chat_settings(
        &self,
        params: Parameters<GetChatSettingsArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_chat_settings::execute(&self.client, params.0).await
    }

    // Clips & videos

    #[tool(description = "List clips of a channel with URLs, creator, view count, creation date and duration.")]
    async fn get_clips(&self, params: Parameters<GetClipsArgs>) -> Result<CallToolResult, McpError> {
        crate::tool::get_clips::execute(&self.client, params.0).await
    }

    #[tool(description = "List a channel's videos (archives, highlights, uploads). Video ids can be passed to get_video_comments.")]
    async fn get_videos(
        &self,
        params: Parameters<GetVideosArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_videos::execute(&self.client, params.0).await
    }

    #[tool(description = "Fetch the chat comments of an archived video (VOD) in chronological order. Without a limit every comment is fetched. With a limit, at most that many comments are returned together with nextCursor when more remain; pass nextCursor back as cursor to continue exactly where the previous call stopped.")]
    async fn get_video_comments(
        &self,
        params: Parameters<GetVideoCommentsArgs>,
    ) -> Result<CallToolResult, McpError> {
        crate::tool::get_video_comments::execute(&self.client, params.0).await
    }
}

#[tool_handler]
impl ServerHandler for TwitchMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Twitch data server. Look up channels, live streams, games, clips, chat \
                 settings, videos and the archived chat comments of videos."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
