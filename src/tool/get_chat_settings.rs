//! Chat settings tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetChatSettingsArgs {
    /// Twitch channel (login) name
    pub channel_name: String,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetChatSettingsArgs,
) -> Result<CallToolResult, McpError> {
    let settings = run_task(client.get_chat_settings(args.channel_name)).await?;

    json_result(&json!({
        "emoteOnlyModeEnabled": settings.emote_mode,
        "followerOnlyModeEnabled": settings.follower_mode,
        "followerOnlyModeDelay": settings.follower_mode_duration,
        "slowModeEnabled": settings.slow_mode,
        "slowModeDelay": settings.slow_mode_wait_time,
        "subscriberOnlyModeEnabled": settings.subscriber_mode,
        "uniqueChatModeEnabled": settings.unique_chat_mode,
    }))
}
