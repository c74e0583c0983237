//! Channel information tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetChannelInfoArgs {
    /// Twitch channel (login) name
    pub channel_name: String,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetChannelInfoArgs,
) -> Result<CallToolResult, McpError> {
    let (user, channel) = run_task(client.get_channel_info(args.channel_name)).await?;

    let mut response = json!({
        "id": user.id,
        "name": user.login,
        "displayName": user.display_name,
        "description": user.description,
        "profilePictureUrl": user.profile_image_url,
        "creationDate": user.created_at,
    });

    if let Some(channel) = channel {
        response["channel"] = json!({
            "name": channel.broadcaster_name,
            "game": channel.game_name,
            "title": channel.title,
            "language": channel.broadcaster_language,
            "tags": channel.tags,
        });
    }

    json_result(&response)
}
