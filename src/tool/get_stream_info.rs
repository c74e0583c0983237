//! Live status tool for one channel

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStreamInfoArgs {
    /// Twitch channel (login) name
    pub channel_name: String,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetStreamInfoArgs,
) -> Result<CallToolResult, McpError> {
    let (user, stream) = run_task(client.get_stream_by_user(args.channel_name)).await?;

    let Some(stream) = stream else {
        return json_result(&json!({
            "status": "offline",
            "message": format!("{} is currently offline", user.display_name),
            "lastOnline": null,
        }));
    };

    json_result(&json!({
        "status": "online",
        "title": stream.title,
        "game": stream.game_name,
        "viewers": stream.viewer_count,
        "startedAt": stream.started_at,
        "language": stream.language,
        "thumbnailUrl": stream.thumbnail_url,
        "tags": stream.tags,
    }))
}
