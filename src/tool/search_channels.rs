//! Channel search tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchChannelsArgs {
    /// Search keyword
    pub query: String,
    /// Maximum number of channels (1-100, default 20)
    pub limit: Option<u32>,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: SearchChannelsArgs,
) -> Result<CallToolResult, McpError> {
    let channels = run_task(client.search_channels(args.query, args.limit)).await?;

    let channels: Vec<Value> = channels
        .into_iter()
        .map(|channel| {
            json!({
                "id": channel.id,
                "name": channel.broadcaster_login,
                "displayName": channel.display_name,
                "game": channel.game_name,
                "language": channel.broadcaster_language,
                "tags": channel.tags,
                "isLive": channel.is_live,
            })
        })
        .collect();

    json_result(&channels)
}
