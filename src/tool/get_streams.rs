//! Live stream listing tool

use super::{json_result, run_task};
use crate::TwitchClient;
use crate::twitch::models::StreamFilter;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetStreamsArgs {
    /// Filter by game name
    pub game: Option<String>,
    /// Filter by language (e.g. ja, en)
    pub language: Option<String>,
    /// Maximum number of streams (1-100, default 20)
    pub limit: Option<u32>,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetStreamsArgs,
) -> Result<CallToolResult, McpError> {
    let filter = StreamFilter {
        game: args.game,
        language: args.language,
        limit: args.limit,
    };
    let streams = run_task(client.get_streams(filter)).await?;

    let streams: Vec<Value> = streams
        .into_iter()
        .map(|stream| {
            json!({
                "userId": stream.user_id,
                "userName": stream.user_name,
                "title": stream.title,
                "game": stream.game_name,
                "viewers": stream.viewer_count,
                "startedAt": stream.started_at,
                "language": stream.language,
                "thumbnailUrl": stream.thumbnail_url,
                "tags": stream.tags,
            })
        })
        .collect();

    json_result(&streams)
}
