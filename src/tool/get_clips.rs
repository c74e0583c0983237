//! Clip listing tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetClipsArgs {
    /// Twitch channel (login) name
    pub channel_name: String,
    /// Maximum number of clips (1-100, default 20)
    pub limit: Option<u32>,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetClipsArgs,
) -> Result<CallToolResult, McpError> {
    let clips = run_task(client.get_clips(args.channel_name, args.limit)).await?;

    let clips: Vec<Value> = clips
        .into_iter()
        .map(|clip| {
            json!({
                "id": clip.id,
                "url": clip.url,
                "embedUrl": clip.embed_url,
                "broadcasterId": clip.broadcaster_id,
                "broadcasterName": clip.broadcaster_name,
                "creatorId": clip.creator_id,
                "creatorName": clip.creator_name,
                "videoId": clip.video_id,
                "gameId": clip.game_id,
                "language": clip.language,
                "title": clip.title,
                "viewCount": clip.view_count,
                "creationDate": clip.created_at,
                "thumbnailUrl": clip.thumbnail_url,
                "duration": clip.duration,
            })
        })
        .collect();

    json_result(&clips)
}
