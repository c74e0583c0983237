//! Video listing tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetVideosArgs {
    /// Twitch channel (login) name
    pub channel_name: String,
    /// Maximum number of videos (1-100, default 20)
    pub limit: Option<u32>,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetVideosArgs,
) -> Result<CallToolResult, McpError> {
    let videos = run_task(client.get_videos(args.channel_name, args.limit)).await?;

    let videos: Vec<Value> = videos
        .into_iter()
        .map(|video| {
            json!({
                "id": video.id,
                "title": video.title,
                "description": video.description,
                "url": video.url,
                "thumbnailUrl": video.thumbnail_url,
                "viewCount": video.view_count,
                "creationDate": video.created_at,
                "duration": video.duration,
                "language": video.language,
                "type": video.video_type,
                "publishDate": video.published_at,
                "mutedSegments": video.muted_segments,
            })
        })
        .collect();

    json_result(&json!({ "total": videos.len(), "videos": videos }))
}
