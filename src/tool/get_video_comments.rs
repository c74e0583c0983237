//! Archived video comments tool

use super::{json_result, run_task};
use crate::TwitchClient;
use crate::twitch::comments::{Comment, CommentFetchRequest, FetchResult};
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetVideoCommentsArgs {
    /// Video id
    pub video_id: String,
    /// Maximum number of comments to return (at least 1); omit to fetch all
    pub limit: Option<u32>,
    /// Cursor returned as nextCursor by a previous call
    pub cursor: Option<String>,
}

/// Tool payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCommentsOutput {
    pub total: usize,
    pub comments: Vec<Comment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}

impl From<FetchResult> for VideoCommentsOutput {
    fn from(result: FetchResult) -> Self {
        Self {
            total: result.comments.len(),
            comments: result.comments,
            next_cursor: result.next_cursor,
        }
    }
}

impl GetVideoCommentsArgs {
    /// Validate the arguments and turn them into an engine request.
    pub fn into_request(self) -> Result<CommentFetchRequest, McpError> {
        if self.video_id.trim().is_empty() {
            return Err(McpError::invalid_params("videoId cannot be empty", None));
        }

        let mut request = CommentFetchRequest::new(self.video_id);

        if let Some(limit) = self.limit {
            let limit = NonZeroUsize::new(limit as usize)
                .ok_or_else(|| McpError::invalid_params("limit must be at least 1", None))?;
            request = request.limit(limit);
        }

        if let Some(cursor) = self.cursor.filter(|c| !c.is_empty()) {
            request = request.cursor(cursor);
        }

        Ok(request)
    }
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetVideoCommentsArgs,
) -> Result<CallToolResult, McpError> {
    let request = args.into_request()?;
    let result = run_task(client.get_video_comments(request)).await?;
    json_result(&VideoCommentsOutput::from(result))
}
