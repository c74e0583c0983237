//! Global emotes tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde_json::{Value, json};

pub(crate) async fn execute(client: &TwitchClient) -> Result<CallToolResult, McpError> {
    let emotes = run_task(client.get_global_emotes()).await?;

    let emotes: Vec<Value> = emotes
        .into_iter()
        .map(|emote| {
            json!({
                "id": emote.id,
                "name": emote.name,
                "urls": {
                    "url1x": emote.images.url_1x,
                    "url2x": emote.images.url_2x,
                    "url4x": emote.images.url_4x,
                },
            })
        })
        .collect();

    json_result(&emotes)
}
