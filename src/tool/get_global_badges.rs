//! Global chat badges tool

use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde_json::{Map, Value, json};

pub(crate) async fn execute(client: &TwitchClient) -> Result<CallToolResult, McpError> {
    let sets = run_task(client.get_global_badges()).await?;

    let badges: Vec<Value> = sets
        .into_iter()
        .map(|set| {
            let versions: Map<String, Value> = set
                .versions
                .into_iter()
                .map(|version| {
                    (
                        version.id,
                        json!({ "title": version.title, "imageUrl": version.image_url_1x }),
                    )
                })
                .collect();
            json!({ "id": set.set_id, "versions": versions })
        })
        .collect();

    json_result(&badges)
}
