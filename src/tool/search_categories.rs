//! Category search tool

use super::get_top_games::game_json;
use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SearchCategoriesArgs {
    /// Search keyword
    pub query: String,
    /// Maximum number of categories (1-100, default 20)
    pub limit: Option<u32>,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: SearchCategoriesArgs,
) -> Result<CallToolResult, McpError> {
    let categories = run_task(client.search_categories(args.query, args.limit)).await?;
    let categories: Vec<Value> = categories.into_iter().map(game_json).collect();
    json_result(&categories)
}
