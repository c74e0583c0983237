//! Single game lookup tool

use super::get_top_games::game_json;
use super::{json_result, run_task};
use crate::TwitchClient;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetGameArgs {
    /// Game name
    pub name: String,
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetGameArgs,
) -> Result<CallToolResult, McpError> {
    let game = run_task(client.get_game_by_name(args.name)).await?;
    json_result(&game_json(game))
}
