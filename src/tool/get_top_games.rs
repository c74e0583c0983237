//! Top games tool

use super::{json_result, run_task};
use crate::TwitchClient;
use crate::twitch::models::Game;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use serde::Deserialize;
use serde_json::{Value, json};

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetTopGamesArgs {
    /// Maximum number of games (1-100, default 20)
    pub limit: Option<u32>,
}

/// `{id, name, boxArtUrl}`; shared with the other game-shaped tools.
pub(crate) fn game_json(game: Game) -> Value {
    json!({
        "id": game.id,
        "name": game.name,
        "boxArtUrl": game.box_art_url,
    })
}

pub(crate) async fn execute(
    client: &TwitchClient,
    args: GetTopGamesArgs,
) -> Result<CallToolResult, McpError> {
    let games = run_task(client.get_top_games(args.limit)).await?;
    let games: Vec<Value> = games.into_iter().map(game_json).collect();
    json_result(&games)
}
