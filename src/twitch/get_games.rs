//! Game / category operations.

use crate::runtime::AsyncTask;
use crate::twitch::helix::HelixClient;
use crate::twitch::models::Game;
use crate::twitch::{error::TwitchError, util::spawn_task, util::validate_limit};
use std::sync::Arc;

/// Resolve a game by its exact name, failing with `NotFound` when absent.
pub(crate) async fn lookup_game(inner: &HelixClient, name: &str) -> Result<Game, TwitchError> {
    if name.is_empty() {
        return Err(TwitchError::InvalidInput("game name cannot be empty".into()));
    }
    inner
        .get_one::<Game>("/games", &[("name", name.to_string())])
        .await?
        .ok_or_else(|| TwitchError::NotFound(format!("Game \"{name}\" not found")))
}

/// List the most watched games.
pub(crate) fn get_top_games(
    inner: Arc<HelixClient>,
    limit: Option<u32>,
) -> AsyncTask<Result<Vec<Game>, TwitchError>> {
    spawn_task(async move {
        let first = validate_limit(limit)?;
        inner.get::<Game>("/games/top", &[("first", first.to_string())]).await
    })
}

/// Get one game by name.
pub(crate) fn get_game_by_name(
    inner: Arc<HelixClient>,
    name: impl Into<String>,
) -> AsyncTask<Result<Game, TwitchError>> {
    let name = name.into();
    spawn_task(async move { lookup_game(&inner, &name).await })
}
