//! Games API methods

use super::TwitchClient;
use crate::runtime::AsyncTask;
use crate::twitch::error::TwitchError;
use crate::twitch::models::Game;

impl TwitchClient {
    /// List the most watched games
    #[must_use]
    pub fn get_top_games(&self, limit: Option<u32>) -> AsyncTask<Result<Vec<Game>, TwitchError>> {
        crate::twitch::get_games::get_top_games(self.helix.clone(), limit)
    }

    /// Get a game by exact name; `NotFound` when it does not exist
    pub fn get_game_by_name(&self, name: impl Into<String>) -> AsyncTask<Result<Game, TwitchError>> {
        crate::twitch::get_games::get_game_by_name(self.helix.clone(), name)
    }

    /// Search games and categories
    pub fn search_categories(
        &self,
        query: impl Into<String>,
        limit: Option<u32>,
    ) -> AsyncTask<Result<Vec<Game>, TwitchError>> {
        crate::twitch::search::search_categories(self.helix.clone(), query, limit)
    }
}
