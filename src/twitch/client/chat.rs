//! Chat API methods

use super::TwitchClient;
use crate::runtime::AsyncTask;
use crate::twitch::error::TwitchError;
use crate::twitch::models::{BadgeSet, ChatSettings, Emote};

impl TwitchClient {
    /// List global emotes
    #[must_use]
    pub fn get_global_emotes(&self) -> AsyncTask<Result<Vec<Emote>, TwitchError>> {
        crate::twitch::get_chat_metadata::get_global_emotes(self.helix.clone())
    }

    /// List global chat badges
    #[must_use]
    pub fn get_global_badges(&self) -> AsyncTask<Result<Vec<BadgeSet>, TwitchError>> {
        crate::twitch::get_chat_metadata::get_global_badges(self.helix.clone())
    }

    /// Get a channel's chat settings
    pub fn get_chat_settings(
        &self,
        channel_name: impl Into<String>,
    ) -> AsyncTask<Result<ChatSettings, TwitchError>> {
        crate::twitch::get_chat_metadata::get_chat_settings(self.helix.clone(), channel_name)
    }
}
