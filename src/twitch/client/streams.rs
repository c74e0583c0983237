//! Streams API methods

use super::TwitchClient;
use crate::runtime::AsyncTask;
use crate::twitch::error::TwitchError;
use crate::twitch::models::{Stream, StreamFilter, User};

impl TwitchClient {
    /// Get a channel's user and its live stream (`None` when offline)
    pub fn get_stream_by_user(
        &self,
        channel_name: impl Into<String>,
    ) -> AsyncTask<Result<(User, Option<Stream>), TwitchError>> {
        crate::twitch::get_streams::get_stream_by_user(self.helix.clone(), channel_name)
    }

    /// List live streams
    #[must_use]
    pub fn get_streams(&self, filter: StreamFilter) -> AsyncTask<Result<Vec<Stream>, TwitchError>> {
        crate::twitch::get_streams::get_streams(self.helix.clone(), filter)
    }
}
