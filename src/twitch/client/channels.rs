//! Channels and search API methods

use super::TwitchClient;
use crate::runtime::AsyncTask;
use crate::twitch::error::TwitchError;
use crate::twitch::models::{ChannelInfo, SearchedChannel, User};

impl TwitchClient {
    /// Get a channel's user and channel information
    pub fn get_channel_info(
        &self,
        channel_name: impl Into<String>,
    ) -> AsyncTask<Result<(User, Option<ChannelInfo>), TwitchError>> {
        crate::twitch::get_channel_info::get_channel_info(self.helix.clone(), channel_name)
    }

    /// Search channels
    pub fn search_channels(
        &self,
        query: impl Into<String>,
        limit: Option<u32>,
    ) -> AsyncTask<Result<Vec<SearchedChannel>, TwitchError>> {
        crate::twitch::search::search_channels(self.helix.clone(), query, limit)
    }
}
