//! Videos, clips and archived comments

use super::TwitchClient;
use crate::runtime::AsyncTask;
use crate::twitch::comments::{CommentFetchRequest, FetchResult};
use crate::twitch::error::TwitchError;
use crate::twitch::models::{Clip, Video};

impl TwitchClient {
    /// List clips of a channel
    pub fn get_clips(
        &self,
        channel_name: impl Into<String>,
        limit: Option<u32>,
    ) -> AsyncTask<Result<Vec<Clip>, TwitchError>> {
        crate::twitch::get_clips::get_clips(self.helix.clone(), channel_name, limit)
    }

    /// List videos of a channel
    pub fn get_videos(
        &self,
        channel_name: impl Into<String>,
        limit: Option<u32>,
    ) -> AsyncTask<Result<Vec<Video>, TwitchError>> {
        crate::twitch::get_videos::get_videos(self.helix.clone(), channel_name, limit)
    }

    /// Fetch archived comments of a video, following cursors across pages
    #[must_use]
    pub fn get_video_comments(
        &self,
        request: CommentFetchRequest,
    ) -> AsyncTask<Result<FetchResult, TwitchError>> {
        crate::twitch::get_video_comments::get_video_comments(
            self.gql.clone(),
            request,
            self.comment_page_delay,
        )
    }
}
