//! Video listing operation.

use crate::runtime::AsyncTask;
use crate::twitch::get_users::lookup_user;
use crate::twitch::helix::HelixClient;
use crate::twitch::models::Video;
use crate::twitch::{error::TwitchError, util::spawn_task, util::validate_limit};
use std::sync::Arc;

/// List videos (archives, highlights, uploads) of a channel.
pub(crate) fn get_videos(
    inner: Arc<HelixClient>,
    channel_name: impl Into<String>,
    limit: Option<u32>,
) -> AsyncTask<Result<Vec<Video>, TwitchError>> {
    let channel_name = channel_name.into();
    spawn_task(async move {
        let first = validate_limit(limit)?;
        let user = lookup_user(&inner, &channel_name).await?;
        inner
            .get::<Video>("/videos", &[("user_id", user.id), ("first", first.to_string())])
            .await
    })
}
