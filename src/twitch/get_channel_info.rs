//! Channel information retrieval operation.

use crate::runtime::AsyncTask;
use crate::twitch::get_users::lookup_user;
use crate::twitch::helix::HelixClient;
use crate::twitch::models::{ChannelInfo, User};
use crate::twitch::{error::TwitchError, util::spawn_task};
use std::sync::Arc;

/// Get a user and, when Helix has it, the channel attached to it.
pub(crate) fn get_channel_info(
    inner: Arc<HelixClient>,
    channel_name: impl Into<String>,
) -> AsyncTask<Result<(User, Option<ChannelInfo>), TwitchError>> {
    let channel_name = channel_name.into();
    spawn_task(async move {
        let user = lookup_user(&inner, &channel_name).await?;
        let channel = inner
            .get_one::<ChannelInfo>("/channels", &[("broadcaster_id", user.id.clone())])
            .await?;
        Ok((user, channel))
    })
}
