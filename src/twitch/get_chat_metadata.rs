//! Chat emotes, badges and settings.

use crate::runtime::AsyncTask;
use crate::twitch::get_users::lookup_user;
use crate::twitch::helix::HelixClient;
use crate::twitch::models::{BadgeSet, ChatSettings, Emote};
use crate::twitch::{error::TwitchError, util::spawn_task};
use std::sync::Arc;

pub(crate) fn get_global_emotes(inner: Arc<HelixClient>) -> AsyncTask<Result<Vec<Emote>, TwitchError>> {
    spawn_task(async move { inner.get::<Emote>("/chat/emotes/global", &[]).await })
}

pub(crate) fn get_global_badges(
    inner: Arc<HelixClient>,
) -> AsyncTask<Result<Vec<BadgeSet>, TwitchError>> {
    spawn_task(async move { inner.get::<BadgeSet>("/chat/badges/global", &[]).await })
}

/// Get chat settings of a channel.
pub(crate) fn get_chat_settings(
    inner: Arc<HelixClient>,
    channel_name: impl Into<String>,
) -> AsyncTask<Result<ChatSettings, TwitchError>> {
    let channel_name = channel_name.into();
    spawn_task(async move {
        let user = lookup_user(&inner, &channel_name).await?;
        inner
            .get_one::<ChatSettings>("/chat/settings", &[("broadcaster_id", user.id)])
            .await?
            .ok_or_else(|| TwitchError::Api(format!("no chat settings returned for {channel_name}")))
    })
}
