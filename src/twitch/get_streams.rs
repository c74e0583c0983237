//! Live stream operations.

use crate::runtime::AsyncTask;
use crate::twitch::get_games::lookup_game;
use crate::twitch::get_users::lookup_user;
use crate::twitch::helix::HelixClient;
use crate::twitch::models::{Stream, StreamFilter, User};
use crate::twitch::{error::TwitchError, util::spawn_task, util::validate_limit};
use std::sync::Arc;

/// Get the channel's user and its live stream, `None` when offline.
pub(crate) fn get_stream_by_user(
    inner: Arc<HelixClient>,
    channel_name: impl Into<String>,
) -> AsyncTask<Result<(User, Option<Stream>), TwitchError>> {
    let channel_name = channel_name.into();
    spawn_task(async move {
        let user = lookup_user(&inner, &channel_name).await?;
        let stream = inner
            .get_one::<Stream>("/streams", &[("user_id", user.id.clone())])
            .await?;
        Ok((user, stream))
    })
}

/// List live streams, optionally filtered by game name and language.
pub(crate) fn get_streams(
    inner: Arc<HelixClient>,
    filter: StreamFilter,
) -> AsyncTask<Result<Vec<Stream>, TwitchError>> {
    spawn_task(async move {
        let first = validate_limit(filter.limit)?;
        let mut query = vec![("first", first.to_string())];

        if let Some(game) = filter.game.as_deref() {
            let game = lookup_game(&inner, game).await?;
            query.push(("game_id", game.id));
        }

        if let Some(language) = filter.language {
            query.push(("language", language));
        }

        inner.get::<Stream>("/streams", &query).await
    })
}
