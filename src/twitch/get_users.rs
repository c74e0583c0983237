//! Twitch user lookup operations.

use crate::runtime::AsyncTask;
use crate::twitch::helix::HelixClient;
use crate::twitch::models::User;
use crate::twitch::{error::TwitchError, util::spawn_task};
use std::sync::Arc;

/// Helix accepts at most this many logins per `/users` request.
pub const MAX_LOGINS: usize = 100;

/// Resolve a channel (login) name to its user, failing with `NotFound` when absent.
pub(crate) async fn lookup_user(inner: &HelixClient, name: &str) -> Result<User, TwitchError> {
    if name.is_empty() {
        return Err(TwitchError::InvalidInput("channel name cannot be empty".into()));
    }
    inner
        .get_one::<User>("/users", &[("login", name.to_lowercase())])
        .await?
        .ok_or_else(|| TwitchError::NotFound(format!("Channel \"{name}\" not found")))
}

/// Get a single user by login name.
pub(crate) fn get_user_by_name(
    inner: Arc<HelixClient>,
    name: impl Into<String>,
) -> AsyncTask<Result<User, TwitchError>> {
    let name = name.into();
    spawn_task(async move { lookup_user(&inner, &name).await })
}

/// Get several users by login name. Unknown names are silently skipped.
pub(crate) fn get_users_by_names(
    inner: Arc<HelixClient>,
    names: Vec<String>,
) -> AsyncTask<Result<Vec<User>, TwitchError>> {
    spawn_task(async move {
        if names.is_empty() {
            return Err(TwitchError::InvalidInput("userNames cannot be empty".into()));
        }
        if names.len() > MAX_LOGINS {
            return Err(TwitchError::InvalidInput(format!(
                "at most {MAX_LOGINS} user names per request"
            )));
        }
        let query: Vec<(&str, String)> = names.iter().map(|n| ("login", n.to_lowercase())).collect();
        inner.get::<User>("/users", &query).await
    })
}
