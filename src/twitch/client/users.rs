//! Users API methods

use super::TwitchClient;
use crate::runtime::AsyncTask;
use crate::twitch::error::TwitchError;
use crate::twitch::models::User;

impl TwitchClient {
    /// Look up a user by login; `NotFound` when it does not exist
    pub fn get_user_by_name(&self, name: impl Into<String>) -> AsyncTask<Result<User, TwitchError>> {
        crate::twitch::get_users::get_user_by_name(self.helix.clone(), name)
    }

    /// Look up several users by login
    #[must_use]
    pub fn get_users_by_names(&self, names: Vec<String>) -> AsyncTask<Result<Vec<User>, TwitchError>> {
        crate::twitch::get_users::get_users_by_names(self.helix.clone(), names)
    }
}
