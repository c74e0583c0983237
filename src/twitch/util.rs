//! Twitch API utilities

use crate::runtime::AsyncTask;
use std::future::Future;

/// Spawn an async task for a Twitch API operation.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Check a Helix `first` page size.
pub(crate) fn validate_limit(limit: Option<u32>) -> crate::twitch::TwitchResult<u32> {
    let limit = limit.unwrap_or(crate::twitch::DEFAULT_LIMIT);
    if !(1..=100).contains(&limit) {
        return Err(crate::twitch::TwitchError::InvalidInput(
            "limit must be between 1 and 100".into(),
        ));
    }
    Ok(limit)
}
