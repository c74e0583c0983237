//! Category and channel search operations.

use crate::runtime::AsyncTask;
use crate::twitch::helix::HelixClient;
use crate::twitch::models::{Game, SearchedChannel};
use crate::twitch::{error::TwitchError, util::spawn_task, util::validate_limit};
use std::sync::Arc;

fn search_query(query: &str, limit: Option<u32>) -> Result<Vec<(&'static str, String)>, TwitchError> {
    if query.trim().is_empty() {
        return Err(TwitchError::InvalidInput("search query cannot be empty".into()));
    }
    let first = validate_limit(limit)?;
    Ok(vec![("query", query.to_string()), ("first", first.to_string())])
}

/// Search games and categories.
pub(crate) fn search_categories(
    inner: Arc<HelixClient>,
    query: impl Into<String>,
    limit: Option<u32>,
) -> AsyncTask<Result<Vec<Game>, TwitchError>> {
    let query = query.into();
    spawn_task(async move {
        let params = search_query(&query, limit)?;
        inner.get::<Game>("/search/categories", &params).await
    })
}

/// Search channels.
pub(crate) fn search_channels(
    inner: Arc<HelixClient>,
    query: impl Into<String>,
    limit: Option<u32>,
) -> AsyncTask<Result<Vec<SearchedChannel>, TwitchError>> {
    let query = query.into();
    spawn_task(async move {
        let params = search_query(&query, limit)?;
        inner.get::<SearchedChannel>("/search/channels", &params).await
    })
}
