//! Cursor-following traversal of a video's archived comments.
//!
//! Pages are fetched strictly one after another: each continuation cursor is
//! taken from the previous page. A failed page fails the whole traversal and
//! nothing collected so far is returned.

use super::page::{Comment, CommentPage};
use super::query::VideoCommentsQuery;
use crate::twitch::error::{TwitchError, TwitchResult};
use log::{debug, info, warn};
use serde::Serialize;
use std::future::Future;
use std::num::NonZeroUsize;
use std::time::Duration;

/// Delay inserted before every continuation request.
pub const DEFAULT_PAGE_DELAY: Duration = Duration::from_millis(100);

/// Anything able to answer one comments query with one parsed page.
pub trait CommentPageSource {
    fn fetch_page(
        &self,
        query: &VideoCommentsQuery,
    ) -> impl Future<Output = TwitchResult<CommentPage>> + Send;
}

/// What to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentFetchRequest {
    pub video_id: String,
    /// Stop once this many comments were collected. `None` reads to the end.
    pub limit: Option<NonZeroUsize>,
    /// Resume after this cursor instead of starting at the first page.
    pub cursor: Option<String>,
}

impl CommentFetchRequest {
    /// Fetch every comment of `video_id`.
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            limit: None,
            cursor: None,
        }
    }

    #[must_use]
    pub fn limit(mut self, limit: NonZeroUsize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }
}

/// Comments collected by one traversal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FetchResult {
    pub comments: Vec<Comment>,
    /// Set only when a limit stopped the traversal while more comments remained.
    pub next_cursor: Option<String>,
}

/// Retrieve comments for `request.video_id` from `source`.
///
/// In bounded mode only the remaining quota is taken from each page, and the
/// returned cursor is the one of the last comment taken, so passing it back
/// resumes with the very next comment.
pub async fn fetch_comments<S>(
    source: &S,
    request: &CommentFetchRequest,
    page_delay: Duration,
) -> TwitchResult<FetchResult>
where
    S: CommentPageSource,
{
    if request.video_id.is_empty() {
        return Err(TwitchError::InvalidInput("video id cannot be empty".into()));
    }

    let limit = request.limit.map(NonZeroUsize::get);
    let mut comments: Vec<Comment> = Vec::new();
    let mut query = VideoCommentsQuery::new(request.video_id.as_str(), request.cursor.as_deref());
    let mut pages = 0usize;

    let next_cursor = loop {
        debug!(
            "fetching comments page {} for video {} (cursor: {:?})",
            pages + 1,
            request.video_id,
            query.cursor()
        );
        let page = source.fetch_page(&query).await?;
        pages += 1;

        let available = page.edges.len();
        let take = match limit {
            Some(limit) => available.min(limit - comments.len()),
            None => available,
        };
        let page_has_rest = take < available;
        let has_next_page = page.has_next_page;

        let mut last_cursor = None;
        for edge in page.edges.into_iter().take(take) {
            last_cursor = Some(edge.cursor);
            comments.push(edge.comment);
        }

        if let Some(limit) = limit
            && comments.len() >= limit
        {
            break if page_has_rest || has_next_page {
                last_cursor
            } else {
                None
            };
        }

        if !has_next_page {
            break None;
        }

        let Some(cursor) = last_cursor else {
            warn!(
                "video {} returned an empty page that claims more pages; stopping",
                request.video_id
            );
            break None;
        };

        tokio::time::sleep(page_delay).await;
        query = VideoCommentsQuery::after(request.video_id.as_str(), cursor);
    };

    info!(
        "fetched {} comment(s) for video {} over {} page(s)",
        comments.len(),
        request.video_id,
        pages
    );

    Ok(FetchResult {
        comments,
        next_cursor,
    })
}
