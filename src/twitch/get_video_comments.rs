//! Archived video comments retrieval operation.

use crate::runtime::AsyncTask;
use crate::twitch::comments::{CommentFetchRequest, FetchResult, GqlClient, fetch_comments};
use crate::twitch::{error::TwitchError, util::spawn_task};
use std::sync::Arc;
use std::time::Duration;

/// Walk the comment pages of a video.
pub(crate) fn get_video_comments(
    gql: Arc<GqlClient>,
    request: CommentFetchRequest,
    page_delay: Duration,
) -> AsyncTask<Result<FetchResult, TwitchError>> {
    spawn_task(async move { fetch_comments(gql.as_ref(), &request, page_delay).await })
}
