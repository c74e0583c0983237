//! GraphQL query descriptors for one page of video comments.

use serde::Serialize;

/// Operation name shared by both query shapes.
pub const OPERATION_NAME: &str = "VideoCommentsByOffsetOrCursor";

const COMMENT_SELECTION: &str = "
            edges {
              cursor
              node {
                id
                createdAt
                commenter {
                  id
                  displayName
                  login
                }
                message {
                  fragments {
                    text
                  }
                }
              }
            }
            pageInfo {
              hasNextPage
            }";

/// Variables for either the offset-seeded or the cursor-seeded request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommentsVariables {
    /// First page, seeded from the start of the video.
    Offset {
        #[serde(rename = "videoID")]
        video_id: String,
        #[serde(rename = "contentOffsetSeconds")]
        content_offset_seconds: u32,
    },
    /// Continuation page, seeded from an opaque cursor.
    Cursor {
        #[serde(rename = "videoID")]
        video_id: String,
        cursor: String,
    },
}

/// Wire descriptor for one `POST /gql` comments request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoCommentsQuery {
    pub operation_name: &'static str,
    pub variables: CommentsVariables,
    pub query: String,
}

impl VideoCommentsQuery {
    /// Build the first-page query, or a continuation query when `cursor` is set.
    pub fn new(video_id: impl Into<String>, cursor: Option<&str>) -> Self {
        match cursor {
            Some(cursor) => Self::after(video_id, cursor),
            None => Self::first_page(video_id),
        }
    }

    /// Offset-seeded query starting at the beginning of the video.
    pub fn first_page(video_id: impl Into<String>) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            variables: CommentsVariables::Offset {
                video_id: video_id.into(),
                content_offset_seconds: 0,
            },
            query: format!(
                "query {OPERATION_NAME}($videoID: ID!, $contentOffsetSeconds: Int!) {{
        video(id: $videoID) {{
          comments(contentOffsetSeconds: $contentOffsetSeconds) {{{COMMENT_SELECTION}
          }}
        }}
      }}"
            ),
        }
    }

    /// Cursor-seeded query returning the page after `cursor`.
    pub fn after(video_id: impl Into<String>, cursor: impl Into<String>) -> Self {
        Self {
            operation_name: OPERATION_NAME,
            variables: CommentsVariables::Cursor {
                video_id: video_id.into(),
                cursor: cursor.into(),
            },
            query: format!(
                "query {OPERATION_NAME}($videoID: ID!, $cursor: String!) {{
        video(id: $videoID) {{
          comments(after: $cursor) {{{COMMENT_SELECTION}
          }}
        }}
      }}"
            ),
        }
    }

    /// The cursor this query resumes from, if any.
    #[must_use]
    pub fn cursor(&self) -> Option<&str> {
        match &self.variables {
            CommentsVariables::Cursor { cursor, .. } => Some(cursor),
            CommentsVariables::Offset { .. } => None,
        }
    }
}
