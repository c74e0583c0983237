//! Archived video comments over the GraphQL API.
//!
//! [`query`] builds one page request, [`page`] parses one page response,
//! [`engine`] walks the cursors and [`gql`] is the production transport.

pub mod engine;
pub mod gql;
pub mod page;
pub mod query;

pub use engine::{
    CommentFetchRequest, CommentPageSource, DEFAULT_PAGE_DELAY, FetchResult, fetch_comments,
};
pub use gql::{DEFAULT_GQL_CLIENT_ID, DEFAULT_GQL_URL, GqlClient};
pub use page::{Comment, CommentEdge, CommentPage, Commenter};
pub use query::{CommentsVariables, VideoCommentsQuery};
