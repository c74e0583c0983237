//! Tests for the archived comments traversal over a mock GraphQL endpoint.

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::num::NonZeroUsize;
use std::time::Duration;
use twitch_mcp::{CommentFetchRequest, ErrorKind, TwitchClient, TwitchError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TwitchClient {
    TwitchClient::builder()
        .client_id("app-id")
        .access_token("unused")
        .gql_url(format!("{}/gql", server.uri()))
        .gql_client_id("gql-id")
        .comment_page_delay(Duration::ZERO)
        .build()
        .unwrap()
}

fn edge(id: &str, cursor: &str) -> Value {
    json!({
        "cursor": cursor,
        "node": {
            "id": id,
            "createdAt": "2024-05-01T12:00:00Z",
            "commenter": { "id": "u1", "displayName": "Viewer", "login": "viewer" },
            "message": { "fragments": [{ "text": "hi " }, { "text": id }] }
        }
    })
}

fn page(edges: Vec<Value>, has_next_page: bool) -> Value {
    json!([{
        "data": {
            "video": {
                "id": "v1",
                "comments": {
                    "edges": edges,
                    "pageInfo": { "hasNextPage": has_next_page }
                }
            }
        }
    }])
}

async fn mount_first_page(server: &MockServer, body: Value) {
    Mock::given(method("POST"))
        .and(path("/gql"))
        .and(body_string_contains("\"contentOffsetSeconds\":0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

async fn mount_after(server: &MockServer, cursor: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path("/gql"))
        .and(body_string_contains(format!("\"cursor\":\"{cursor}\"")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn ids(comments: &[twitch_mcp::Comment]) -> Vec<&str> {
    comments.iter().map(|c| c.id.as_str()).collect()
}

#[tokio::test]
async fn test_unbounded_fetch_follows_every_cursor() {
    let server = MockServer::start().await;
    mount_first_page(&server, page(vec![edge("c1", "k1"), edge("c2", "k2")], true)).await;
    mount_after(&server, "k2", page(vec![edge("c3", "k3")], true)).await;
    mount_after(&server, "k3", page(vec![edge("c4", "k4")], false)).await;

    let result = client(&server)
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(ids(&result.comments), vec!["c1", "c2", "c3", "c4"]);
    assert_eq!(result.next_cursor, None);
    assert_eq!(result.comments[0].message, "hi c1");
    assert_eq!(server.received_requests().await.unwrap().len(), 3);
}

#[tokio::test]
async fn test_requests_are_batched_with_client_id() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gql"))
        .and(header("Client-Id", "gql-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(vec![], false)))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(body[0]["operationName"], "VideoCommentsByOffsetOrCursor");
    assert_eq!(body[0]["variables"]["videoID"], "v1");
    assert_eq!(body[0]["variables"]["contentOffsetSeconds"], 0);
}

#[tokio::test]
async fn test_limit_yields_resumable_cursor() {
    let server = MockServer::start().await;
    mount_first_page(
        &server,
        page(vec![edge("c1", "k1"), edge("c2", "k2"), edge("c3", "k3")], true),
    )
    .await;
    mount_after(&server, "k2", page(vec![edge("c3", "k3"), edge("c4", "k4")], false)).await;

    let twitch = client(&server);
    let first = twitch
        .get_video_comments(CommentFetchRequest::new("v1").limit(NonZeroUsize::new(2).unwrap()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(ids(&first.comments), vec!["c1", "c2"]);
    assert_eq!(first.next_cursor.as_deref(), Some("k2"));

    let second = twitch
        .get_video_comments(CommentFetchRequest::new("v1").cursor("k2"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(ids(&second.comments), vec!["c3", "c4"]);
    assert_eq!(second.next_cursor, None);
}

#[tokio::test]
async fn test_limit_equal_to_remaining_comments_has_no_cursor() {
    let server = MockServer::start().await;
    mount_first_page(&server, page(vec![edge("c1", "k1"), edge("c2", "k2")], false)).await;

    let result = client(&server)
        .get_video_comments(CommentFetchRequest::new("v1").limit(NonZeroUsize::new(2).unwrap()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(result.comments.len(), 2);
    assert_eq!(result.next_cursor, None);
}

#[tokio::test]
async fn test_null_video_is_not_found() {
    let server = MockServer::start().await;
    mount_first_page(&server, json!([{ "data": { "video": null } }])).await;

    let err = client(&server)
        .get_video_comments(CommentFetchRequest::new("missing"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::VideoNotFound(ref id) if id == "missing"));
    assert_eq!(err.kind(), ErrorKind::InvalidParams);
}

#[tokio::test]
async fn test_null_comments_are_unavailable() {
    let server = MockServer::start().await;
    mount_first_page(
        &server,
        json!([{ "data": { "video": { "id": "v1", "comments": null } } }]),
    )
    .await;

    let err = client(&server)
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::CommentsUnavailable(_)));
}

#[tokio::test]
async fn test_failure_on_later_page_discards_collected_comments() {
    let server = MockServer::start().await;
    mount_first_page(&server, page(vec![edge("c1", "k1")], true)).await;
    Mock::given(method("POST"))
        .and(path("/gql"))
        .and(body_string_contains("\"cursor\":\"k1\""))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::Status { status: 500, .. }));
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_http_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::RateLimitExceeded));
}

#[tokio::test]
async fn test_non_json_body_is_unexpected() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::UnexpectedResponse(_)));
}

#[tokio::test]
async fn test_http_not_found_is_video_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/gql"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_video_comments(CommentFetchRequest::new("v404"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::VideoNotFound(ref id) if id == "v404"));
    assert_eq!(err.kind(), ErrorKind::InvalidParams);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_network_error() {
    let twitch = TwitchClient::builder()
        .client_id("app-id")
        .access_token("unused")
        .gql_url("http://127.0.0.1:1/gql")
        .build()
        .unwrap();

    let err = twitch
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::Http(_)));
    assert!(err.to_string().starts_with("network error"));
    assert_eq!(err.kind(), ErrorKind::Internal);
}

#[tokio::test]
async fn test_timeout_on_later_page_is_network_error() {
    let server = MockServer::start().await;
    mount_first_page(&server, page(vec![edge("c1", "k1")], true)).await;
    Mock::given(method("POST"))
        .and(path("/gql"))
        .and(body_string_contains("\"cursor\":\"k1\""))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page(vec![edge("c2", "k2")], false))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let twitch = TwitchClient::builder()
        .client_id("app-id")
        .access_token("unused")
        .gql_url(format!("{}/gql", server.uri()))
        .comment_page_delay(Duration::ZERO)
        .timeout(Duration::from_millis(200))
        .build()
        .unwrap();

    let err = twitch
        .get_video_comments(CommentFetchRequest::new("v1"))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::Http(_)));
}
