//! Tests for Helix operations over a mock REST endpoint.

use pretty_assertions::assert_eq;
use serde_json::json;
use twitch_mcp::twitch::models::StreamFilter;
use twitch_mcp::{ErrorKind, TwitchClient, TwitchError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TwitchClient {
    TwitchClient::builder()
        .client_id("app-id")
        .access_token("static-token")
        .helix_url(server.uri())
        .build()
        .unwrap()
}

fn user_json(id: &str, login: &str) -> serde_json::Value {
    json!({
        "id": id,
        "login": login,
        "display_name": login.to_uppercase(),
        "type": "",
        "broadcaster_type": "partner",
        "description": "",
        "profile_image_url": "https://example.com/p.png",
        "offline_image_url": "",
        "created_at": "2016-12-14T20:32:28Z"
    })
}

#[tokio::test]
async fn test_get_user_sends_auth_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(query_param("login", "twitchdev"))
        .and(header("Client-Id", "app-id"))
        .and(header("Authorization", "Bearer static-token"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [user_json("1", "twitchdev")] })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server)
        .get_user_by_name("TwitchDev")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.id, "1");
    assert_eq!(user.display_name, "TWITCHDEV");
}

#[tokio::test]
async fn test_unknown_channel_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_user_by_name("nobody")
        .await
        .unwrap()
        .unwrap_err();

    assert_eq!(err.to_string(), "Channel \"nobody\" not found");
    assert_eq!(err.kind(), ErrorKind::InvalidParams);
}

#[tokio::test]
async fn test_offline_channel_has_no_stream() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": [user_json("42", "quiet")] })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/streams"))
        .and(query_param("user_id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&server)
        .await;

    let (user, stream) = client(&server)
        .get_stream_by_user("quiet")
        .await
        .unwrap()
        .unwrap();

    assert_eq!(user.login, "quiet");
    assert!(stream.is_none());
}

#[tokio::test]
async fn test_streams_resolve_game_name() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games"))
        .and(query_param("name", "Chess"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": "743", "name": "Chess", "box_art_url": "" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/streams"))
        .and(query_param("game_id", "743"))
        .and(query_param("language", "en"))
        .and(query_param("first", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{
                "id": "s1",
                "user_id": "9",
                "user_login": "gm",
                "user_name": "GM",
                "game_id": "743",
                "game_name": "Chess",
                "title": "blitz",
                "tags": ["English"],
                "viewer_count": 1200,
                "started_at": "2024-05-01T10:00:00Z",
                "language": "en",
                "thumbnail_url": ""
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let streams = client(&server)
        .get_streams(StreamFilter {
            game: Some("Chess".into()),
            language: Some("en".into()),
            limit: Some(5),
        })
        .await
        .unwrap()
        .unwrap();

    assert_eq!(streams.len(), 1);
    assert_eq!(streams[0].viewer_count, 1200);
}

#[tokio::test]
async fn test_limit_out_of_range_is_rejected_before_request() {
    let server = MockServer::start().await;

    let err = client(&server)
        .get_top_games(Some(0))
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::InvalidInput(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_error_status_carries_upstream_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games/top"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "Bad Request",
            "status": 400,
            "message": "Invalid first"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_top_games(None)
        .await
        .unwrap()
        .unwrap_err();

    match err {
        TwitchError::Status { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Invalid first");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_and_unauthorized() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/games/top"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/chat/emotes/global"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let twitch = client(&server);
    let err = twitch.get_top_games(None).await.unwrap().unwrap_err();
    assert!(matches!(err, TwitchError::RateLimitExceeded));

    let err = twitch.get_global_emotes().await.unwrap().unwrap_err();
    assert!(matches!(err, TwitchError::AuthRequired));
}
