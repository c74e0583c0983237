//! Tests for the client-credentials token exchange.

use serde_json::json;
use twitch_mcp::{TwitchClient, TwitchError};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TwitchClient {
    TwitchClient::builder()
        .client_credentials("app-id", "app-secret")
        .auth_url(server.uri())
        .helix_url(server.uri())
        .build()
        .unwrap()
}

async fn mount_games(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/games/top"))
        .and(header("Authorization", "Bearer minted"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_token_is_exchanged_once_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_secret=app-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "minted",
            "expires_in": 3600,
            "token_type": "bearer"
        })))
        .expect(1)
        .mount(&server)
        .await;
    mount_games(&server).await;

    let twitch = client(&server);
    twitch.get_top_games(None).await.unwrap().unwrap();
    twitch.get_top_games(None).await.unwrap().unwrap();
}

#[tokio::test]
async fn test_rejected_credentials_require_auth() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "message": "invalid client secret"
        })))
        .mount(&server)
        .await;

    let err = client(&server)
        .get_top_games(None)
        .await
        .unwrap()
        .unwrap_err();

    assert!(matches!(err, TwitchError::AuthRequired));
}

#[tokio::test]
async fn test_unauthorized_response_refreshes_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "minted",
            "expires_in": 3600
        })))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/games/top"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let twitch = client(&server);
    let err = twitch.get_top_games(None).await.unwrap().unwrap_err();
    assert!(matches!(err, TwitchError::AuthRequired));

    // The 401 dropped the cached token, so this call exchanges again.
    let _ = twitch.get_top_games(None).await.unwrap();
}
