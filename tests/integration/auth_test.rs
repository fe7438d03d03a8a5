//! Integration tests for bearer-token identity handling.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_create_folder_without_identity_is_unauthorized() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "x", "parent": root_id })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Unauthorized");
    assert_eq!(app.folder_count().await, 4);
}

#[tokio::test]
async fn test_invalid_token_is_unauthorized() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "x", "parent": 1 })),
            Some("not-a-jwt"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.folder_count().await, 0);
}

#[tokio::test]
async fn test_token_signed_with_other_secret_is_rejected() {
    let app = helpers::TestApp::new();
    let mut other = app.config.auth.clone();
    other.jwt_secret = "someone-else".to_string();
    let token = drive_auth::JwtEncoder::new(&other)
        .issue("u1")
        .unwrap()
        .token;

    let response = app.request("GET", "/api/drive", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_browsing_needs_no_identity() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;

    let response = app
        .request("GET", &format!("/api/f/{root_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_health_is_public() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["database"], "connected");
}
