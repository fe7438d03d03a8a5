//! Integration tests for user onboarding and the root folder lookup.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_onboard_creates_default_tree() {
    let app = helpers::TestApp::new();

    let root_id = app.onboard("user_2x").await;

    assert_eq!(app.folder_count().await, 4);
    let root = app
        .request("GET", &format!("/api/folders/{root_id}"), None, None)
        .await;
    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(root.body["data"]["name"], "Root");
    assert_eq!(root.body["data"]["parent"], serde_json::Value::Null);
    assert_eq!(root.body["data"]["ownerId"], "user_2x");

    let children = app
        .request("GET", &format!("/api/folders/{root_id}/children"), None, None)
        .await;
    assert_eq!(
        children.names_at("/data"),
        vec!["Trash", "Shared", "Documents"]
    );
    for child in children.body["data"].as_array().unwrap() {
        assert_eq!(child["parent"], root_id);
        assert_eq!(child["ownerId"], "user_2x");
    }
}

#[tokio::test]
async fn test_drive_returns_root_of_current_user() {
    let app = helpers::TestApp::new();
    let other_root = app.onboard("other").await;
    let root_id = app.onboard("u1").await;
    assert_ne!(root_id, other_root);

    let token = app.token_for("u1");
    let response = app.request("GET", "/api/drive", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["id"], root_id);
}

#[tokio::test]
async fn test_drive_before_onboarding_is_not_found() {
    let app = helpers::TestApp::new();
    let token = app.token_for("newcomer");

    let response = app.request("GET", "/api/drive", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_onboard_twice_hides_root() {
    let app = helpers::TestApp::new();
    app.onboard("u1").await;
    app.onboard("u1").await;
    assert_eq!(app.folder_count().await, 8);

    let token = app.token_for("u1");
    let response = app.request("GET", "/api/drive", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_onboard_requires_identity() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/onboard", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.folder_count().await, 0);
}
