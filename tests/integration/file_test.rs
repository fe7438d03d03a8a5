//! Integration tests for file records.

mod helpers;

use http::StatusCode;

fn pdf_body(parent: i64) -> serde_json::Value {
    serde_json::json!({
        "name": "a.pdf",
        "size": 1024,
        "url": "https://x/a.pdf",
        "UTkey": "k1",
        "parent": parent,
    })
}

#[tokio::test]
async fn test_create_file_visible_in_folder() {
    let app = helpers::TestApp::new();
    let token = app.token_for("u1");

    let response = app
        .request("POST", "/api/files", Some(pdf_body(4)), Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["ownerId"], "u1");
    assert_eq!(response.body["data"]["UTkey"], "k1");
    assert_eq!(response.body["data"]["size"], 1024);

    let listed = app.request("GET", "/api/folders/4/files", None, None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.names_at("/data"), vec!["a.pdf"]);
    assert_eq!(listed.body["data"][0]["url"], "https://x/a.pdf");
}

#[tokio::test]
async fn test_files_appear_on_folder_page() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;
    let token = app.token_for("u1");

    for name in ["b.txt", "a.txt"] {
        let mut body = pdf_body(root_id);
        body["name"] = serde_json::json!(name);
        let response = app.request("POST", "/api/files", Some(body), Some(&token)).await;
        assert_eq!(response.status, StatusCode::CREATED);
    }

    let page = app
        .request("GET", &format!("/api/f/{root_id}"), None, None)
        .await;
    assert_eq!(page.names_at("/data/files"), vec!["b.txt", "a.txt"]);
}

#[tokio::test]
async fn test_create_file_requires_identity() {
    let app = helpers::TestApp::new();

    let response = app.request("POST", "/api/files", Some(pdf_body(4)), None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    let listed = app.request("GET", "/api/folders/4/files", None, None).await;
    assert_eq!(listed.body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_create_file_rejects_invalid_body() {
    let app = helpers::TestApp::new();
    let token = app.token_for("u1");
    let mut body = pdf_body(4);
    body["url"] = serde_json::json!("not a url");

    let response = app.request("POST", "/api/files", Some(body), Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_create_file_missing_field_is_json_error() {
    let app = helpers::TestApp::new();
    let token = app.token_for("u1");
    let mut body = pdf_body(4);
    body.as_object_mut().unwrap().remove("UTkey");

    let response = app.request("POST", "/api/files", Some(body), Some(&token)).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("UTkey"));
}
