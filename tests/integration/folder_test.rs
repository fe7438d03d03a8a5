//! Integration tests for folder browsing and creation.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_open_root_folder_page() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;

    let response = app
        .request("GET", &format!("/api/f/{root_id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["currentFolderId"], root_id);
    assert_eq!(
        response.names_at("/data/folders"),
        vec!["Trash", "Shared", "Documents"]
    );
    assert_eq!(response.names_at("/data/parents"), vec!["Root"]);
    assert_eq!(response.body["data"]["files"], serde_json::json!([]));
}

#[tokio::test]
async fn test_breadcrumbs_for_nested_folder() {
    let app = helpers::TestApp::new();
    let root = app.seed_folder("Root", None, "u1").await;
    let docs = app.seed_folder("Documents", Some(root.id), "u1").await;
    let reports = app.seed_folder("Reports", Some(docs.id), "u1").await;

    let response = app
        .request("GET", &format!("/api/f/{}", reports.id), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.names_at("/data/parents"),
        vec!["Root", "Documents", "Reports"]
    );

    let parents = app
        .request("GET", &format!("/api/folders/{}/parents", reports.id), None, None)
        .await;
    assert_eq!(parents.status, StatusCode::OK);
    let ids: Vec<_> = parents.body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![root.id, docs.id, reports.id]);
}

#[tokio::test]
async fn test_invalid_folder_id_is_bad_request() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/f/abc", None, None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert_eq!(response.body["message"], "Invalid folder ID");

    let response = app.request("GET", "/api/folders/abc/children", None, None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_folder_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/f/999", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Parent folder not found");

    let response = app.request("GET", "/api/folders/999", None, None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_children_of_missing_folder_are_empty() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/folders/999/children", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], serde_json::json!([]));

    let response = app.request("GET", "/api/folders/999/files", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn test_cyclic_parents_are_conflict() {
    let app = helpers::TestApp::new();
    app.seed_folder("a", Some(2), "u1").await;
    app.seed_folder("b", Some(1), "u1").await;

    let response = app.request("GET", "/api/f/1", None, None).await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["error"], "CONFLICT");
}

#[tokio::test]
async fn test_create_folder_with_identity() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;
    let token = app.token_for("u1");

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "Reports", "parent": root_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], "Reports");
    assert_eq!(response.body["data"]["ownerId"], "u1");
    assert_eq!(response.body["data"]["parent"], root_id);

    let children = app
        .request("GET", &format!("/api/folders/{root_id}/children"), None, None)
        .await;
    assert_eq!(
        children.names_at("/data"),
        vec!["Trash", "Shared", "Documents", "Reports"]
    );
}

#[tokio::test]
async fn test_create_folder_default_name() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;
    let token = app.token_for("u1");

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "parent": root_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], "New Folder");
}

#[tokio::test]
async fn test_create_folder_blank_name_rejected() {
    let app = helpers::TestApp::new();
    let token = app.token_for("u1");

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "  ", "parent": 1 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.folder_count().await, 0);
}

#[tokio::test]
async fn test_create_folder_keeps_name_verbatim() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;
    let token = app.token_for("u1");

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": " Q3 ", "parent": root_id })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["data"]["name"], " Q3 ");
}

#[tokio::test]
async fn test_create_folder_missing_parent_is_json_error() {
    let app = helpers::TestApp::new();
    let token = app.token_for("u1");

    let response = app
        .request(
            "POST",
            "/api/folders",
            Some(serde_json::json!({ "name": "Reports" })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    assert!(response.body["message"].as_str().unwrap().contains("parent"));
    assert_eq!(app.folder_count().await, 0);
}

#[tokio::test]
async fn test_subtree_lists_all_descendants() {
    let app = helpers::TestApp::new();
    let root_id = app.onboard("u1").await;
    let children = app
        .request("GET", &format!("/api/folders/{root_id}/children"), None, None)
        .await;
    let docs_id = children.body["data"][2]["id"].as_i64().unwrap();
    app.seed_folder("Reports", Some(docs_id), "u1").await;

    let response = app
        .request("GET", &format!("/api/folders/{root_id}/subtree"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.names_at("/data/folders"),
        vec!["Trash", "Shared", "Documents", "Reports"]
    );
}
