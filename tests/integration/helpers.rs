//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use drive_auth::JwtEncoder;
use drive_core::config::{AppConfig, DatabaseProvider};
use drive_database::{MemoryStore, StoreManager};
use drive_entity::{Folder, FolderId, NewFolder};

use drive_database::store::FolderStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing store, for seeding and direct inspection
    pub store: MemoryStore,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over an empty in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.database.provider = DatabaseProvider::Memory;
        config.auth.jwt_secret = "integration-test-secret".to_string();

        let store = MemoryStore::new();
        let stores = StoreManager::memory(store.clone());
        let state = drive_api::AppState::new(config.clone(), stores);
        let router = drive_api::build_app(state);

        Self {
            router,
            store,
            config,
        }
    }

    /// Issue a valid access token for `user_id`
    pub fn token_for(&self, user_id: &str) -> String {
        JwtEncoder::new(&self.config.auth)
            .issue(user_id)
            .expect("Failed to issue token")
            .token
    }

    /// Insert a folder directly into the store
    pub async fn seed_folder(&self, name: &str, parent: Option<FolderId>, owner: &str) -> Folder {
        let data = NewFolder {
            name: name.to_string(),
            parent,
            owner_id: owner.to_string(),
        };
        FolderStore::create(&self.store, &data)
            .await
            .expect("Failed to seed folder")
    }

    /// Number of folder rows in the store
    pub async fn folder_count(&self) -> u64 {
        FolderStore::count(&self.store)
            .await
            .expect("Failed to count folders")
    }

    /// Onboard `user_id` over HTTP and return the root folder id
    pub async fn onboard(&self, user_id: &str) -> FolderId {
        let token = self.token_for(user_id);
        let response = self.request("POST", "/api/onboard", None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.body["data"]["rootFolderId"]
            .as_i64()
            .expect("Missing rootFolderId")
    }

    /// Send a request through the router
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Names of the objects in a JSON array at `pointer`
    pub fn names_at(&self, pointer: &str) -> Vec<String> {
        self.body
            .pointer(pointer)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(|i| i["name"].as_str().map(String::from))
                    .collect()
            })
            .unwrap_or_default()
    }
}
