//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use drive_auth::jwt::JwtDecoder;
use drive_core::config::AppConfig;
use drive_database::StoreManager;
use drive_service::{BrowseService, DriveMutations, DriveQueries};

/// Shared application state, cloned into every handler via `State`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Folder and file stores.
    pub stores: StoreManager,
    /// Read-side tree access.
    pub queries: Arc<DriveQueries>,
    /// Folder/file creation and onboarding.
    pub mutations: Arc<DriveMutations>,
    /// Folder page assembly.
    pub browse: Arc<BrowseService>,
    /// Bearer token validation.
    pub jwt_decoder: Arc<JwtDecoder>,
}

impl AppState {
    /// Wires the services on top of `stores`.
    pub fn new(config: AppConfig, stores: StoreManager) -> Self {
        let queries = DriveQueries::new(stores.folders(), stores.files());
        let mutations = DriveMutations::new(stores.folders(), stores.files());
        let browse = BrowseService::new(queries.clone());
        let jwt_decoder = JwtDecoder::new(&config.auth);

        Self {
            config: Arc::new(config),
            stores,
            queries: Arc::new(queries),
            mutations: Arc::new(mutations),
            browse: Arc::new(browse),
            jwt_decoder: Arc::new(jwt_decoder),
        }
    }
}
