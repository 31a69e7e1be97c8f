// Application state module
// Shared by every connection task: configuration, the store, credential checks

use std::sync::Arc;
use tokio::sync::RwLock;

use super::types::Config;
use crate::auth::{CredentialVerifier, StaticCredentials};
use crate::store::{Catalog, Store};

/// Application state
pub struct AppState {
    pub config: Config,
    pub store: RwLock<Store>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Create `AppState` with credentials taken from `[auth]`
    pub fn new(config: &Config, catalog: Catalog) -> Self {
        Self::with_credentials(
            config,
            catalog,
            Arc::new(StaticCredentials::from_config(&config.auth)),
        )
    }

    pub fn with_credentials(
        config: &Config,
        catalog: Catalog,
        credentials: Arc<dyn CredentialVerifier>,
    ) -> Self {
        Self {
            config: config.clone(),
            store: RwLock::new(Store::new(catalog)),
            credentials,
        }
    }
}
