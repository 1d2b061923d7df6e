use std::sync::Arc;

use crate::config::AppConfig;
use crate::roster::{Roster, RosterError};
use crate::storage::StorageConfig;

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<StorageConfig>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            storage: Arc::new(StorageConfig::new(config.data_dir.clone())),
            config: Arc::new(config),
        }
    }

    /// Read the roster fresh from disk.
    pub fn load_roster(&self) -> Result<Roster, RosterError> {
        Roster::load(&self.storage)
    }
}
