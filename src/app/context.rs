use std::sync::Arc;

use crate::app::error::{Result, SpindelError};
use crate::config::Config;
use crate::store::RecordStore;

pub struct AppContext {
    pub config: Config,
    pub store: Arc<RecordStore>,
}

impl AppContext {
    /// Build a context from the on-disk configuration.
    pub fn new() -> Result<Self> {
        let config = Config::load().map_err(|e| SpindelError::Config(e.to_string()))?;
        Ok(Self::with_config(config))
    }

    /// Build a context from an explicit configuration (used by tests).
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            store: Arc::new(RecordStore::new()),
        }
    }
}
