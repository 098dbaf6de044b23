//! Store configuration.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::store::{DEFAULT_EVENT_CAPACITY, MemoryStore, PrefixStore, Result, StoreError};

/// Storage backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process-local map, lost on restart.
    #[default]
    Memory,
}

/// Configuration for opening a prefix store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: Backend,
    /// Number of events buffered per subscriber before lagging ones miss events.
    pub event_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            event_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

impl StoreConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.event_capacity == 0 {
            return Err(StoreError::InvalidArgument(
                "event_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Open the store described by `config`.
pub fn open_store(config: &StoreConfig) -> Result<Arc<dyn PrefixStore>> {
    config.validate()?;

    let store: Arc<dyn PrefixStore> = match config.backend {
        Backend::Memory => Arc::new(MemoryStore::with_event_capacity(config.event_capacity)?),
    };

    info!(
        "Opened {} prefix store (event capacity {})",
        store.name(),
        config.event_capacity
    );
    Ok(store)
}
