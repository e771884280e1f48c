//! Store configuration
//!
//! Settings can be built in code or loaded from a TOML document:
//!
//! ```toml
//! dispatch = "serialized"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ConfigError, Result};

/// How `notify` holds the store lock while handlers run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchPolicy {
    /// Snapshot matches under the lock, run handlers unlocked, and remove
    /// single-fire listeners in a separately locked step. Handlers may call
    /// back into the store.
    #[default]
    Snapshot,
    /// Hold the lock for the whole notify call. Handlers must not call back
    /// into the store.
    Serialized,
}

impl std::fmt::Display for DispatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Snapshot => write!(f, "snapshot"),
            Self::Serialized => write!(f, "serialized"),
        }
    }
}

/// Configuration for the listener store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Lock discipline used while dispatching.
    pub dispatch: DispatchPolicy,
}

impl StoreConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e).into())
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded store config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
