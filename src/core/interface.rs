use crate::config::toml_config::{TomlConfig, DEFAULT_INTERFACE_NAME};
use crate::utils::error::{ArcadeError, Result};
use crate::{hello, VERSION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot reported after a successful initialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterfaceStatus {
    pub name: String,
    pub version: String,
    pub message: String,
    pub initialized_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ArcadeInterface {
    name: String,
    initialized_at: Option<DateTime<Utc>>,
}

impl Default for ArcadeInterface {
    fn default() -> Self {
        Self::new(DEFAULT_INTERFACE_NAME)
    }
}

impl ArcadeInterface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            initialized_at: None,
        }
    }

    pub fn from_config(config: &TomlConfig) -> Self {
        Self::new(config.interface.name.clone())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized_at.is_some()
    }

    /// Marks the interface initialized. A second call fails.
    pub fn initialize(&mut self) -> Result<InterfaceStatus> {
        if self.is_initialized() {
            tracing::warn!("Interface '{}' initialized twice", self.name);
            return Err(ArcadeError::AlreadyInitialized {
                name: self.name.clone(),
            });
        }

        let now = Utc::now();
        self.initialized_at = Some(now);
        tracing::info!("{} ({} v{})", hello(), self.name, VERSION);
        tracing::debug!("Initialized at {}", now.to_rfc3339());

        Ok(self.snapshot(now))
    }

    pub fn status(&self) -> Option<InterfaceStatus> {
        self.initialized_at.map(|at| self.snapshot(at))
    }

    fn snapshot(&self, initialized_at: DateTime<Utc>) -> InterfaceStatus {
        InterfaceStatus {
            name: self.name.clone(),
            version: VERSION.to_string(),
            message: hello().to_string(),
            initialized_at,
        }
    }
}
