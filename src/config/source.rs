//! Provider and store-backend configuration structures.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::infra::store::json::DEFAULT_SECTION;

fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}

/// Store backend selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackendConfig {
    /// In-memory store for development/testing.
    InMemory,
    /// JSON document on disk.
    JsonFile {
        /// Path of the document.
        path: PathBuf,
        /// Name of the schedule section inside the document.
        #[serde(default = "default_section")]
        section: String,
    },
}

/// Root provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Store backend selection.
    pub backend: StoreBackendConfig,
}

impl ProviderConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns a description of the first invalid value.
    pub fn validate(&self) -> Result<(), String> {
        match &self.backend {
            StoreBackendConfig::InMemory => Ok(()),
            StoreBackendConfig::JsonFile { path, section } => {
                if path.as_os_str().is_empty() {
                    return Err("json_file backend requires a non-empty path".into());
                }
                if section.is_empty() {
                    return Err("json_file backend requires a non-empty section name".into());
                }
                Ok(())
            }
        }
    }

    /// Parse provider configuration from a JSON string and validate.
    ///
    /// # Errors
    ///
    /// Returns a parse or validation error description.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }
}
