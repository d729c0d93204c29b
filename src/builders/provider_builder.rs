//! Build a schedule provider from configuration.

use crate::config::{ProviderConfig, StoreBackendConfig};
use crate::core::{ConfigError, ScheduleProvider, ScheduleStore};
use crate::infra::store::{InMemoryStore, JsonFileStore};

/// Construct a provider with the configured store backend.
///
/// # Errors
///
/// [`ConfigError::Store`] when the configuration fails validation.
pub fn build_provider(
    cfg: &ProviderConfig,
) -> Result<ScheduleProvider<Box<dyn ScheduleStore>>, ConfigError> {
    cfg.validate()
        .map_err(|e| ConfigError::Store(format!("config invalid: {e}")))?;

    let store: Box<dyn ScheduleStore> = match &cfg.backend {
        StoreBackendConfig::InMemory => Box::new(InMemoryStore::new()),
        StoreBackendConfig::JsonFile { path, section } => {
            Box::new(JsonFileStore::new(path.clone()).with_section(section.clone()))
        }
    };
    Ok(ScheduleProvider::new(store))
}
