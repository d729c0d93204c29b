//! Configuration models selecting a store backend.

pub mod source;

pub use source::{ProviderConfig, StoreBackendConfig};
