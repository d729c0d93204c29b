//! Error types for configuration-ingestion operations.

use thiserror::Error;

/// Errors produced by the schedule configuration layer.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The backing store has no schedule section.
    #[error("schedule section missing: {0}")]
    SectionMissing(String),
    /// A schedule with the same name already exists in the collection.
    #[error("duplicate schedule name: {0}")]
    DuplicateName(String),
    /// The operation is not supported by the active store adapter.
    #[error("operation unavailable: {0}")]
    Unsupported(&'static str),
    /// Backend-specific read or parse failure with context.
    #[error("store error: {0}")]
    Store(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
