//! Builders to construct providers from configuration.

pub mod provider_builder;

pub use provider_builder::build_provider;
