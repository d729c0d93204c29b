//! # Schedule Ingest
//!
//! A configuration-ingestion layer for task schedulers.
//!
//! This library sits between a backing configuration store (a file, a
//! database, a remote config service) and a scheduling engine. It reads a
//! declarative list of schedule definitions, normalizes each definition into
//! a uniform, schema-agnostic settings record, and exposes the result through
//! a provider that supports reload-on-demand and staleness detection.
//!
//! ## Core Problem Solved
//!
//! Scheduling engines should not be hard-wired to the shape of one
//! configuration schema:
//!
//! - **Extensible field sets**: new schedule types introduce new optional
//!   fields; consumers must not need compile-time knowledge of every field
//! - **Hot reload**: operators edit schedules while the scheduler runs; the
//!   engine polls for staleness and refreshes on demand
//! - **Snapshot isolation**: a refresh must never mutate a snapshot an
//!   earlier caller is still holding
//! - **Fail loudly**: running with no schedules when schedules were expected
//!   is worse than failing the load
//!
//! ## Key Features
//!
//! - **Settings Normalizer**: converts a raw [`core::ScheduleRecord`] into a
//!   case-insensitive field map, dropping absent/empty fields
//! - **Pluggable Stores**: backends implement only the small
//!   [`core::ScheduleStore`] adapter trait, not the normalization pipeline
//! - **Staleness Tokens**: adapters report an opaque version; the provider
//!   compares tokens instead of assuming a detection mechanism
//! - **Immutable Snapshots**: every load yields a fresh
//!   [`core::ScheduleSection`] behind an `Arc`
//!
//! ## Example
//!
//! ```rust,ignore
//! use schedule_ingest::core::ScheduleProvider;
//! use schedule_ingest::infra::store::memory::InMemoryStore;
//!
//! let provider = ScheduleProvider::new(InMemoryStore::new());
//!
//! // First load reads the store; later calls reuse the cached snapshot.
//! let section = provider.get_configurations(false)?;
//! for settings in section.iter() {
//!     println!("{} -> {:?}", settings.name(), settings.get("timeOfDay"));
//! }
//!
//! // Cooperative polling: refresh only when the store changed.
//! if provider.schedules_are_stale()? {
//!     let fresh = provider.get_configurations(true)?;
//! }
//! ```
//!
//! For complete examples, see:
//! - `tests/provider_lifecycle_test.rs` - Full integration tests

#![deny(warnings)]
#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core data model, normalizer, and provider abstractions.
pub mod core;
/// Configuration models selecting a store backend.
pub mod config;
/// Builders to construct providers from configuration.
pub mod builders;
/// Infrastructure adapters for backing stores.
pub mod infra;
/// Shared utilities.
pub mod util;
