//! Infrastructure adapters for backing stores.

pub mod store;
