//! Core data model, normalizer, and provider abstractions.

pub mod error;
pub mod record;
pub mod collection;
pub mod settings;
pub mod normalize;
pub mod provider;

pub use error::{AppResult, ConfigError};
pub use record::ScheduleRecord;
pub use collection::ScheduleCollection;
pub use settings::{ScheduleSection, ScheduleSettings};
pub use normalize::{build_section, normalize_record};
pub use provider::{ScheduleProvider, ScheduleStore, StoreVersion};
