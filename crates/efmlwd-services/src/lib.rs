//! Services side of the WebDav add-on
//!
//! Provides:
//! - The `Service` capability and the WebDav service itself
//! - Option stores the host's settings are read from and written to
//! - The "Use only WebDav" configuration preset
//! - Registration of the add-on with its parent plugin

pub mod addon;
pub mod error;
pub mod options;
pub mod preset;
pub mod service;

pub use addon::Addon;
pub use error::{Result, ServiceError};
pub use options::{JsonFileOptionStore, MemoryOptionStore, OptionStore};
pub use preset::{ConfigurationPreset, PresetReport, WebDavOnlyPreset};
pub use service::{services_from_config, NamedService, Service, WebDavService};
