//! # efmlwd-core
//!
//! Core library for the WebDav add-on providing:
//! - Runtime configuration types (network, GitHub feed, plugin identity, services)
//! - Hierarchical configuration loading (embedded defaults, global file, environment)
//! - Shared error types

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::HierarchicalConfigLoader;
pub use error::{Error, Result};
pub use types::RuntimeConfig;
pub use utils::get_home_dir;
