//! Type definitions shared across the add-on crates

mod runtime_config;

pub use runtime_config::{
    GitHubConfig, NetworkConfig, PluginConfig, RuntimeConfig, ServicesConfig, StorageConfig,
};
