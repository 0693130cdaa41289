//! CLI command implementations

pub mod addon;
pub mod check;
pub mod config;
pub mod preset;
pub mod version;

use anyhow::{Context, Result};
use efmlwd_core::{HierarchicalConfigLoader, RuntimeConfig};

/// Load the runtime configuration from the default locations
pub(crate) fn load_config() -> Result<(HierarchicalConfigLoader, RuntimeConfig)> {
    let loader = HierarchicalConfigLoader::new().context("Failed to locate configuration")?;
    let config = loader
        .load_runtime_config()
        .context("Failed to load runtime configuration")?;
    Ok((loader, config))
}
