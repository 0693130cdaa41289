//! Hierarchical configuration loader with precedence
//!
//! Loads configuration from multiple sources with the following precedence (low to high):
//! 1. Embedded defaults (built into binary)
//! 2. Global runtime config (~/.efmlwd/runtime.yaml)
//! 3. Environment variables (EFMLWD_* prefix)
//! 4. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::types::RuntimeConfig;
use camino::{Utf8Path, Utf8PathBuf};
use rust_embed::RustEmbed;
use serde_yaml_ng::Value;
use std::env;
use std::fs;
use tracing::debug;

/// Embedded configuration files
#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/../../embedded/config/"]
#[prefix = ""]
struct EmbeddedConfigs;

const RUNTIME_DEFAULTS: &str = "runtime-defaults.yaml";
const RUNTIME_FILE: &str = "runtime.yaml";

/// Configuration hierarchy loader
pub struct HierarchicalConfigLoader {
    /// Base directory for configuration files
    config_dir: Utf8PathBuf,
}

impl HierarchicalConfigLoader {
    /// Create a new hierarchical config loader rooted at ~/.efmlwd
    pub fn new() -> Result<Self> {
        let config_dir = Self::get_config_dir()?;
        Ok(Self { config_dir })
    }

    /// Create a loader with a custom config directory
    pub fn with_dir(config_dir: Utf8PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the standard config directory (~/.efmlwd)
    fn get_config_dir() -> Result<Utf8PathBuf> {
        let home = crate::utils::get_home_dir()?;
        let home = Utf8PathBuf::from_path_buf(home)
            .map_err(|p| Error::invalid_config(format!("Home directory is not UTF-8: {:?}", p)))?;
        Ok(home.join(".efmlwd"))
    }

    /// Load runtime configuration with hierarchical precedence
    pub fn load_runtime_config(&self) -> Result<RuntimeConfig> {
        let mut merged = Self::load_embedded_value(RUNTIME_DEFAULTS)?;

        let runtime_config_path = self.config_dir.join(RUNTIME_FILE);
        if runtime_config_path.exists() {
            debug!("Merging runtime config from {}", runtime_config_path);
            let overlay = self.load_yaml_file(&runtime_config_path)?;
            Self::merge_values(&mut merged, overlay);
        }

        let config: RuntimeConfig = serde_yaml_ng::from_value(merged)
            .map_err(|e| Error::invalid_config(format!("Failed to parse runtime config: {}", e)))?;

        let config = self.apply_env_overrides(config)?;
        config.validate()?;

        Ok(config)
    }

    /// Load an embedded configuration file as a raw YAML value
    fn load_embedded_value(filename: &str) -> Result<Value> {
        let embedded_file = EmbeddedConfigs::get(filename).ok_or_else(|| {
            Error::config_not_found(format!("Embedded config not found: {}", filename))
        })?;

        let content = std::str::from_utf8(&embedded_file.data).map_err(|_| {
            Error::invalid_config(format!("Invalid UTF-8 in embedded config: {}", filename))
        })?;

        serde_yaml_ng::from_str(content).map_err(|e| {
            Error::invalid_config(format!(
                "Failed to parse embedded config {}: {}",
                filename, e
            ))
        })
    }

    /// Load a YAML file as a raw value
    fn load_yaml_file(&self, path: &Utf8Path) -> Result<Value> {
        let content = fs::read_to_string(path)?;
        serde_yaml_ng::from_str(&content)
            .map_err(|e| Error::invalid_config(format!("Failed to parse {}: {}", path, e)))
    }

    /// Deep-merge two YAML values (mappings merge key by key, anything else is replaced)
    fn merge_values(base: &mut Value, overlay: Value) {
        match (base, overlay) {
            (Value::Mapping(base_map), Value::Mapping(overlay_map)) => {
                for (key, value) in overlay_map {
                    match base_map.get_mut(&key) {
                        Some(existing) => Self::merge_values(existing, value),
                        None => {
                            base_map.insert(key, value);
                        }
                    }
                }
            }
            // An empty file parses as null and must not wipe the defaults
            (_, Value::Null) => {}
            (base, overlay) => *base = overlay,
        }
    }

    /// Apply environment variable overrides to runtime config
    fn apply_env_overrides(&self, mut config: RuntimeConfig) -> Result<RuntimeConfig> {
        if let Ok(val) = env::var("EFMLWD_HTTP_TIMEOUT_SECS") {
            config.network.http_timeout_secs = val.parse().map_err(|_| {
                Error::invalid_config("EFMLWD_HTTP_TIMEOUT_SECS must be a valid number")
            })?;
        }

        if let Ok(val) = env::var("EFMLWD_GITHUB_REPO_OWNER") {
            config.github.repo_owner = val;
        }

        if let Ok(val) = env::var("EFMLWD_GITHUB_REPO_NAME") {
            config.github.repo_name = val;
        }

        if let Ok(val) = env::var("EFMLWD_GITHUB_API_URL") {
            config.github.api_url = val;
        }

        if let Ok(val) = env::var("EFMLWD_ASSET_BASE_URL") {
            config.plugin.asset_base_url = val;
        }

        if let Ok(val) = env::var("EFMLWD_PLUGIN_VERSION") {
            config.plugin.version = val;
        }

        if let Ok(val) = env::var("EFMLWD_DEVELOPMENT_MODE") {
            config.plugin.development_mode = val.parse().map_err(|_| {
                Error::invalid_config("EFMLWD_DEVELOPMENT_MODE must be true or false")
            })?;
        }

        if let Ok(val) = env::var("EFMLWD_STATE_FILE") {
            config.storage.state_file = Some(val);
        }

        if let Ok(val) = env::var("EFMLWD_OPTIONS_FILE") {
            config.storage.options_file = Some(val);
        }

        Ok(config)
    }

    /// Get the config directory path
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Resolve the update state file (configured path or ~/.efmlwd/update-state.json)
    pub fn state_file(&self, config: &RuntimeConfig) -> Utf8PathBuf {
        config
            .storage
            .state_file
            .as_deref()
            .map(Utf8PathBuf::from)
            .unwrap_or_else(|| self.config_dir.join("update-state.json"))
    }

    /// Resolve the option store file (configured path or ~/.efmlwd/options.json)
    pub fn options_file(&self, config: &RuntimeConfig) -> Utf8PathBuf {
        config
            .storage
            .options_file
            .as_deref()
            .map(Utf8PathBuf::from)
            .unwrap_or_else(|| self.config_dir.join("options.json"))
    }
}
