//! The host's update cache object and a JSON file store for it

use camino::{Utf8Path, Utf8PathBuf};
use efmlwd_core::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::descriptor::UpdateDescriptor;

/// Update cache as the host stores it between checks
///
/// Only `response` and `no_update` are interpreted. Every other field
/// (`last_checked`, `checked`, `translations`, ...) and every entry that
/// belongs to another plugin is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateState {
    /// Plugins with a pending update, keyed by plugin basename
    #[serde(default)]
    pub response: BTreeMap<String, Value>,

    /// Plugins known to be current, keyed by plugin basename
    #[serde(default)]
    pub no_update: BTreeMap<String, Value>,

    /// Host-owned fields
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl UpdateState {
    /// Whether a non-empty pending update entry exists for the plugin
    pub fn has_pending(&self, plugin_id: &str) -> bool {
        self.response
            .get(plugin_id)
            .is_some_and(|entry| !is_empty_entry(entry))
    }

    /// The pending update entry for the plugin, if it is a descriptor
    pub fn pending(&self, plugin_id: &str) -> Option<UpdateDescriptor> {
        self.response
            .get(plugin_id)
            .and_then(|entry| serde_json::from_value(entry.clone()).ok())
    }

    /// The "already current" entry for the plugin, if it is a descriptor
    pub fn current(&self, plugin_id: &str) -> Option<UpdateDescriptor> {
        self.no_update
            .get(plugin_id)
            .and_then(|entry| serde_json::from_value(entry.clone()).ok())
    }

    /// Record an available update
    pub fn set_available(&mut self, plugin_id: &str, descriptor: &UpdateDescriptor) {
        self.response
            .insert(plugin_id.to_string(), descriptor_value(descriptor));
    }

    /// Record that the installed version is current
    pub fn set_up_to_date(&mut self, plugin_id: &str, descriptor: &UpdateDescriptor) {
        self.no_update
            .insert(plugin_id.to_string(), descriptor_value(descriptor));
    }

    /// Unix timestamp of the last check, as stamped by the host
    pub fn last_checked(&self) -> Option<i64> {
        self.extra.get("last_checked").and_then(Value::as_i64)
    }

    /// Stamp the time of the last check
    pub fn touch(&mut self, timestamp: i64) {
        self.extra
            .insert("last_checked".to_string(), Value::from(timestamp));
    }
}

fn descriptor_value(descriptor: &UpdateDescriptor) -> Value {
    // A struct of strings and maps always serialises
    serde_json::to_value(descriptor).unwrap_or(Value::Null)
}

/// Emptiness as the host's update screen judges an entry
fn is_empty_entry(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

/// JSON file holding an [`UpdateState`]
pub struct StateFile {
    path: Utf8PathBuf,
}

impl StateFile {
    /// Create a store for the given path
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the state file
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Load the state; a missing file is an empty state
    pub fn load(&self) -> Result<UpdateState> {
        if !self.path.exists() {
            debug!("No update state at {}, starting empty", self.path);
            return Ok(UpdateState::default());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(UpdateState::default());
        }

        let state = serde_json::from_str(&content)?;
        Ok(state)
    }

    /// Persist the state atomically (temp file in the same directory, then rename)
    pub fn save(&self, state: &UpdateState) -> Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        fs::create_dir_all(parent)?;

        let content = serde_json::to_string_pretty(state)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(content.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path).map_err(|e| Error::Io(e.error))?;

        debug!("Saved update state to {}", self.path);
        Ok(())
    }
}
