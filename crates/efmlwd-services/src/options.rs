//! Key/value option stores
//!
//! The host keeps its settings as named options holding arbitrary values.
//! Presets and registration only ever need get, set and delete.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{Result, ServiceError};

/// Named option storage
pub trait OptionStore: Send {
    /// Current value of an option
    fn get(&self, key: &str) -> Option<Value>;

    /// Overwrite an option
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Remove an option, returning whether it existed
    fn delete(&mut self, key: &str) -> Result<bool>;
}

/// In-memory option store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryOptionStore {
    values: BTreeMap<String, Value>,
}

impl MemoryOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with one option preset
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.values.insert(key.into(), value);
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl OptionStore for MemoryOptionStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        Ok(self.values.remove(key).is_some())
    }
}

/// Option store backed by a JSON object on disk
///
/// Every write rewrites the whole file through a temporary file in the same
/// directory, so readers never see a half-written store.
#[derive(Debug)]
pub struct JsonFileOptionStore {
    path: Utf8PathBuf,
    values: Map<String, Value>,
}

impl JsonFileOptionStore {
    /// Open a store; a missing or blank file is an empty store
    pub fn open(path: impl Into<Utf8PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            debug!("No option store at {}, starting empty", path);
            return Ok(Self {
                path,
                values: Map::new(),
            });
        }

        let content = fs::read_to_string(&path)?;
        if content.trim().is_empty() {
            return Ok(Self {
                path,
                values: Map::new(),
            });
        }

        let values = match serde_json::from_str::<Value>(&content)? {
            Value::Object(map) => map,
            _ => return Err(ServiceError::invalid_store(path.as_str())),
        };

        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// All options currently held
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    fn save(&self, key: &str) -> Result<()> {
        let parent = self
            .path
            .parent()
            .filter(|p| !p.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        fs::create_dir_all(parent)?;

        let content = serde_json::to_string_pretty(&self.values)?;

        let mut temp = NamedTempFile::new_in(parent)?;
        temp.write_all(content.as_bytes())?;
        temp.flush()?;
        temp.persist(&self.path)
            .map_err(|e| ServiceError::write_failed(key, e.error.to_string()))?;

        debug!("Wrote option {} to {}", key, self.path);
        Ok(())
    }
}

impl OptionStore for JsonFileOptionStore {
    fn get(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.save(key)
    }

    fn delete(&mut self, key: &str) -> Result<bool> {
        if self.values.remove(key).is_none() {
            return Ok(false);
        }
        self.save(key)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap()
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryOptionStore::new().with("a", json!(1));
        assert_eq!(store.get("a"), Some(json!(1)));
        assert_eq!(store.get("b"), None);

        store.set("b", json!(["x"])).unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.delete("a").unwrap());
        assert!(!store.delete("a").unwrap());
    }

    #[test]
    fn test_file_store_missing_is_empty() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonFileOptionStore::open(temp_path(&dir, "options.json")).unwrap();
        assert!(store.values().is_empty());
    }

    #[test]
    fn test_file_store_persists_writes() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = temp_path(&dir, "nested/options.json");

        let mut store = JsonFileOptionStore::open(path.clone()).unwrap();
        store.set("eml_disable_plugin_hints", json!(1)).unwrap();
        store.set("keep", json!("me")).unwrap();
        assert!(store.delete("keep").unwrap());

        let reopened = JsonFileOptionStore::open(path).unwrap();
        assert_eq!(reopened.get("eml_disable_plugin_hints"), Some(json!(1)));
        assert_eq!(reopened.get("keep"), None);
    }

    #[test]
    fn test_file_store_rejects_non_object() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = temp_path(&dir, "options.json");
        fs::write(&path, "[1, 2]").unwrap();

        let result = JsonFileOptionStore::open(path);
        assert!(matches!(result, Err(ServiceError::InvalidStore { .. })));
    }

    #[test]
    fn test_file_store_rejects_garbage() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = temp_path(&dir, "options.json");
        fs::write(&path, "{ nope").unwrap();

        assert!(matches!(
            JsonFileOptionStore::open(path),
            Err(ServiceError::Json(_))
        ));
    }
}
