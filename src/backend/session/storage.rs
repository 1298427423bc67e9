//! Durable string key-value storage behind the session store.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use crate::utils::error::{Error, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

/// The subset of the browser `Storage` API the session store relies on.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Process-local storage. Nothing survives a restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Storage kept as a single JSON object on disk.
///
/// The file is reread on every access, so a write made by another process
/// is visible on the next read.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let json = fs::read_to_string(&self.path)?;
        if json.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&json)?)
    }

    /// Like `read_all`, but a corrupt file is dropped so writes can still land.
    fn read_for_write(&self) -> Result<Map<String, Value>> {
        match self.read_all() {
            Err(Error::Json(e)) => {
                log::warn!("Discarding corrupt {}: {e}", self.path.display());
                Ok(Map::new())
            }
            other => other,
        }
    }

    /// Writes next to the target and renames over it, so a crash mid-write
    /// leaves the previous file intact.
    fn write_all(&self, items: &Map<String, Value>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(items)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match self.read_all()?.get(key) {
            None => Ok(None),
            Some(Value::String(value)) => Ok(Some(value.clone())),
            Some(other) => Err(Error::Storage(format!(
                "value under `{key}` in {} is not a string: {other}",
                self.path.display()
            ))),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let mut items = self.read_for_write()?;
        items.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&items)
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let corrupt = matches!(self.read_all(), Err(Error::Json(_)));
        let mut items = self.read_for_write()?;
        if items.remove(key).is_some() || corrupt {
            self.write_all(&items)?;
        }
        Ok(())
    }
}

/// `window.localStorage`.
#[cfg(feature = "web")]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

#[cfg(feature = "web")]
impl BrowserStorage {
    /// Grabs `localStorage` from the current window.
    pub fn local() -> Result<Self> {
        let window = web_sys::window().ok_or("no window available")?;
        let storage = window
            .local_storage()
            .map_err(|e| Error::Storage(format!("localStorage unavailable: {e:?}")))?
            .ok_or("localStorage disabled")?;
        Ok(Self { storage })
    }
}

#[cfg(feature = "web")]
impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| Error::Storage(format!("getItem({key}) failed: {e:?}")))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("setItem({key}) failed: {e:?}")))
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| Error::Storage(format!("removeItem({key}) failed: {e:?}")))
    }
}
