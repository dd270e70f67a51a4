//! Key-value persistence backed by a single JSON file.
//!
//! Settings are stored key-by-key (one scalar per key) and alarms as one
//! JSON blob per alarm, all inside a flat JSON object. A missing file or a
//! file that fails to parse degrades to an empty store - every consumer has
//! a documented default, so corrupt storage is recovered silently rather
//! than surfaced to the user.
//!
//! Saving is explicit: mutators only touch the in-memory map, and callers
//! decide when to flush (the settings pages save on every edit, the alarm
//! editor saves on confirmation).

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde_json::{Map, Value};

/// File-backed string-keyed store.
pub struct KvStore {
    path: PathBuf,
    data: Map<String, Value>,
}

impl KvStore {
    /// Open the store at `path`, loading existing contents if present.
    ///
    /// Missing or unreadable/corrupt files yield an empty store; the next
    /// `save` recreates the file.
    pub fn open(path: PathBuf) -> Self {
        let data = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<Value>(&contents) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    log::warn!("Discarding corrupt store at {}", path.display());
                    Map::new()
                }
            },
            Err(_) => Map::new(),
        };
        Self { path, data }
    }

    /// In-memory store that is never written to disk. Used in tests and as
    /// a fallback when no writable location exists.
    pub fn ephemeral() -> Self {
        Self { path: PathBuf::new(), data: Map::new() }
    }

    /// Read a string value, if the key holds one.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(Value::as_str)
    }

    /// Store a string value under `key`.
    pub fn set_str(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_owned(), Value::String(value.to_owned()));
    }

    /// Read a JSON blob and decode it, if the key holds a decodable value.
    pub fn get_blob<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.data.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(decoded) => Some(decoded),
            Err(err) => {
                log::warn!("Discarding corrupt blob under {key:?}: {err}");
                None
            }
        }
    }

    /// Encode `value` and store it as a JSON blob under `key`.
    pub fn set_blob<T: serde::Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_value(value).with_context(|| format!("Failed to encode {key:?}"))?;
        self.data.insert(key.to_owned(), encoded);
        Ok(())
    }

    /// Flush the store to disk.
    pub fn save(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Ok(());
        }
        let serialized = serde_json::to_string_pretty(&Value::Object(self.data.clone()))?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write store to {}", self.path.display()))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
