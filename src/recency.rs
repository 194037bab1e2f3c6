// SPDX-License-Identifier: MIT OR Apache-2.0

//! Persisted map from result identity to last-opened timestamp.
//!
//! The store is owned explicitly and passed into the aggregator by the
//! caller; load and flush are explicit lifecycle steps rather than ambient
//! module state. Append/trim only, single logical writer.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::StoreError;
use crate::ranking::now_ms;

/// `result id -> epoch-ms of last open`.
pub type RecencyMap = HashMap<String, i64>;

/// Entries kept after a trim; the newest win.
pub const MAX_RECENCY_ENTRIES: usize = 400;

#[derive(Debug, Default)]
pub struct RecencyStore {
    map: RecencyMap,
    path: Option<PathBuf>,
    dirty: bool,
}

impl RecencyStore {
    /// A store with no backing file; `flush` is a no-op.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Load the persisted blob at `path`. A missing or unreadable file and
    /// any malformed entry degrade to "never opened"; loading never fails.
    pub fn load(path: &Path) -> Self {
        let mut store = Self {
            path: Some(path.to_path_buf()),
            ..Self::default()
        };
        let Ok(raw) = fs::read_to_string(path) else {
            return store;
        };
        let Ok(parsed) = serde_json::from_str::<serde_json::Value>(&raw) else {
            tracing::warn!(path = %path.display(), "discarding unreadable recency store");
            return store;
        };
        let Some(entries) = parsed.as_object() else {
            return store;
        };
        for (result_id, opened_at) in entries {
            if let Some(timestamp) = opened_at.as_i64() {
                store.map.insert(result_id.clone(), timestamp);
            }
        }
        store
    }

    /// Stamp `result_id` as opened now and trim to the newest
    /// [`MAX_RECENCY_ENTRIES`]. Blank ids are ignored.
    pub fn record_open(&mut self, result_id: &str) {
        self.record_open_at(result_id, now_ms());
    }

    pub fn record_open_at(&mut self, result_id: &str, opened_at_ms: i64) {
        if result_id.is_empty() {
            return;
        }
        self.map.insert(result_id.to_string(), opened_at_ms);
        self.trim();
        self.dirty = true;
    }

    fn trim(&mut self) {
        if self.map.len() <= MAX_RECENCY_ENTRIES {
            return;
        }
        let mut entries: Vec<(String, i64)> = self.map.drain().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(MAX_RECENCY_ENTRIES);
        self.map = entries.into_iter().collect();
    }

    /// The current map, for passing into the aggregator or comparator.
    pub fn map(&self) -> &RecencyMap {
        &self.map
    }

    /// Persist pending writes to the backing file, if any.
    pub fn flush(&mut self) -> Result<(), StoreError> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        if !self.dirty {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: path.to_path_buf(),
                source,
            })?;
        }
        let blob = serde_json::to_string_pretty(&self.map)?;
        fs::write(path, blob).map_err(|source| StoreError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        self.dirty = false;
        Ok(())
    }
}

/// Default location of the persisted store
/// (`<data dir>/unisearch/recency.json`).
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("unisearch").join("recency.json"))
        .unwrap_or_else(|| PathBuf::from(".unisearch-recency.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn trims_to_the_newest_entries() {
        let mut store = RecencyStore::in_memory();
        for n in 0..(MAX_RECENCY_ENTRIES as i64 + 50) {
            store.record_open_at(&format!("result-{n}"), n);
        }
        assert_eq!(store.map().len(), MAX_RECENCY_ENTRIES);
        assert!(store.map().contains_key("result-449"));
        assert!(!store.map().contains_key("result-0"));
    }

    #[test]
    fn blank_ids_are_ignored() {
        let mut store = RecencyStore::in_memory();
        store.record_open("");
        assert!(store.map().is_empty());
    }

    #[test]
    fn round_trips_through_the_backing_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("recency.json");

        let mut store = RecencyStore::load(&path);
        store.record_open_at("file:w-1:src/main.rs", 1_234);
        store.flush().expect("flush");

        let reloaded = RecencyStore::load(&path);
        assert_eq!(reloaded.map().get("file:w-1:src/main.rs"), Some(&1_234));
    }

    #[test]
    fn malformed_entries_are_dropped_on_load() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("recency.json");
        fs::write(
            &path,
            r#"{"good": 42, "bad": "not-a-number", "worse": {"nested": true}}"#,
        )
        .expect("write blob");

        let store = RecencyStore::load(&path);
        assert_eq!(store.map().len(), 1);
        assert_eq!(store.map().get("good"), Some(&42));
    }

    #[test]
    fn unreadable_blob_loads_empty() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("recency.json");
        fs::write(&path, "not json at all").expect("write blob");

        let store = RecencyStore::load(&path);
        assert!(store.map().is_empty());
    }

    #[test]
    fn missing_file_loads_empty() {
        let store = RecencyStore::load(Path::new("/nonexistent/recency.json"));
        assert!(store.map().is_empty());
    }
}
