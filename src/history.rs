//! Persisted recent-search history
//!
//! A plain JSON string array on disk, newest first, capped at
//! `MAX_RECENT_SEARCHES`. A query that is already present is left exactly
//! where it is; repeating a search does not promote it.

use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Maximum number of recent searches kept
pub const MAX_RECENT_SEARCHES: usize = 5;

/// Errors from reading or writing the history file
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not read recent searches: {0}")]
    Read(#[source] std::io::Error),

    #[error("recent searches file is not valid JSON: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("could not save recent searches: {0}")]
    Write(#[source] std::io::Error),
}

/// Recent-search list backed by a JSON file
#[derive(Debug)]
pub struct HistoryStore {
    path: PathBuf,
    entries: Vec<String>,
}

impl HistoryStore {
    /// Load history from `path`
    ///
    /// A missing file is an empty history. An unreadable or corrupt file is
    /// an error; callers are expected to fall back to `empty` and warn the
    /// user rather than abort.
    pub fn open(path: PathBuf) -> Result<Self, HistoryError> {
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => {
                let mut entries: Vec<String> =
                    serde_json::from_str(&raw).map_err(HistoryError::Corrupt)?;
                entries.truncate(MAX_RECENT_SEARCHES);
                entries
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(HistoryError::Read(e)),
        };

        Ok(Self { path, entries })
    }

    /// An empty history that will persist to `path` on the next record
    pub fn empty(path: PathBuf) -> Self {
        Self {
            path,
            entries: Vec::new(),
        }
    }

    /// Record a successful search
    ///
    /// A query already in the list is a no-op, position unchanged. A new
    /// query is prepended; the oldest entry falls off past
    /// `MAX_RECENT_SEARCHES`.
    pub fn record(&mut self, query: &str) -> Result<(), HistoryError> {
        if self.entries.iter().any(|e| e == query) {
            return Ok(());
        }

        self.entries.insert(0, query.to_string());
        self.entries.truncate(MAX_RECENT_SEARCHES);
        self.persist()
    }

    /// Recent searches, most recent first
    pub fn list(&self) -> &[String] {
        &self.entries
    }

    fn persist(&self) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(HistoryError::Write)?;
        }

        let json = serde_json::to_string(&self.entries)
            .expect("history entries always serialize");

        // Write-then-rename so a crash mid-write can't corrupt the file
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(HistoryError::Write)?;
        fs::rename(&tmp, &self.path).map_err(HistoryError::Write)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> HistoryStore {
        HistoryStore::open(dir.path().join("recent_searches.json")).unwrap()
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_record_prepends() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.record("Dune").unwrap();
        store.record("Matrix").unwrap();

        assert_eq!(store.list(), ["Matrix", "Dune"]);
    }

    #[test]
    fn test_record_duplicate_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.record("Dune").unwrap();
        store.record("Matrix").unwrap();
        store.record("Dune").unwrap();

        // Not duplicated, and not promoted to the front either
        assert_eq!(store.list(), ["Matrix", "Dune"]);
    }

    #[test]
    fn test_record_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.record("dune").unwrap();
        store.record("Dune").unwrap();

        assert_eq!(store.list(), ["Dune", "dune"]);
    }

    #[test]
    fn test_sixth_entry_evicts_oldest() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        for q in ["a", "b", "c", "d", "e", "f"] {
            store.record(q).unwrap();
        }

        assert_eq!(store.list().len(), MAX_RECENT_SEARCHES);
        assert_eq!(store.list(), ["f", "e", "d", "c", "b"]);
    }

    #[test]
    fn test_roundtrip_through_disk() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recent_searches.json");

        {
            let mut store = HistoryStore::open(path.clone()).unwrap();
            store.record("Dune").unwrap();
            store.record("Matrix").unwrap();
        }

        let reopened = HistoryStore::open(path).unwrap();
        assert_eq!(reopened.list(), ["Matrix", "Dune"]);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recent_searches.json");
        fs::write(&path, "not json at all").unwrap();

        let err = HistoryStore::open(path).unwrap_err();
        assert!(matches!(err, HistoryError::Corrupt(_)));
    }

    #[test]
    fn test_oversized_file_is_clamped_on_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recent_searches.json");
        fs::write(&path, r#"["a","b","c","d","e","f","g"]"#).unwrap();

        let store = HistoryStore::open(path).unwrap();
        assert_eq!(store.list().len(), MAX_RECENT_SEARCHES);
    }
}
