//! Flat-file JSON persistence for the keyed stores.
//!
//! Whole-file rewrites with no locking and no atomic rename: the last
//! writer wins, and a crash between an in-memory mutation and the write
//! loses that mutation.

use serde::{Serialize, de::DeserializeOwned};
use std::{fs, io, path::Path};
use tracing::warn;

/// Reads and parses a JSON store. A missing file yields `None`; a file
/// that fails to parse is logged and treated the same way.
pub fn load_store<T: DeserializeOwned>(path: &Path) -> Option<T> {
    let raw = fs::read_to_string(path).ok()?;
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Failed to parse {}: {}", path.display(), e);
            None
        }
    }
}

/// Serializes the whole store pretty-printed and rewrites the file.
pub fn save_store<T: Serialize>(path: &Path, value: &T) -> io::Result<()> {
    let raw = serde_json::to_string_pretty(value)?;
    fs::write(path, raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn save_then_load_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favorites.json");

        let mut favorites: HashMap<String, Vec<u32>> = HashMap::new();
        favorites.insert("alice@example.com".to_string(), vec![2, 1]);

        save_store(&path, &favorites).unwrap();
        let loaded: HashMap<String, Vec<u32>> = load_store(&path).unwrap();
        assert_eq!(loaded, favorites);

        // Human-readable on disk
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains('\n'));
    }

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let loaded: Option<HashMap<String, Vec<u32>>> =
            load_store(&dir.path().join("nowhere.json"));
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, "{not json").unwrap();

        let loaded: Option<HashMap<String, Vec<u32>>> = load_store(&path);
        assert!(loaded.is_none());
    }
}
