//! Store persistence as pretty JSON.

use super::MemoryStore;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Store file errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error on store file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("store file `{0}` is not valid JSON")]
    Json(PathBuf, #[source] serde_json::Error),
}

/// Check if file content is the same as new content
fn file_content_matches(path: &Path, content: &str) -> bool {
    path.exists() && fs::read_to_string(path).is_ok_and(|existing| existing == content)
}

/// Persist the store to `path`, creating parent directories.
pub fn persist_store(store: &MemoryStore, path: &Path) -> Result<(), StoreError> {
    let io_err = |e| StoreError::Io(path.to_path_buf(), e);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let json = serde_json::to_string_pretty(store)
        .map_err(|e| StoreError::Json(path.to_path_buf(), e))?;

    if file_content_matches(path, &json) {
        crate::debug!("store"; "unchanged, skipping write");
        return Ok(());
    }

    fs::write(path, &json).map_err(io_err)?;
    crate::debug!("store"; "saved {} options, {} metadata entries",
        store.options().count(), store.meta_count());
    Ok(())
}

/// Restore the store from `path`. A missing file yields an empty store.
pub fn restore_store(path: &Path) -> Result<MemoryStore, StoreError> {
    if !path.exists() {
        return Ok(MemoryStore::new());
    }

    let json = fs::read_to_string(path).map_err(|e| StoreError::Io(path.to_path_buf(), e))?;
    let store: MemoryStore =
        serde_json::from_str(&json).map_err(|e| StoreError::Json(path.to_path_buf(), e))?;

    crate::debug!("store"; "restored {} options, {} metadata entries",
        store.options().count(), store.meta_count());
    Ok(store)
}
