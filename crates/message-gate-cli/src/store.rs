// crates/message-gate-cli/src/store.rs
// ============================================================================
// Module: File Catalog Store
// Description: Filesystem-backed implementation of the catalog store trait.
// Purpose: Read catalog text and persist rewrites atomically.
// Dependencies: message-gate-core, tempfile
// ============================================================================

//! ## Overview
//! [`FileCatalogStore`] is the production [`CatalogStore`]: it reads catalog
//! text with ordinary filesystem calls and persists rewrites through a
//! temporary file in the target directory followed by an atomic rename, so a
//! crash mid-write never leaves a truncated catalog behind.
//!
//! ## Invariants
//! - A missing file loads as `None`, never as an error.
//! - Persisted text reaches the final path atomically or not at all.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::io::ErrorKind;
use std::io::Write;
use std::path::Path;

use message_gate_core::CatalogStore;
use message_gate_core::StoreError;
use tempfile::NamedTempFile;

// ============================================================================
// SECTION: Store
// ============================================================================

/// Filesystem-backed catalog store with atomic persistence.
#[derive(Debug, Default)]
pub struct FileCatalogStore;

impl FileCatalogStore {
    /// Constructs a new file-backed store.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl CatalogStore for FileCatalogStore {
    fn load(&self, path: &Path) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(StoreError::Read(format!("{}: {error}", path.display()))),
        }
    }

    fn persist(&mut self, path: &Path, text: &str) -> Result<(), StoreError> {
        let parent = path.parent().filter(|dir| !dir.as_os_str().is_empty());
        let write_error =
            |error: &dyn std::fmt::Display| StoreError::Write(format!("{}: {error}", path.display()));
        if let Some(dir) = parent {
            fs::create_dir_all(dir).map_err(|error| write_error(&error))?;
        }
        // Stage next to the target so the final rename stays on one device.
        let staging_dir = parent.unwrap_or_else(|| Path::new("."));
        let mut staged =
            NamedTempFile::new_in(staging_dir).map_err(|error| write_error(&error))?;
        staged
            .write_all(text.as_bytes())
            .map_err(|error| write_error(&error))?;
        staged.persist(path).map_err(|error| write_error(&error))?;
        Ok(())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use message_gate_core::CatalogStore;

    use super::FileCatalogStore;

    #[test]
    fn missing_file_loads_as_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileCatalogStore::new();
        let loaded = store.load(&dir.path().join("absent.en.yml")).expect("load");
        assert!(loaded.is_none());
    }

    #[test]
    fn persist_then_load_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("messages.en.yml");
        let mut store = FileCatalogStore::new();
        store.persist(&path, "greeting: Hi\n").expect("persist");
        let loaded = store.load(&path).expect("load");
        assert_eq!(loaded.as_deref(), Some("greeting: Hi\n"));
    }

    #[test]
    fn persist_overwrites_existing_content() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("messages.en.yml");
        let mut store = FileCatalogStore::new();
        store.persist(&path, "old: text\n").expect("persist old");
        store.persist(&path, "new: text\n").expect("persist new");
        let loaded = store.load(&path).expect("load");
        assert_eq!(loaded.as_deref(), Some("new: text\n"));
    }
}
