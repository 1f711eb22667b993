// crates/message-gate-core/src/core/catalog.rs
// ============================================================================
// Module: Catalog Identity and Key Maps
// Description: Catalog files, domain groups, flat keys, and key/value maps.
// Purpose: Provide strongly typed identity for catalogs and their messages.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A catalog is one file holding the messages of a single domain in a single
//! language. Catalogs sharing a domain name form a [`DomainGroup`] and are
//! resolved together so that every language carries the same key set.
//! Flat keys address one position in a hierarchical message tree and order
//! lexicographically, which is the processing order the depth builder
//! requires.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Flat Keys
// ============================================================================

/// Separator between the segments of a flat key.
pub const KEY_SEPARATOR: char = '.';

/// Dot-joined path uniquely identifying a message position in a tree.
///
/// # Invariants
/// - Non-empty, with non-empty dot-separated segments.
/// - Orders lexicographically on the underlying string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatKey(String);

impl FlatKey {
    /// Creates a flat key from a dotted path.
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Creates a flat key by appending `segment` to an optional parent path.
    #[must_use]
    pub fn child(parent: Option<&Self>, segment: &str) -> Self {
        match parent {
            Some(prefix) => Self(format!("{}{KEY_SEPARATOR}{segment}", prefix.0)),
            None => Self(segment.to_string()),
        }
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the key into at most `limit + 1` segments.
    ///
    /// The split is capped, not recursive: when the key holds more dotted
    /// components than the cap allows, the trailing components stay joined
    /// verbatim inside the final segment.
    #[must_use]
    pub fn split_limited(&self, limit: usize) -> Vec<&str> {
        self.0.splitn(limit.saturating_add(1), KEY_SEPARATOR).collect()
    }
}

impl fmt::Display for FlatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for FlatKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for FlatKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

// ============================================================================
// SECTION: Key Maps
// ============================================================================

/// Mapping from flat key to every value seen at that key within one catalog.
///
/// # Invariants
/// - Value lists are non-empty and hold document encounter order.
pub type DuplicateMap = BTreeMap<FlatKey, Vec<String>>;

/// Mapping from flat key to a single value, after duplicate resolution.
///
/// # Invariants
/// - Iteration yields keys in lexicographic order (BTree ordering).
pub type ResolvedMap = BTreeMap<FlatKey, String>;

// ============================================================================
// SECTION: Catalog Files
// ============================================================================

/// One catalog file: a domain, a language, and the path holding both.
///
/// # Invariants
/// - `path` ends in `<domain>.<language>.<ext>`.
/// - `domain` and `language` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Filesystem location of the catalog.
    pub path: PathBuf,
    /// Logical catalog name shared across languages.
    pub domain: String,
    /// Language code taken from the filename.
    pub language: String,
}

impl CatalogFile {
    /// Creates a catalog file descriptor.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, domain: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            domain: domain.into(),
            language: language.into(),
        }
    }

    /// Returns the catalog path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// The set of catalogs sharing one domain name, one per language.
///
/// # Invariants
/// - `files` is sorted by path and free of duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainGroup {
    /// Domain name shared by every member catalog.
    pub domain: String,
    /// Member catalogs, ordered by path.
    pub files: Vec<CatalogFile>,
}

impl DomainGroup {
    /// Creates a domain group from a domain name and member catalogs.
    ///
    /// Members are sorted by path so that group processing is deterministic
    /// regardless of discovery order.
    #[must_use]
    pub fn new(domain: impl Into<String>, mut files: Vec<CatalogFile>) -> Self {
        files.sort();
        Self {
            domain: domain.into(),
            files,
        }
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

    use super::FlatKey;

    #[test]
    fn split_limited_caps_segment_count() {
        let key = FlatKey::new("a.b.c.d");
        assert_eq!(key.split_limited(2), vec!["a", "b", "c.d"]);
        assert_eq!(key.split_limited(0), vec!["a.b.c.d"]);
        assert_eq!(key.split_limited(10), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn child_appends_with_separator() {
        let root = FlatKey::child(None, "foo");
        let nested = FlatKey::child(Some(&root), "bar");
        assert_eq!(root.as_str(), "foo");
        assert_eq!(nested.as_str(), "foo.bar");
    }
}
