// crates/message-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Pipeline Interfaces
// Description: Backend-agnostic interfaces for document parsing and storage.
// Purpose: Define the contract surfaces used by the resolution pipeline.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how the pipeline reads and writes catalog documents
//! without embedding a document format or a filesystem. The codec must treat
//! every leaf value as a string in both directions: implicit-typed scalars
//! are taken as their source text on input, and any scalar that would be
//! reinterpreted as a non-string type on re-read must be quoted on output.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;

use thiserror::Error;

use crate::core::tree::MessageTree;

// ============================================================================
// SECTION: Document Codec
// ============================================================================

/// Codec errors surfaced while parsing catalog text.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Document text could not be parsed into a message tree.
    #[error("parse failure: {0}")]
    Parse(String),
}

/// Format-specific parser and serializer for catalog documents.
///
/// Implementations must be deterministic: parsing preserves document order,
/// and serializing the same tree with the same indent width always yields
/// the same text.
pub trait DocumentCodec {
    /// Parses catalog text into an ordered message tree.
    ///
    /// Empty input parses to an empty tree. All leaf values are strings; a
    /// document whose structure cannot be expressed as string leaves under
    /// ordered branches is rejected.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Parse`] with a human-readable description of
    /// the offending construct.
    fn parse(&self, text: &str) -> Result<MessageTree, CodecError>;

    /// Serializes a message tree to canonical text.
    ///
    /// Key order is tree insertion order and `indent` spaces are emitted per
    /// nesting level. Scalars that would re-parse as a non-string type are
    /// quoted.
    fn serialize(&self, tree: &MessageTree, indent: usize) -> String;
}

// ============================================================================
// SECTION: Catalog Store
// ============================================================================

/// Storage errors surfaced while loading or persisting catalog text.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying storage failed to read catalog text.
    #[error("read failure: {0}")]
    Read(String),
    /// Underlying storage failed to persist catalog text.
    #[error("write failure: {0}")]
    Write(String),
}

/// Backend-agnostic catalog text storage.
///
/// The pipeline loads each catalog once and persists at most once per run.
/// Implementations should persist atomically (write to a temporary location,
/// then rename) so an interrupted run never leaves a truncated catalog.
pub trait CatalogStore {
    /// Loads the current text of a catalog, or `None` when the file does not
    /// exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Read`] when the text cannot be loaded.
    fn load(&self, path: &Path) -> Result<Option<String>, StoreError>;

    /// Persists canonical catalog text, replacing any previous content.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Write`] when the text cannot be persisted.
    fn persist(&mut self, path: &Path, text: &str) -> Result<(), StoreError>;
}
