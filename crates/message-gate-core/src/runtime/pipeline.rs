// crates/message-gate-core/src/runtime/pipeline.rs
// ============================================================================
// Module: Pipeline Driver
// Description: Runs every resolution stage over one domain group.
// Purpose: Produce synchronized, canonical catalogs or a contextual failure.
// Dependencies: crate::core, crate::interfaces, crate::resolve, crate::runtime,
// thiserror
// ============================================================================

//! ## Overview
//! The pipeline processes one domain group at a time: every member catalog
//! is loaded, parsed, extracted, and duplicate-resolved before sync
//! resolution observes the complete set of resolved maps (the join point);
//! depth resolution and the change gate then run per catalog. The first
//! stage failure aborts the remainder of the group with file context
//! attached. Groups are independent: effects already applied to earlier
//! groups are kept, and there is no global transaction.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::catalog::CatalogFile;
use crate::core::catalog::DomainGroup;
use crate::core::strategy::StrategySet;
use crate::interfaces::CatalogStore;
use crate::interfaces::CodecError;
use crate::interfaces::DocumentCodec;
use crate::interfaces::StoreError;
use crate::resolve::depth::DepthError;
use crate::resolve::depth::build_tree;
use crate::resolve::duplicates::DuplicateError;
use crate::resolve::duplicates::resolve_duplicates;
use crate::resolve::extract::extract_messages;
use crate::resolve::sync::SyncError;
use crate::resolve::sync::resolve_sync;
use crate::runtime::gate::GateError;
use crate::runtime::gate::GateOutcome;
use crate::runtime::gate::apply_changes;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Pipeline errors carrying the file or group context of the failed stage.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Catalog text could not be loaded.
    #[error("failed to read catalog {file:?}: {source}")]
    Load {
        /// Catalog that could not be read.
        file: PathBuf,
        /// Underlying storage failure.
        source: StoreError,
    },
    /// Catalog text could not be parsed.
    #[error("failed to parse catalog {file:?}: {source}")]
    Parse {
        /// Catalog that could not be parsed.
        file: PathBuf,
        /// Underlying codec failure.
        source: CodecError,
    },
    /// Duplicate resolution failed for a catalog.
    #[error("{source} in file {file:?}")]
    Duplicates {
        /// Catalog carrying the duplicate conflict.
        file: PathBuf,
        /// Underlying duplicate resolution failure.
        source: DuplicateError,
    },
    /// Sync resolution failed for the domain group.
    #[error(transparent)]
    Sync(#[from] SyncError),
    /// Depth resolution failed for a catalog.
    #[error("{source} in file {file:?}")]
    Depth {
        /// Catalog whose keys could not be expanded.
        file: PathBuf,
        /// Underlying depth resolution failure.
        source: DepthError,
    },
    /// The change gate rejected or failed to apply a rewrite.
    #[error(transparent)]
    Gate(#[from] GateError),
}

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Gate outcome for one catalog of a processed domain group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogReport {
    /// Catalog the outcome applies to.
    pub file: CatalogFile,
    /// Whether the catalog was left untouched or rewritten.
    pub outcome: GateOutcome,
}

// ============================================================================
// SECTION: Pipeline
// ============================================================================

/// One pipeline run configuration: strategies, nesting depth, indent width.
///
/// # Invariants
/// - A pipeline holds no mutable state; the same instance may process any
///   number of domain groups in any order.
#[derive(Debug, Clone, Copy)]
pub struct Pipeline {
    /// Conflict policies for every stage.
    strategies: StrategySet,
    /// Maximum number of dot-splits when rebuilding nested structure.
    depth: u32,
    /// Indentation width for canonical serialization.
    indent: usize,
}

impl Pipeline {
    /// Creates a pipeline run configuration.
    #[must_use]
    pub const fn new(strategies: StrategySet, depth: u32, indent: usize) -> Self {
        Self {
            strategies,
            depth,
            indent,
        }
    }

    /// Processes one domain group end to end.
    ///
    /// Extraction and duplicate resolution complete for every member catalog
    /// before sync resolution runs; depth resolution and the change gate
    /// then proceed per catalog in path order.
    ///
    /// # Errors
    ///
    /// Returns the first stage failure with its file or group context; no
    /// further catalog of this group is written after a failure.
    pub fn process_group(
        &self,
        group: &DomainGroup,
        codec: &dyn DocumentCodec,
        store: &mut dyn CatalogStore,
    ) -> Result<Vec<CatalogReport>, PipelineError> {
        let mut contents: BTreeMap<PathBuf, Option<String>> = BTreeMap::new();
        let mut resolved = BTreeMap::new();
        for file in &group.files {
            let text = store.load(file.path()).map_err(|source| PipelineError::Load {
                file: file.path.clone(),
                source,
            })?;
            let tree = codec
                .parse(text.as_deref().unwrap_or_default())
                .map_err(|source| PipelineError::Parse {
                    file: file.path.clone(),
                    source,
                })?;
            let messages = extract_messages(&tree);
            let messages = resolve_duplicates(self.strategies.duplicates, &messages).map_err(
                |source| PipelineError::Duplicates {
                    file: file.path.clone(),
                    source,
                },
            )?;
            contents.insert(file.path.clone(), text);
            resolved.insert(file.path.clone(), messages);
        }

        let synced = resolve_sync(self.strategies.sync, &resolved)?;

        let mut reports = Vec::with_capacity(group.files.len());
        for file in &group.files {
            let Some(messages) = synced.get(file.path()) else {
                continue;
            };
            let tree = build_tree(self.strategies.depth, self.depth, messages).map_err(
                |source| PipelineError::Depth {
                    file: file.path.clone(),
                    source,
                },
            )?;
            let current = contents.get(file.path()).and_then(Option::as_deref);
            let outcome = apply_changes(
                self.strategies.changes,
                file.path(),
                current,
                &tree,
                self.indent,
                codec,
                store,
            )?;
            reports.push(CatalogReport {
                file: file.clone(),
                outcome,
            });
        }
        Ok(reports)
    }
}
