// crates/message-gate-core/src/resolve/sync.rs
// ============================================================================
// Module: Sync Resolver
// Description: Reconciles key sets across the catalogs of one domain.
// Purpose: Guarantee every language carries the union of translatable keys.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Sync resolution observes the resolved maps of every sibling catalog in a
//! domain group and compares each against the union of all keys. Groups that
//! are already synchronized take a no-op fast path regardless of strategy.
//! `use-key` fills gaps with the key's own text as a self-referential
//! placeholder translation, operating on a copy and never mutating its
//! input; `fail` names the first missing key and the catalog lacking it.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::catalog::FlatKey;
use crate::core::catalog::ResolvedMap;
use crate::core::strategy::SyncStrategy;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Sync resolution errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum SyncError {
    /// A key present elsewhere in the domain group is missing from a catalog.
    #[error("translatable {key:?} is not set in {file:?}")]
    Mismatch {
        /// Flat key missing from the catalog.
        key: FlatKey,
        /// Catalog lacking the key.
        file: PathBuf,
    },
    /// Interactive resolution was selected but is not implemented.
    #[error("sync strategy \"ask\" is not implemented")]
    Unimplemented,
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Reconciles the key sets of every catalog in one domain group.
///
/// Returns a possibly-augmented copy of `catalogs`; the input is never
/// mutated. When every catalog already holds the full key union the input is
/// returned unchanged, whatever the strategy.
///
/// # Errors
///
/// Returns [`SyncError::Mismatch`] for the first missing key under
/// [`SyncStrategy::Fail`], or [`SyncError::Unimplemented`] when `ask` is
/// selected and the group is not already synchronized.
pub fn resolve_sync(
    strategy: SyncStrategy,
    catalogs: &BTreeMap<PathBuf, ResolvedMap>,
) -> Result<BTreeMap<PathBuf, ResolvedMap>, SyncError> {
    let mut all_keys = BTreeSet::new();
    for messages in catalogs.values() {
        all_keys.extend(messages.keys().cloned());
    }

    if catalogs.values().all(|messages| messages.len() == all_keys.len()) {
        return Ok(catalogs.clone());
    }

    match strategy {
        SyncStrategy::Ignore => Ok(catalogs.clone()),
        SyncStrategy::Fail => {
            for (file, messages) in catalogs {
                if let Some(key) = all_keys.iter().find(|key| !messages.contains_key(*key)) {
                    return Err(SyncError::Mismatch {
                        key: key.clone(),
                        file: file.clone(),
                    });
                }
            }
            Ok(catalogs.clone())
        }
        SyncStrategy::UseKey => {
            let mut augmented = catalogs.clone();
            for messages in augmented.values_mut() {
                for key in &all_keys {
                    if !messages.contains_key(key) {
                        messages.insert(key.clone(), key.as_str().to_string());
                    }
                }
            }
            Ok(augmented)
        }
        SyncStrategy::Ask => Err(SyncError::Unimplemented),
    }
}
