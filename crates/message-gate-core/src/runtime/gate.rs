// crates/message-gate-core/src/runtime/gate.rs
// ============================================================================
// Module: Change Gate
// Description: Gates on-disk catalog changes behind canonical comparison.
// Purpose: Serialize, compare byte-for-byte, and apply the change policy.
// Dependencies: crate::core, crate::interfaces, thiserror
// ============================================================================

//! ## Overview
//! The change gate is the only stage allowed to write. It serializes the
//! rebuilt tree canonically, compares the text byte-for-byte against the
//! current file content (an absent file compares as empty), and applies the
//! change strategy: identical text is always a no-op; `fail` reports the
//! drift without writing, which is what the read-only check mode relies on;
//! `overwrite` persists the canonical text through the store; `ask` hands
//! both texts back so the caller can display a diff, then fails as
//! unimplemented.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::Path;
use std::path::PathBuf;

use thiserror::Error;

use crate::core::strategy::ChangeStrategy;
use crate::core::tree::MessageTree;
use crate::interfaces::CatalogStore;
use crate::interfaces::DocumentCodec;
use crate::interfaces::StoreError;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Change gate errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum GateError {
    /// Canonical text differs from the file under the `fail` policy.
    #[error("changes detected in file {file:?}")]
    ChangesDetected {
        /// Catalog whose content drifted from canonical form.
        file: PathBuf,
    },
    /// Interactive confirmation was selected but is not implemented.
    ///
    /// Carries both texts so the caller can render a diff before reporting.
    #[error("changes strategy \"ask\" is not implemented for file {file:?}")]
    Unimplemented {
        /// Catalog whose content drifted from canonical form.
        file: PathBuf,
        /// Current on-disk text (empty for an absent file).
        current: String,
        /// Proposed canonical text.
        proposed: String,
    },
    /// Persisting the canonical text failed.
    #[error("failed to write file {file:?}: {source}")]
    Store {
        /// Catalog that could not be written.
        file: PathBuf,
        /// Underlying storage failure.
        source: StoreError,
    },
}

// ============================================================================
// SECTION: Outcome
// ============================================================================

/// Result of gating one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// Canonical text matched the file; nothing was written.
    Unchanged,
    /// Canonical text was persisted, replacing the previous content.
    Rewritten,
}

// ============================================================================
// SECTION: Gating
// ============================================================================

/// Serializes `tree` canonically and applies the change policy for `file`.
///
/// `current` is the present on-disk text, or `None` for a file that does not
/// exist yet (compared as empty).
///
/// # Errors
///
/// Returns [`GateError::ChangesDetected`] under [`ChangeStrategy::Fail`],
/// [`GateError::Unimplemented`] under [`ChangeStrategy::Ask`], or
/// [`GateError::Store`] when the overwrite cannot be persisted.
pub fn apply_changes(
    strategy: ChangeStrategy,
    file: &Path,
    current: Option<&str>,
    tree: &MessageTree,
    indent: usize,
    codec: &dyn DocumentCodec,
    store: &mut dyn CatalogStore,
) -> Result<GateOutcome, GateError> {
    let proposed = codec.serialize(tree, indent);
    let current = current.unwrap_or_default();
    if proposed == current {
        return Ok(GateOutcome::Unchanged);
    }

    match strategy {
        ChangeStrategy::Fail => Err(GateError::ChangesDetected {
            file: file.to_path_buf(),
        }),
        ChangeStrategy::Overwrite => {
            store.persist(file, &proposed).map_err(|source| GateError::Store {
                file: file.to_path_buf(),
                source,
            })?;
            Ok(GateOutcome::Rewritten)
        }
        ChangeStrategy::Ask => Err(GateError::Unimplemented {
            file: file.to_path_buf(),
            current: current.to_string(),
            proposed,
        }),
    }
}
