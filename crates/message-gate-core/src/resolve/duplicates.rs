// crates/message-gate-core/src/resolve/duplicates.rs
// ============================================================================
// Module: Duplicate Resolver
// Description: Collapses a duplicate multimap to a single value per key.
// Purpose: Apply the configured duplicate-key policy deterministically.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Duplicate resolution turns the extractor's multimap into a single-valued
//! map. `first` and `last` pick deterministically and cannot fail; `fail`
//! surfaces the first key carrying more than one value together with every
//! candidate; `ask` is an explicit unimplemented control path.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::catalog::DuplicateMap;
use crate::core::catalog::FlatKey;
use crate::core::catalog::ResolvedMap;
use crate::core::strategy::DuplicateStrategy;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Duplicate resolution errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DuplicateError {
    /// A key carries more than one candidate value under the `fail` policy.
    #[error("translatable {key:?} has multiple possible values: {values:?}")]
    Conflict {
        /// Flat key carrying the duplicates.
        key: FlatKey,
        /// Every candidate value, in document encounter order.
        values: Vec<String>,
    },
    /// Interactive resolution was selected but is not implemented.
    #[error("duplicate-key strategy \"ask\" is not implemented")]
    Unimplemented,
}

// ============================================================================
// SECTION: Resolution
// ============================================================================

/// Collapses `messages` to one value per key under `strategy`.
///
/// # Errors
///
/// Returns [`DuplicateError::Conflict`] for the first multi-valued key under
/// [`DuplicateStrategy::Fail`], or [`DuplicateError::Unimplemented`]
/// whenever `ask` is selected.
pub fn resolve_duplicates(
    strategy: DuplicateStrategy,
    messages: &DuplicateMap,
) -> Result<ResolvedMap, DuplicateError> {
    if strategy == DuplicateStrategy::Ask {
        return Err(DuplicateError::Unimplemented);
    }
    if strategy == DuplicateStrategy::Fail {
        for (key, values) in messages {
            if values.len() > 1 {
                return Err(DuplicateError::Conflict {
                    key: key.clone(),
                    values: values.clone(),
                });
            }
        }
    }

    let mut resolved = ResolvedMap::new();
    for (key, values) in messages {
        let value = match strategy {
            DuplicateStrategy::Last => values.last(),
            _ => values.first(),
        };
        if let Some(value) = value {
            resolved.insert(key.clone(), value.clone());
        }
    }
    Ok(resolved)
}
