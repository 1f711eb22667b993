// crates/message-gate-core/src/resolve/depth.rs
// ============================================================================
// Module: Depth Builder
// Description: Rebuilds a depth-limited message tree from resolved flat keys.
// Purpose: Expand dotted keys into nested structure under a conflict policy.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! The depth builder processes flat keys in lexicographic order and expands
//! each into at most `depth + 1` nested segments. When a shallower key has
//! already claimed a path position as a leaf and a deeper key needs the same
//! position as a branch, the conflict policy decides: `join` abandons the
//! descent at that level and glues the colliding segment back onto the next
//! one, so the conflicting path portion stays flat as a composite segment
//! name; `fail` surfaces the full original key. Joins cascade: each failed
//! descent re-buffers the joined prefix and retries at the following
//! segment, so one key can end up several segments flatter than its nominal
//! depth.
//!
//! The walk is an explicit state machine over the current branch and a
//! pending-prefix buffer threaded through the descent, which keeps the
//! conflict cascade testable in isolation.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::catalog::FlatKey;
use crate::core::catalog::KEY_SEPARATOR;
use crate::core::catalog::ResolvedMap;
use crate::core::strategy::DepthStrategy;
use crate::core::tree::BranchMap;
use crate::core::tree::MessageNode;
use crate::core::tree::MessageTree;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Depth resolution errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DepthError {
    /// A shallower key's value and a deeper key's path collide structurally.
    #[error("conflicting keys when expanding path {key:?}")]
    Conflict {
        /// Full original flat key that could not be expanded.
        key: FlatKey,
    },
    /// Interactive resolution was selected but is not implemented.
    #[error("depth strategy \"ask\" is not implemented")]
    Unimplemented,
}

// ============================================================================
// SECTION: Tree Construction
// ============================================================================

/// Rebuilds a message tree from `messages`, nesting at most `depth` levels.
///
/// Keys are processed in lexicographic order of the full flat key, so the
/// result is deterministic: re-running with the same map yields an identical
/// tree. Keys with more than `depth + 1` dotted components keep their
/// trailing components joined verbatim in the final segment.
///
/// # Errors
///
/// Returns [`DepthError::Conflict`] under [`DepthStrategy::Fail`] when a
/// leaf blocks a required descent, or [`DepthError::Unimplemented`] when
/// `ask` is selected and a conflict occurs.
pub fn build_tree(
    strategy: DepthStrategy,
    depth: u32,
    messages: &ResolvedMap,
) -> Result<MessageTree, DepthError> {
    let limit = usize::try_from(depth).unwrap_or(usize::MAX);
    let mut tree = MessageTree::new();
    for (key, value) in messages {
        let segments = key.split_limited(limit);
        descend(strategy, key, &segments, None, value, tree.root_mut())?;
    }
    Ok(tree)
}

/// Joins a pending prefix onto `segment` with the key separator.
fn absorb(pending: Option<String>, segment: &str) -> String {
    match pending {
        Some(prefix) => format!("{prefix}{KEY_SEPARATOR}{segment}"),
        None => segment.to_string(),
    }
}

/// Consumes one segment of `key` at `branch`, carrying the pending prefix.
///
/// The final segment becomes a leaf; intermediate segments descend into (or
/// create) branches. A leaf blocking a descent is the depth conflict the
/// strategy resolves: `join` stays at the current branch and re-buffers the
/// joined name for the next segment.
fn descend(
    strategy: DepthStrategy,
    key: &FlatKey,
    segments: &[&str],
    pending: Option<String>,
    value: &str,
    branch: &mut BranchMap,
) -> Result<(), DepthError> {
    let Some((segment, rest)) = segments.split_first() else {
        return Ok(());
    };
    let name = absorb(pending, segment);

    if rest.is_empty() {
        branch.insert(name, MessageNode::Leaf(value.to_string()));
        return Ok(());
    }

    if matches!(branch.get(&name), Some(MessageNode::Leaf(_))) {
        return match strategy {
            DepthStrategy::Join => descend(strategy, key, rest, Some(name), value, branch),
            DepthStrategy::Fail => Err(DepthError::Conflict {
                key: key.clone(),
            }),
            DepthStrategy::Ask => Err(DepthError::Unimplemented),
        };
    }

    let child = branch
        .entry(name)
        .or_insert_with(|| MessageNode::Branch(BranchMap::new()));
    match child {
        MessageNode::Branch(children) => descend(strategy, key, rest, None, value, children),
        // Unreachable: a leaf at `name` was handled as a conflict above.
        MessageNode::Leaf(_) => Ok(()),
    }
}
