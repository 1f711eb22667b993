// crates/message-gate-core/src/core/strategy.rs
// ============================================================================
// Module: Resolution Strategies
// Description: Per-stage conflict policies for the resolution pipeline.
// Purpose: Make every conflict decision an explicit, typed selection.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each pipeline stage takes a strategy describing how conflicts are
//! resolved. The `Ask` variant of every strategy is an explicit
//! unimplemented control path: it is a valid selection at the surface and a
//! hard, typed failure when a stage would need to act on it. Interactive
//! resolution callbacks are an open extension point, not implemented
//! behavior.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Duplicate Strategy
// ============================================================================

/// Policy for collapsing duplicate key declarations within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateStrategy {
    /// Fail when any key carries more than one value.
    Fail,
    /// Keep the first declared value.
    First,
    /// Keep the last declared value.
    Last,
    /// Interactive resolution; explicit unimplemented variant.
    Ask,
}

impl DuplicateStrategy {
    /// Returns the canonical strategy label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::First => "first",
            Self::Last => "last",
            Self::Ask => "ask",
        }
    }
}

impl fmt::Display for DuplicateStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Sync Strategy
// ============================================================================

/// Policy for reconciling key sets across the catalogs of one domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncStrategy {
    /// Insert the key text itself as a placeholder for missing keys.
    UseKey,
    /// Leave missing keys missing.
    Ignore,
    /// Fail on the first key absent from any sibling catalog.
    Fail,
    /// Interactive resolution; explicit unimplemented variant.
    Ask,
}

impl SyncStrategy {
    /// Returns the canonical strategy label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UseKey => "use-key",
            Self::Ignore => "ignore",
            Self::Fail => "fail",
            Self::Ask => "ask",
        }
    }
}

impl fmt::Display for SyncStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Depth Strategy
// ============================================================================

/// Policy for leaf-versus-branch collisions while rebuilding the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepthStrategy {
    /// Glue the colliding path portion back into a flat composite segment.
    Join,
    /// Fail on the first collision.
    Fail,
    /// Interactive resolution; explicit unimplemented variant.
    Ask,
}

impl DepthStrategy {
    /// Returns the canonical strategy label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Join => "join",
            Self::Fail => "fail",
            Self::Ask => "ask",
        }
    }
}

impl fmt::Display for DepthStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Change Strategy
// ============================================================================

/// Policy for applying a detected difference to the catalog on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChangeStrategy {
    /// Fail without writing; used by the read-only check mode.
    Fail,
    /// Replace the file content with the canonical text.
    Overwrite,
    /// Interactive confirmation; explicit unimplemented variant.
    Ask,
}

impl ChangeStrategy {
    /// Returns the canonical strategy label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::Overwrite => "overwrite",
            Self::Ask => "ask",
        }
    }
}

impl fmt::Display for ChangeStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SECTION: Strategy Set
// ============================================================================

/// The full strategy selection for one pipeline run.
///
/// # Invariants
/// - Applies uniformly to every domain group processed by the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrategySet {
    /// Duplicate key resolution policy.
    pub duplicates: DuplicateStrategy,
    /// Cross-language synchronization policy.
    pub sync: SyncStrategy,
    /// Depth rebuild conflict policy.
    pub depth: DepthStrategy,
    /// On-disk change policy.
    pub changes: ChangeStrategy,
}

impl StrategySet {
    /// Strategy set used by the read-only check mode: every stage fails on
    /// conflict and nothing is ever written.
    #[must_use]
    pub const fn checking() -> Self {
        Self {
            duplicates: DuplicateStrategy::Fail,
            sync: SyncStrategy::Fail,
            depth: DepthStrategy::Fail,
            changes: ChangeStrategy::Fail,
        }
    }
}
