// crates/message-gate-core/src/lib.rs
// ============================================================================
// Module: Message Gate Core
// Description: Catalog resolution pipeline for translation message catalogs.
// Purpose: Normalize per-language catalogs into a canonical, synchronized form.
// Dependencies: indexmap, serde, thiserror
// ============================================================================

//! ## Overview
//! This crate implements the catalog resolution pipeline: extracting flat
//! dotted keys from a parsed document tree, resolving duplicate keys,
//! synchronizing key sets across the sibling catalogs of one domain,
//! rebuilding a depth-limited message tree under an explicit conflict policy,
//! and gating any on-disk change behind a canonicalization and comparison
//! step.
//! Invariants:
//! - Catalogs are read once per run and written at most once, by the change
//!   gate, only when the active strategy permits writing.
//! - Every stage is deterministic given its inputs and selected strategies.
//! - Document parsing and persistence happen behind the [`DocumentCodec`] and
//!   [`CatalogStore`] interfaces; the pipeline itself never touches the
//!   filesystem.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod resolve;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crate::core::catalog::CatalogFile;
pub use crate::core::catalog::DomainGroup;
pub use crate::core::catalog::DuplicateMap;
pub use crate::core::catalog::FlatKey;
pub use crate::core::catalog::ResolvedMap;
pub use crate::core::strategy::ChangeStrategy;
pub use crate::core::strategy::DepthStrategy;
pub use crate::core::strategy::DuplicateStrategy;
pub use crate::core::strategy::StrategySet;
pub use crate::core::strategy::SyncStrategy;
pub use crate::core::tree::BranchMap;
pub use crate::core::tree::MessageNode;
pub use crate::core::tree::MessageTree;
pub use crate::interfaces::CatalogStore;
pub use crate::interfaces::CodecError;
pub use crate::interfaces::DocumentCodec;
pub use crate::interfaces::StoreError;
pub use crate::resolve::depth::DepthError;
pub use crate::resolve::depth::build_tree;
pub use crate::resolve::duplicates::DuplicateError;
pub use crate::resolve::duplicates::resolve_duplicates;
pub use crate::resolve::extract::extract_messages;
pub use crate::resolve::sync::SyncError;
pub use crate::resolve::sync::resolve_sync;
pub use crate::runtime::gate::GateError;
pub use crate::runtime::gate::GateOutcome;
pub use crate::runtime::gate::apply_changes;
pub use crate::runtime::pipeline::CatalogReport;
pub use crate::runtime::pipeline::Pipeline;
pub use crate::runtime::pipeline::PipelineError;
