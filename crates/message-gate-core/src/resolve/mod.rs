// crates/message-gate-core/src/resolve/mod.rs
// ============================================================================
// Module: Resolution Stages
// Description: Pure transformation stages of the catalog pipeline.
// Purpose: Extract, deduplicate, synchronize, and rebuild message maps.
// Dependencies: crate::resolve submodules
// ============================================================================

//! ## Overview
//! The resolution stages are pure functions over the core data model:
//! [`extract`] flattens a parsed tree into a duplicate-preserving multimap,
//! [`duplicates`] collapses it to one value per key, [`sync`] reconciles key
//! sets across the catalogs of one domain, and [`depth`] rebuilds a
//! depth-limited message tree from the resolved flat keys.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod depth;
pub mod duplicates;
pub mod extract;
pub mod sync;
