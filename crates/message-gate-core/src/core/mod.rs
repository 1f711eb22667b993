// crates/message-gate-core/src/core/mod.rs
// ============================================================================
// Module: Core Data Model
// Description: Value types shared by every pipeline stage.
// Purpose: Define catalogs, flat keys, message trees, and strategy selections.
// Dependencies: crate::core submodules
// ============================================================================

//! ## Overview
//! The core data model groups the value types that flow through the
//! resolution pipeline: [`catalog`] for file identity and key maps,
//! [`tree`] for the ordered message tree, and [`strategy`] for the
//! per-stage conflict policies.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod strategy;
pub mod tree;
