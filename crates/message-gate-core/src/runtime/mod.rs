// crates/message-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Pipeline Runtime
// Description: Orchestration of the resolution stages over domain groups.
// Purpose: Drive extraction through change gating for whole catalogs.
// Dependencies: crate::runtime submodules
// ============================================================================

//! ## Overview
//! The runtime wires the pure resolution stages to the codec and store
//! interfaces: [`pipeline`] processes one domain group end to end, and
//! [`gate`] decides whether a rebuilt tree may reach the disk.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod gate;
pub mod pipeline;
