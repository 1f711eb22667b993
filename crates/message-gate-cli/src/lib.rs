// crates/message-gate-cli/src/lib.rs
// ============================================================================
// Module: Message Gate CLI Library
// Description: Reusable pieces of the Message Gate command line interface.
// Purpose: Expose the runner, storage, diff, and i18n layers for testing.
// Dependencies: message-gate-core, message-gate-config, message-gate-yaml
// ============================================================================

//! ## Overview
//! The CLI library wires the resolution pipeline to the filesystem: the
//! [`runner`] drives discovery and per-domain processing, [`store`] is the
//! atomic file-backed catalog store, [`diff`] renders the context diff shown
//! by the unimplemented interactive change strategy, and [`i18n`] carries
//! every user-facing string behind the [`t!`](crate::t) macro.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod diff;
pub mod i18n;
pub mod runner;
pub mod store;
