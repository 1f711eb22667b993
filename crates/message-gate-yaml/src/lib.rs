// crates/message-gate-yaml/src/lib.rs
// ============================================================================
// Module: Message Gate YAML Codec
// Description: YAML parser and canonical serializer for message catalogs.
// Purpose: Implement the document codec contract over YAML catalog files.
// Dependencies: message-gate-core, serde_yaml
// ============================================================================

//! ## Overview
//! This crate implements [`message_gate_core::DocumentCodec`] for YAML
//! catalogs. Parsing goes through `serde_yaml` and coerces every scalar to
//! its string form; serialization is a hand-written block-mapping emitter
//! that is deterministic for a given tree and indent width and quotes any
//! scalar a YAML parser would otherwise reinterpret as a non-string type.
//! Invariants:
//! - `parse` then `serialize` then `parse` is a fixed point: the second
//!   parse yields the tree that produced the text.
//! - Leaf values are strings in both directions; sequences and type tags
//!   are rejected at parse time.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod codec;
mod emit;
mod scalar;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use codec::YamlCodec;
pub use scalar::needs_quoting;
