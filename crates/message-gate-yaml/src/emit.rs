// crates/message-gate-yaml/src/emit.rs
// ============================================================================
// Module: Canonical Emitter
// Description: Deterministic block-mapping serializer for message trees.
// Purpose: Produce the single canonical text for a tree and indent width.
// Dependencies: message-gate-core, crate::scalar
// ============================================================================

//! ## Overview
//! The emitter writes one block mapping per branch, children in insertion
//! order, `indent` spaces per nesting level. Keys and values go through the
//! scalar quoting rules so the text re-parses to the same tree. An empty
//! tree serializes to the empty string and an empty branch to a `{}` flow
//! mapping, both of which round-trip.

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_gate_core::MessageNode;
use message_gate_core::MessageTree;
use message_gate_core::core::tree::BranchMap;

use crate::scalar::render;

// ============================================================================
// SECTION: Serialization
// ============================================================================

/// Serializes `tree` to canonical YAML text.
#[must_use]
pub fn serialize_tree(tree: &MessageTree, indent: usize) -> String {
    let mut out = String::new();
    emit_branch(tree.root(), 0, indent, &mut out);
    out
}

/// Emits one branch at the given nesting level.
fn emit_branch(branch: &BranchMap, level: usize, indent: usize, out: &mut String) {
    let pad = " ".repeat(level * indent);
    for (name, node) in branch {
        out.push_str(&pad);
        out.push_str(&render(name));
        match node {
            MessageNode::Leaf(value) => {
                out.push_str(": ");
                out.push_str(&render(value));
                out.push('\n');
            }
            MessageNode::Branch(children) if children.is_empty() => {
                out.push_str(": {}\n");
            }
            MessageNode::Branch(children) => {
                out.push_str(":\n");
                emit_branch(children, level + 1, indent, out);
            }
        }
    }
}
