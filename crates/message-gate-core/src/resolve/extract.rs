// crates/message-gate-core/src/resolve/extract.rs
// ============================================================================
// Module: Message Extractor
// Description: Flattens a parsed message tree into a duplicate multimap.
// Purpose: Turn hierarchical documents into flat dotted keys for resolution.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! The extractor walks a parsed tree and records every leaf under its dotted
//! flat key. The same flat key can legitimately receive multiple values when
//! the source document declares the same dotted path at different structural
//! depths (for example `foo.bar: A` next to `foo: {bar: B}`); the value list
//! keeps document encounter order. The extractor itself has no error
//! conditions; malformed documents fail earlier, inside the codec.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::catalog::DuplicateMap;
use crate::core::catalog::FlatKey;
use crate::core::tree::BranchMap;
use crate::core::tree::MessageNode;
use crate::core::tree::MessageTree;

// ============================================================================
// SECTION: Extraction
// ============================================================================

/// Flattens `tree` into a multimap from flat key to every value seen there.
#[must_use]
pub fn extract_messages(tree: &MessageTree) -> DuplicateMap {
    let mut messages = DuplicateMap::new();
    walk(tree.root(), None, &mut messages);
    messages
}

/// Descends one branch, accumulating the dotted path built so far.
fn walk(branch: &BranchMap, prefix: Option<&FlatKey>, messages: &mut DuplicateMap) {
    for (segment, node) in branch {
        let key = FlatKey::child(prefix, segment);
        match node {
            MessageNode::Leaf(value) => {
                messages.entry(key).or_default().push(value.clone());
            }
            MessageNode::Branch(children) => {
                walk(children, Some(&key), messages);
            }
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    #![allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        reason = "Test-only panic-based assertions are permitted."
    )]

    use super::extract_messages;
    use crate::core::catalog::FlatKey;
    use crate::core::tree::BranchMap;
    use crate::core::tree::MessageNode;
    use crate::core::tree::MessageTree;

    #[test]
    fn structural_duplicates_accumulate_in_encounter_order() {
        let mut root = BranchMap::new();
        root.insert("foo.bar".to_string(), MessageNode::Leaf("A".to_string()));
        let mut foo = BranchMap::new();
        foo.insert("bar".to_string(), MessageNode::Leaf("B".to_string()));
        root.insert("foo".to_string(), MessageNode::Branch(foo));
        let messages = extract_messages(&MessageTree::from_root(root));
        assert_eq!(messages.len(), 1);
        assert_eq!(
            messages.get(&FlatKey::new("foo.bar")),
            Some(&vec!["A".to_string(), "B".to_string()])
        );
    }

    #[test]
    fn empty_tree_extracts_no_messages() {
        assert!(extract_messages(&MessageTree::new()).is_empty());
    }
}
