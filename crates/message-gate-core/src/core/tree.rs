// crates/message-gate-core/src/core/tree.rs
// ============================================================================
// Module: Message Tree
// Description: Ordered hierarchical tree of string-valued messages.
// Purpose: Shared document shape between the codec and the pipeline stages.
// Dependencies: indexmap
// ============================================================================

//! ## Overview
//! A message tree node is either a leaf holding a string or a branch holding
//! an ordered mapping from segment name to child node. Leaves never have
//! children and branches never hold a direct value. Insertion order is
//! preserved, which makes serialization deterministic for a given
//! construction order.

// ============================================================================
// SECTION: Imports
// ============================================================================

use indexmap::IndexMap;

// ============================================================================
// SECTION: Nodes
// ============================================================================

/// Ordered mapping from segment name to child node.
pub type BranchMap = IndexMap<String, MessageNode>;

/// One node of a message tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageNode {
    /// Terminal string value.
    Leaf(String),
    /// Intermediate structural node with ordered children.
    Branch(BranchMap),
}

impl MessageNode {
    /// Returns `true` when the node is a leaf.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

// ============================================================================
// SECTION: Tree
// ============================================================================

/// A message tree rooted at an ordered branch.
///
/// # Invariants
/// - The root is always a branch; an empty tree has no children.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageTree {
    /// Root branch children, in insertion order.
    root: BranchMap,
}

impl MessageTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a tree from an already ordered root branch.
    #[must_use]
    pub const fn from_root(root: BranchMap) -> Self {
        Self {
            root,
        }
    }

    /// Returns `true` when the tree has no messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Returns the root branch.
    #[must_use]
    pub const fn root(&self) -> &BranchMap {
        &self.root
    }

    /// Returns the root branch mutably.
    pub const fn root_mut(&mut self) -> &mut BranchMap {
        &mut self.root
    }

    /// Counts the leaves in the tree.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        fn count(branch: &BranchMap) -> usize {
            branch
                .values()
                .map(|node| match node {
                    MessageNode::Leaf(_) => 1,
                    MessageNode::Branch(children) => count(children),
                })
                .sum()
        }
        count(&self.root)
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

    use super::BranchMap;
    use super::MessageNode;
    use super::MessageTree;

    #[test]
    fn leaf_count_walks_nested_branches() {
        let mut inner = BranchMap::new();
        inner.insert("bar".to_string(), MessageNode::Leaf("A".to_string()));
        inner.insert("baz".to_string(), MessageNode::Leaf("B".to_string()));
        let mut root = BranchMap::new();
        root.insert("foo".to_string(), MessageNode::Branch(inner));
        root.insert("top".to_string(), MessageNode::Leaf("C".to_string()));
        let tree = MessageTree::from_root(root);
        assert_eq!(tree.leaf_count(), 3);
        assert!(!tree.is_empty());
    }

    #[test]
    fn empty_tree_reports_empty() {
        assert!(MessageTree::new().is_empty());
        assert_eq!(MessageTree::new().leaf_count(), 0);
    }
}
