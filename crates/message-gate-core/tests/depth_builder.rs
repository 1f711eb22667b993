//! Depth builder tests for message-gate-core.
// crates/message-gate-core/tests/depth_builder.rs
// =============================================================================
// Module: Depth Builder Tests
// Description: Validate tree rebuilding, conflict joining, and depth caps.
// Purpose: Ensure nested structure is rebuilt deterministically per policy.
// =============================================================================

use message_gate_core::DepthError;
use message_gate_core::DepthStrategy;
use message_gate_core::FlatKey;
use message_gate_core::MessageNode;
use message_gate_core::MessageTree;
use message_gate_core::ResolvedMap;
use message_gate_core::build_tree;

type TestResult = Result<(), String>;

fn resolved(entries: &[(&str, &str)]) -> ResolvedMap {
    entries
        .iter()
        .map(|(key, value)| (FlatKey::new(*key), (*value).to_string()))
        .collect()
}

fn leaf_at<'a>(tree: &'a MessageTree, path: &[&str]) -> Result<&'a str, String> {
    let mut branch = tree.root();
    let (last, prefix) = path.split_last().ok_or("empty path")?;
    for segment in prefix {
        match branch.get(*segment) {
            Some(MessageNode::Branch(children)) => branch = children,
            other => return Err(format!("expected branch at {segment}, got {other:?}")),
        }
    }
    match branch.get(*last) {
        Some(MessageNode::Leaf(value)) => Ok(value),
        other => Err(format!("expected leaf at {last}, got {other:?}")),
    }
}

// ============================================================================
// SECTION: Nesting
// ============================================================================

#[test]
fn nests_dotted_keys_into_branches() -> TestResult {
    let messages = resolved(&[("menu.file.open", "Open"), ("menu.file.close", "Close")]);
    let tree = build_tree(DepthStrategy::Fail, 666, &messages).map_err(|err| err.to_string())?;
    if leaf_at(&tree, &["menu", "file", "open"])? != "Open" {
        return Err("expected nested open leaf".to_string());
    }
    if leaf_at(&tree, &["menu", "file", "close"])? != "Close" {
        return Err("expected nested close leaf".to_string());
    }
    if tree.leaf_count() != 2 {
        return Err(format!("expected 2 leaves, got {}", tree.leaf_count()));
    }
    Ok(())
}

#[test]
fn depth_zero_keeps_keys_flat() -> TestResult {
    let messages = resolved(&[("menu.file.open", "Open")]);
    let tree = build_tree(DepthStrategy::Fail, 0, &messages).map_err(|err| err.to_string())?;
    if leaf_at(&tree, &["menu.file.open"])? != "Open" {
        return Err("expected flat composite key".to_string());
    }
    Ok(())
}

#[test]
fn depth_cap_joins_trailing_segments_verbatim() -> TestResult {
    let messages = resolved(&[("a.b.c.d", "deep")]);
    let tree = build_tree(DepthStrategy::Fail, 2, &messages).map_err(|err| err.to_string())?;
    if leaf_at(&tree, &["a", "b", "c.d"])? != "deep" {
        return Err("expected capped split with joined tail".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Conflict Policy
// ============================================================================

#[test]
fn join_glues_colliding_segment_onto_next() -> TestResult {
    let messages = resolved(&[("foo", "X"), ("foo.bar", "Y")]);
    let tree = build_tree(DepthStrategy::Join, 666, &messages).map_err(|err| err.to_string())?;
    if leaf_at(&tree, &["foo"])? != "X" {
        return Err("shallow leaf must survive".to_string());
    }
    if leaf_at(&tree, &["foo.bar"])? != "Y" {
        return Err("deeper key must flatten into a composite segment".to_string());
    }
    Ok(())
}

#[test]
fn join_cascades_through_repeated_collisions() -> TestResult {
    let messages = resolved(&[("a", "1"), ("a.b", "2"), ("a.b.c", "3")]);
    let tree = build_tree(DepthStrategy::Join, 666, &messages).map_err(|err| err.to_string())?;
    if leaf_at(&tree, &["a"])? != "1" {
        return Err("expected leaf a".to_string());
    }
    if leaf_at(&tree, &["a.b"])? != "2" {
        return Err("expected joined leaf a.b".to_string());
    }
    if leaf_at(&tree, &["a.b.c"])? != "3" {
        return Err("expected cascaded joined leaf a.b.c".to_string());
    }
    Ok(())
}

#[test]
fn fail_surfaces_the_full_conflicting_key() -> TestResult {
    let messages = resolved(&[("foo", "X"), ("foo.bar", "Y")]);
    match build_tree(DepthStrategy::Fail, 666, &messages) {
        Err(DepthError::Conflict {
            key,
        }) => {
            if key.as_str() != "foo.bar" {
                return Err(format!("unexpected conflict key {key}"));
            }
            Ok(())
        }
        other => Err(format!("expected conflict, got {other:?}")),
    }
}

#[test]
fn ask_fails_only_on_actual_conflict() -> TestResult {
    let conflict_free = resolved(&[("menu.open", "Open")]);
    build_tree(DepthStrategy::Ask, 666, &conflict_free).map_err(|err| err.to_string())?;

    let conflicting = resolved(&[("foo", "X"), ("foo.bar", "Y")]);
    match build_tree(DepthStrategy::Ask, 666, &conflicting) {
        Err(DepthError::Unimplemented) => Ok(()),
        other => Err(format!("expected unimplemented, got {other:?}")),
    }
}

// ============================================================================
// SECTION: Determinism
// ============================================================================

#[test]
fn rebuilding_the_same_map_yields_an_identical_tree() -> TestResult {
    let messages = resolved(&[
        ("z.last", "omega"),
        ("a.first", "alpha"),
        ("a.second", "beta"),
        ("m.middle.deep", "gamma"),
    ]);
    let first = build_tree(DepthStrategy::Join, 666, &messages).map_err(|err| err.to_string())?;
    let second = build_tree(DepthStrategy::Join, 666, &messages).map_err(|err| err.to_string())?;
    if first != second {
        return Err("expected identical trees".to_string());
    }
    if first.leaf_count() != 4 {
        return Err(format!("expected 4 leaves, got {}", first.leaf_count()));
    }
    Ok(())
}
