// crates/message-gate-yaml/src/codec.rs
// ============================================================================
// Module: YAML Codec
// Description: Document codec implementation over serde_yaml.
// Purpose: Parse YAML catalog text into message trees and serialize back.
// Dependencies: message-gate-core, serde_yaml, crate::emit
// ============================================================================

//! ## Overview
//! [`YamlCodec`] parses catalog text with `serde_yaml`, preserving mapping
//! order, and coerces every scalar to its string form: implicit booleans
//! and numbers become their rendered text, nulls become empty strings.
//! Sequences and tagged values cannot be expressed as message leaves and
//! are rejected with the offending path. Serialization goes through the
//! canonical emitter.

// ============================================================================
// SECTION: Imports
// ============================================================================

use message_gate_core::CodecError;
use message_gate_core::DocumentCodec;
use message_gate_core::MessageNode;
use message_gate_core::MessageTree;
use message_gate_core::core::tree::BranchMap;
use serde_yaml::Mapping;
use serde_yaml::Value;

use crate::emit::serialize_tree;

// ============================================================================
// SECTION: Codec
// ============================================================================

/// YAML implementation of the document codec contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl YamlCodec {
    /// Creates the codec.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl DocumentCodec for YamlCodec {
    fn parse(&self, text: &str) -> Result<MessageTree, CodecError> {
        if text.trim().is_empty() {
            return Ok(MessageTree::new());
        }
        let value: Value = serde_yaml::from_str(text)
            .map_err(|err| CodecError::Parse(err.to_string()))?;
        match value {
            Value::Null => Ok(MessageTree::new()),
            Value::Mapping(mapping) => Ok(MessageTree::from_root(convert_mapping(&mapping, "")?)),
            other => Err(CodecError::Parse(format!(
                "top-level mapping required, found {}",
                value_kind(&other)
            ))),
        }
    }

    fn serialize(&self, tree: &MessageTree, indent: usize) -> String {
        serialize_tree(tree, indent)
    }
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Converts one parsed mapping into an ordered branch.
fn convert_mapping(mapping: &Mapping, path: &str) -> Result<BranchMap, CodecError> {
    let mut branch = BranchMap::new();
    for (key, value) in mapping {
        let segment = scalar_text(key).ok_or_else(|| {
            CodecError::Parse(format!(
                "unsupported mapping key {} at {}",
                value_kind(key),
                display_path(path, "?")
            ))
        })?;
        let child_path = join_path(path, &segment);
        let node = match value {
            Value::Mapping(children) => MessageNode::Branch(convert_mapping(children, &child_path)?),
            Value::Tagged(tagged) => {
                return Err(CodecError::Parse(format!(
                    "unknown type tag {} at {child_path}",
                    tagged.tag
                )));
            }
            Value::Sequence(_) => {
                return Err(CodecError::Parse(format!(
                    "unsupported sequence value at {child_path}"
                )));
            }
            scalar => match scalar_text(scalar) {
                Some(text) => MessageNode::Leaf(text),
                None => {
                    return Err(CodecError::Parse(format!(
                        "unsupported value {} at {child_path}",
                        value_kind(scalar)
                    )));
                }
            },
        };
        branch.insert(segment, node);
    }
    Ok(branch)
}

/// Renders a scalar value as its string form, or `None` for non-scalars.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Number(number) => Some(number.to_string()),
        Value::Null => Some(String::new()),
        _ => None,
    }
}

/// Human-readable kind label for parse errors.
const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}

/// Joins a dotted error path with the next segment.
fn join_path(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

/// Renders an error path, falling back to a placeholder at the root.
fn display_path<'a>(path: &'a str, fallback: &'a str) -> &'a str {
    if path.is_empty() {
        fallback
    } else {
        path
    }
}
