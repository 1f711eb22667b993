// crates/message-gate-yaml/src/scalar.rs
// ============================================================================
// Module: Scalar Quoting Rules
// Description: Decides which scalars must be quoted in canonical output.
// Purpose: Force string interpretation for ambiguous implicit-typed scalars.
// Dependencies: none
// ============================================================================

//! ## Overview
//! YAML resolves unquoted scalars to booleans, nulls, numbers, and
//! timestamps. Catalog values are always strings, so the emitter quotes any
//! scalar that a parser would reinterpret, using the YAML 1.1 token sets
//! (`yes`/`no`/`on`/`off` count as booleans). The predicate deliberately
//! over-approximates: quoting a scalar that did not strictly need it is
//! harmless and keeps the canonical form stable, while under-quoting would
//! corrupt the catalog on re-read.

// ============================================================================
// SECTION: Quoting Predicate
// ============================================================================

/// YAML 1.1 boolean-like tokens, compared case-insensitively.
const BOOL_TOKENS: &[&str] = &["y", "n", "yes", "no", "true", "false", "on", "off"];

/// Returns `true` when `scalar` must be quoted to stay a string on re-read.
#[must_use]
pub fn needs_quoting(scalar: &str) -> bool {
    if scalar.is_empty() || scalar != scalar.trim() {
        return true;
    }
    if is_bool_like(scalar) || is_null_like(scalar) || is_number_like(scalar) {
        return true;
    }
    if is_timestamp_like(scalar) {
        return true;
    }
    if scalar.starts_with(['!', '&', '*', '?', '|', '>', '%', '@', '`', '"', '\'', '#', '-', ','])
        || scalar.starts_with(['[', ']', '{', '}'])
    {
        return true;
    }
    // A colon anywhere also covers sexagesimal forms such as `1:30:00`.
    scalar.contains(':') || scalar.contains(" #") || scalar.chars().any(char::is_control)
}

/// Returns `true` for YAML 1.1 boolean tokens in any letter case.
fn is_bool_like(scalar: &str) -> bool {
    BOOL_TOKENS.iter().any(|token| scalar.eq_ignore_ascii_case(token))
}

/// Returns `true` for YAML null tokens.
fn is_null_like(scalar: &str) -> bool {
    scalar == "~" || scalar.eq_ignore_ascii_case("null")
}

/// Returns `true` for scalars a YAML parser would resolve as numbers.
fn is_number_like(scalar: &str) -> bool {
    let unsigned = scalar.strip_prefix(['+', '-']).unwrap_or(scalar);
    if unsigned.is_empty() {
        return false;
    }
    if unsigned.eq_ignore_ascii_case(".inf") || unsigned.eq_ignore_ascii_case(".nan") {
        return true;
    }
    if let Some(digits) = unsigned.strip_prefix("0x") {
        if !digits.is_empty() && digits.chars().all(|ch| ch.is_ascii_hexdigit()) {
            return true;
        }
    }
    if let Some(digits) = unsigned.strip_prefix("0o") {
        if !digits.is_empty() && digits.chars().all(|ch| ('0'..='7').contains(&ch)) {
            return true;
        }
    }
    if !unsigned.contains('_') && scalar.parse::<f64>().is_ok() {
        return true;
    }
    // YAML 1.1 permits underscores inside numeric literals.
    unsigned.contains('_')
        && unsigned.chars().all(|ch| ch.is_ascii_digit() || ch == '_' || ch == '.')
        && unsigned.chars().any(|ch| ch.is_ascii_digit())
}

/// Returns `true` for scalars shaped like an ISO 8601 date or timestamp.
fn is_timestamp_like(scalar: &str) -> bool {
    let bytes = scalar.as_bytes();
    if bytes.len() < 10 {
        return false;
    }
    bytes[..4].iter().all(u8::is_ascii_digit)
        && bytes[4] == b'-'
        && bytes[5..7].iter().all(u8::is_ascii_digit)
        && bytes[7] == b'-'
        && bytes[8..10].iter().all(u8::is_ascii_digit)
}

// ============================================================================
// SECTION: Quoting
// ============================================================================

/// Renders `scalar` as a quoted YAML scalar.
///
/// Single quotes are the canonical style; scalars containing single quotes
/// or control characters fall back to double quotes with escapes.
#[must_use]
pub fn quote(scalar: &str) -> String {
    if scalar.contains('\'') || scalar.chars().any(char::is_control) {
        let mut quoted = String::with_capacity(scalar.len() + 2);
        quoted.push('"');
        for ch in scalar.chars() {
            match ch {
                '\\' => quoted.push_str("\\\\"),
                '"' => quoted.push_str("\\\""),
                '\n' => quoted.push_str("\\n"),
                '\r' => quoted.push_str("\\r"),
                '\t' => quoted.push_str("\\t"),
                _ => quoted.push(ch),
            }
        }
        quoted.push('"');
        quoted
    } else {
        format!("'{scalar}'")
    }
}

/// Renders `scalar` for canonical output, quoting only when required.
#[must_use]
pub fn render(scalar: &str) -> String {
    if needs_quoting(scalar) {
        quote(scalar)
    } else {
        scalar.to_string()
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
