//! Duplicate and sync resolution tests for message-gate-core.
// crates/message-gate-core/tests/resolution.rs
// =============================================================================
// Module: Resolution Stage Tests
// Description: Validate duplicate collapsing and cross-language key sync.
// Purpose: Ensure every strategy resolves or fails exactly as selected.
// =============================================================================

use std::collections::BTreeMap;
use std::path::PathBuf;

use message_gate_core::DuplicateError;
use message_gate_core::DuplicateMap;
use message_gate_core::DuplicateStrategy;
use message_gate_core::FlatKey;
use message_gate_core::ResolvedMap;
use message_gate_core::SyncError;
use message_gate_core::SyncStrategy;
use message_gate_core::resolve_duplicates;
use message_gate_core::resolve_sync;

type TestResult = Result<(), String>;

fn duplicate_fixture() -> DuplicateMap {
    let mut messages = DuplicateMap::new();
    messages.insert(
        FlatKey::new("greeting"),
        vec!["Hello".to_string(), "Hi".to_string()],
    );
    messages.insert(FlatKey::new("farewell"), vec!["Bye".to_string()]);
    messages
}

fn resolved(entries: &[(&str, &str)]) -> ResolvedMap {
    entries
        .iter()
        .map(|(key, value)| (FlatKey::new(*key), (*value).to_string()))
        .collect()
}

// ============================================================================
// SECTION: Duplicate Resolution
// ============================================================================

#[test]
fn duplicates_first_keeps_declaration_order_winner() -> TestResult {
    let messages = resolve_duplicates(DuplicateStrategy::First, &duplicate_fixture())
        .map_err(|err| err.to_string())?;
    if messages.get(&FlatKey::new("greeting")).map(String::as_str) != Some("Hello") {
        return Err("expected first declared value".to_string());
    }
    if messages.get(&FlatKey::new("farewell")).map(String::as_str) != Some("Bye") {
        return Err("expected singleton value to pass through".to_string());
    }
    Ok(())
}

#[test]
fn duplicates_last_keeps_final_winner() -> TestResult {
    let messages = resolve_duplicates(DuplicateStrategy::Last, &duplicate_fixture())
        .map_err(|err| err.to_string())?;
    if messages.get(&FlatKey::new("greeting")).map(String::as_str) != Some("Hi") {
        return Err("expected last declared value".to_string());
    }
    Ok(())
}

#[test]
fn duplicates_fail_reports_key_and_values() -> TestResult {
    match resolve_duplicates(DuplicateStrategy::Fail, &duplicate_fixture()) {
        Err(DuplicateError::Conflict {
            key,
            values,
        }) => {
            if key.as_str() != "greeting" {
                return Err(format!("unexpected conflict key {key}"));
            }
            if values != vec!["Hello".to_string(), "Hi".to_string()] {
                return Err(format!("unexpected conflict values {values:?}"));
            }
            Ok(())
        }
        other => Err(format!("expected conflict, got {other:?}")),
    }
}

#[test]
fn duplicates_fail_passes_conflict_free_catalogs() -> TestResult {
    let mut messages = DuplicateMap::new();
    messages.insert(FlatKey::new("greeting"), vec!["Hello".to_string()]);
    let resolved = resolve_duplicates(DuplicateStrategy::Fail, &messages)
        .map_err(|err| err.to_string())?;
    if resolved.len() != 1 {
        return Err("expected single resolved entry".to_string());
    }
    Ok(())
}

#[test]
fn duplicates_ask_is_unimplemented_even_without_conflicts() -> TestResult {
    let mut messages = DuplicateMap::new();
    messages.insert(FlatKey::new("greeting"), vec!["Hello".to_string()]);
    match resolve_duplicates(DuplicateStrategy::Ask, &messages) {
        Err(DuplicateError::Unimplemented) => Ok(()),
        other => Err(format!("expected unimplemented, got {other:?}")),
    }
}

// ============================================================================
// SECTION: Sync Resolution
// ============================================================================

fn sync_fixture() -> BTreeMap<PathBuf, ResolvedMap> {
    let mut maps = BTreeMap::new();
    maps.insert(
        PathBuf::from("messages.en.yml"),
        resolved(&[("greeting", "Hello"), ("farewell", "Bye")]),
    );
    maps.insert(PathBuf::from("messages.nl.yml"), resolved(&[("greeting", "Hallo")]));
    maps
}

#[test]
fn sync_use_key_inserts_key_text_placeholders() -> TestResult {
    let synced =
        resolve_sync(SyncStrategy::UseKey, &sync_fixture()).map_err(|err| err.to_string())?;
    let dutch = synced
        .get(&PathBuf::from("messages.nl.yml"))
        .ok_or("missing dutch catalog")?;
    if dutch.get(&FlatKey::new("farewell")).map(String::as_str) != Some("farewell") {
        return Err("expected key text placeholder".to_string());
    }
    if dutch.get(&FlatKey::new("greeting")).map(String::as_str) != Some("Hallo") {
        return Err("existing values must be preserved".to_string());
    }
    Ok(())
}

#[test]
fn sync_ignore_leaves_key_sets_untouched() -> TestResult {
    let synced =
        resolve_sync(SyncStrategy::Ignore, &sync_fixture()).map_err(|err| err.to_string())?;
    let dutch = synced
        .get(&PathBuf::from("messages.nl.yml"))
        .ok_or("missing dutch catalog")?;
    if dutch.len() != 1 {
        return Err(format!("expected one key, got {}", dutch.len()));
    }
    Ok(())
}

#[test]
fn sync_fail_names_missing_key_and_file() -> TestResult {
    match resolve_sync(SyncStrategy::Fail, &sync_fixture()) {
        Err(SyncError::Mismatch {
            key,
            file,
        }) => {
            if key.as_str() != "farewell" {
                return Err(format!("unexpected missing key {key}"));
            }
            if file != PathBuf::from("messages.nl.yml") {
                return Err(format!("unexpected file {file:?}"));
            }
            Ok(())
        }
        other => Err(format!("expected mismatch, got {other:?}")),
    }
}

#[test]
fn sync_already_synchronized_passes_every_strategy() -> TestResult {
    let mut maps = BTreeMap::new();
    maps.insert(PathBuf::from("messages.en.yml"), resolved(&[("greeting", "Hello")]));
    maps.insert(PathBuf::from("messages.nl.yml"), resolved(&[("greeting", "Hallo")]));
    for strategy in [
        SyncStrategy::UseKey,
        SyncStrategy::Ignore,
        SyncStrategy::Fail,
        SyncStrategy::Ask,
    ] {
        let synced = resolve_sync(strategy, &maps)
            .map_err(|err| format!("strategy {strategy} failed: {err}"))?;
        if synced != maps {
            return Err(format!("strategy {strategy} altered synchronized catalogs"));
        }
    }
    Ok(())
}

#[test]
fn sync_ask_is_unimplemented_past_the_fast_path() -> TestResult {
    match resolve_sync(SyncStrategy::Ask, &sync_fixture()) {
        Err(SyncError::Unimplemented) => Ok(()),
        other => Err(format!("expected unimplemented, got {other:?}")),
    }
}

#[test]
fn sync_empty_group_yields_empty_result() -> TestResult {
    let maps = BTreeMap::new();
    let synced = resolve_sync(SyncStrategy::Fail, &maps).map_err(|err| err.to_string())?;
    if !synced.is_empty() {
        return Err("expected empty result".to_string());
    }
    Ok(())
}
