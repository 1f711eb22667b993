//! Pipeline integration tests for message-gate-core.
// crates/message-gate-core/tests/pipeline.rs
// =============================================================================
// Module: Pipeline Tests
// Description: Drive the full pipeline against an in-memory catalog store.
// Purpose: Ensure stage ordering, gating, and sync behave end to end.
// =============================================================================

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use message_gate_core::CatalogFile;
use message_gate_core::CatalogStore;
use message_gate_core::ChangeStrategy;
use message_gate_core::CodecError;
use message_gate_core::DocumentCodec;
use message_gate_core::DomainGroup;
use message_gate_core::DuplicateStrategy;
use message_gate_core::GateError;
use message_gate_core::GateOutcome;
use message_gate_core::MessageNode;
use message_gate_core::MessageTree;
use message_gate_core::Pipeline;
use message_gate_core::PipelineError;
use message_gate_core::StoreError;
use message_gate_core::StrategySet;
use message_gate_core::SyncStrategy;

type TestResult = Result<(), String>;

// ============================================================================
// SECTION: Test Doubles
// ============================================================================

/// In-memory catalog store tracking every write.
#[derive(Debug, Default)]
struct MemoryStore {
    files: BTreeMap<PathBuf, String>,
    writes: usize,
}

impl MemoryStore {
    fn with_file(mut self, path: &str, text: &str) -> Self {
        self.files.insert(PathBuf::from(path), text.to_string());
        self
    }
}

impl CatalogStore for MemoryStore {
    fn load(&self, path: &Path) -> Result<Option<String>, StoreError> {
        Ok(self.files.get(path).cloned())
    }

    fn persist(&mut self, path: &Path, text: &str) -> Result<(), StoreError> {
        self.writes += 1;
        self.files.insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}

/// Line codec for tests: one `dotted.key=value` pair per line.
///
/// Parsing yields a flat tree of dotted leaf names; serialization flattens
/// nested branches back to dotted lines, so canonical text is the sorted
/// line form regardless of nesting depth.
#[derive(Debug, Default)]
struct LineCodec;

impl DocumentCodec for LineCodec {
    fn parse(&self, text: &str) -> Result<MessageTree, CodecError> {
        let mut tree = MessageTree::new();
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let (key, value) = line
                .split_once('=')
                .ok_or_else(|| CodecError::Parse(format!("missing separator in {line:?}")))?;
            tree.root_mut().insert(key.to_string(), MessageNode::Leaf(value.to_string()));
        }
        Ok(tree)
    }

    fn serialize(&self, tree: &MessageTree, _indent: usize) -> String {
        fn flatten(prefix: &str, node: &MessageNode, out: &mut String) {
            match node {
                MessageNode::Leaf(value) => {
                    out.push_str(prefix);
                    out.push('=');
                    out.push_str(value);
                    out.push('\n');
                }
                MessageNode::Branch(children) => {
                    for (name, child) in children {
                        let path = format!("{prefix}.{name}");
                        flatten(&path, child, out);
                    }
                }
            }
        }
        let mut out = String::new();
        for (name, node) in tree.root() {
            flatten(name, node, &mut out);
        }
        out
    }
}

fn group(paths: &[(&str, &str)]) -> DomainGroup {
    let files = paths
        .iter()
        .map(|(path, language)| CatalogFile::new(PathBuf::from(*path), "messages", *language))
        .collect();
    DomainGroup::new("messages", files)
}

fn overwrite_strategies() -> StrategySet {
    StrategySet {
        duplicates: DuplicateStrategy::Fail,
        sync: SyncStrategy::UseKey,
        depth: message_gate_core::DepthStrategy::Join,
        changes: ChangeStrategy::Overwrite,
    }
}

// ============================================================================
// SECTION: Gating
// ============================================================================

#[test]
fn canonical_catalogs_pass_the_checking_run_untouched() -> TestResult {
    let mut store = MemoryStore::default()
        .with_file("messages.en.txt", "farewell=Bye\ngreeting=Hello\n")
        .with_file("messages.nl.txt", "farewell=Doei\ngreeting=Hallo\n");
    let pipeline = Pipeline::new(StrategySet::checking(), 666, 4);
    let reports = pipeline
        .process_group(
            &group(&[("messages.en.txt", "en"), ("messages.nl.txt", "nl")]),
            &LineCodec,
            &mut store,
        )
        .map_err(|err| err.to_string())?;
    if reports.len() != 2 {
        return Err(format!("expected 2 reports, got {}", reports.len()));
    }
    if reports.iter().any(|report| report.outcome != GateOutcome::Unchanged) {
        return Err("expected every catalog unchanged".to_string());
    }
    if store.writes != 0 {
        return Err("checking run must never write".to_string());
    }
    Ok(())
}

#[test]
fn checking_run_reports_drift_without_writing() -> TestResult {
    let mut store = MemoryStore::default().with_file("messages.en.txt", "zzz=1\naaa=2\n");
    let pipeline = Pipeline::new(StrategySet::checking(), 666, 4);
    let result =
        pipeline.process_group(&group(&[("messages.en.txt", "en")]), &LineCodec, &mut store);
    match result {
        Err(PipelineError::Gate(GateError::ChangesDetected {
            file,
        })) => {
            if file != PathBuf::from("messages.en.txt") {
                return Err(format!("unexpected file {file:?}"));
            }
        }
        other => return Err(format!("expected changes detected, got {other:?}")),
    }
    if store.writes != 0 {
        return Err("checking run must never write".to_string());
    }
    Ok(())
}

#[test]
fn overwrite_rewrites_drifted_catalogs_canonically() -> TestResult {
    let mut store = MemoryStore::default().with_file("messages.en.txt", "zzz=1\naaa=2\n");
    let pipeline = Pipeline::new(overwrite_strategies(), 666, 4);
    let reports = pipeline
        .process_group(&group(&[("messages.en.txt", "en")]), &LineCodec, &mut store)
        .map_err(|err| err.to_string())?;
    if reports.first().map(|report| report.outcome) != Some(GateOutcome::Rewritten) {
        return Err("expected a rewrite".to_string());
    }
    let text = store.files.get(&PathBuf::from("messages.en.txt")).ok_or("missing file")?;
    if text != "aaa=2\nzzz=1\n" {
        return Err(format!("unexpected canonical text {text:?}"));
    }
    Ok(())
}

#[test]
fn ask_changes_carries_both_texts_for_the_diff() -> TestResult {
    let mut store = MemoryStore::default().with_file("messages.en.txt", "zzz=1\naaa=2\n");
    let strategies = StrategySet {
        changes: ChangeStrategy::Ask,
        ..overwrite_strategies()
    };
    let pipeline = Pipeline::new(strategies, 666, 4);
    let result =
        pipeline.process_group(&group(&[("messages.en.txt", "en")]), &LineCodec, &mut store);
    match result {
        Err(PipelineError::Gate(GateError::Unimplemented {
            current,
            proposed,
            ..
        })) => {
            if current != "zzz=1\naaa=2\n" {
                return Err(format!("unexpected current text {current:?}"));
            }
            if proposed != "aaa=2\nzzz=1\n" {
                return Err(format!("unexpected proposed text {proposed:?}"));
            }
            Ok(())
        }
        other => Err(format!("expected unimplemented gate, got {other:?}")),
    }
}

// ============================================================================
// SECTION: Sync Across Languages
// ============================================================================

#[test]
fn use_key_sync_creates_missing_keys_in_sibling_catalogs() -> TestResult {
    let mut store = MemoryStore::default()
        .with_file("messages.en.txt", "farewell=Bye\ngreeting=Hello\n")
        .with_file("messages.nl.txt", "greeting=Hallo\n");
    let pipeline = Pipeline::new(overwrite_strategies(), 666, 4);
    pipeline
        .process_group(
            &group(&[("messages.en.txt", "en"), ("messages.nl.txt", "nl")]),
            &LineCodec,
            &mut store,
        )
        .map_err(|err| err.to_string())?;
    let dutch = store.files.get(&PathBuf::from("messages.nl.txt")).ok_or("missing file")?;
    if dutch != "farewell=farewell\ngreeting=Hallo\n" {
        return Err(format!("unexpected dutch text {dutch:?}"));
    }
    Ok(())
}

#[test]
fn missing_files_parse_as_empty_and_are_created_by_sync() -> TestResult {
    let mut store =
        MemoryStore::default().with_file("messages.en.txt", "greeting=Hello\n");
    let pipeline = Pipeline::new(overwrite_strategies(), 666, 4);
    pipeline
        .process_group(
            &group(&[("messages.en.txt", "en"), ("messages.nl.txt", "nl")]),
            &LineCodec,
            &mut store,
        )
        .map_err(|err| err.to_string())?;
    let dutch = store.files.get(&PathBuf::from("messages.nl.txt")).ok_or("file not created")?;
    if dutch != "greeting=greeting\n" {
        return Err(format!("unexpected dutch text {dutch:?}"));
    }
    Ok(())
}

// ============================================================================
// SECTION: Failure Ordering
// ============================================================================

#[test]
fn sync_failure_aborts_before_any_write() -> TestResult {
    let mut store = MemoryStore::default()
        .with_file("messages.en.txt", "zzz=1\naaa=2\n")
        .with_file("messages.nl.txt", "greeting=Hallo\n");
    let strategies = StrategySet {
        sync: SyncStrategy::Fail,
        ..StrategySet::checking()
    };
    let pipeline = Pipeline::new(strategies, 666, 4);
    let result = pipeline.process_group(
        &group(&[("messages.en.txt", "en"), ("messages.nl.txt", "nl")]),
        &LineCodec,
        &mut store,
    );
    match result {
        Err(PipelineError::Sync(_)) => {}
        other => return Err(format!("expected sync failure, got {other:?}")),
    }
    if store.writes != 0 {
        return Err("no write may precede a sync failure".to_string());
    }
    Ok(())
}

#[test]
fn parse_failure_names_the_offending_file() -> TestResult {
    let mut store = MemoryStore::default().with_file("messages.en.txt", "no separator here\n");
    let pipeline = Pipeline::new(StrategySet::checking(), 666, 4);
    let result =
        pipeline.process_group(&group(&[("messages.en.txt", "en")]), &LineCodec, &mut store);
    match result {
        Err(PipelineError::Parse {
            file,
            ..
        }) => {
            if file != PathBuf::from("messages.en.txt") {
                return Err(format!("unexpected file {file:?}"));
            }
            Ok(())
        }
        other => Err(format!("expected parse failure, got {other:?}")),
    }
}
