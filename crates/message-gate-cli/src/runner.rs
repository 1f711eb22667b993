// crates/message-gate-cli/src/runner.rs
// ============================================================================
// Module: Pipeline Runner
// Description: Drives discovery and per-domain pipeline processing.
// Purpose: Turn a loaded configuration and strategy set into a run report.
// Dependencies: message-gate-core, message-gate-config, message-gate-yaml,
// thiserror, crate::store
// ============================================================================

//! ## Overview
//! The runner is the bridge between the CLI surface and the resolution
//! pipeline: it discovers domain groups under the configured search roots,
//! processes each group with one [`Pipeline`] instance, and accumulates a
//! [`RunReport`] of how many catalogs were inspected and which were
//! rewritten. The first failing domain aborts the run; rewrites already
//! applied to earlier domains are kept.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::path::PathBuf;

use message_gate_config::DiscoveryError;
use message_gate_config::MessageGateConfig;
use message_gate_config::discover_domain_groups;
use message_gate_core::GateOutcome;
use message_gate_core::Pipeline;
use message_gate_core::PipelineError;
use message_gate_core::StrategySet;
use message_gate_yaml::YamlCodec;
use thiserror::Error;

use crate::store::FileCatalogStore;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Runner errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum RunError {
    /// Catalog discovery failed before any domain was processed.
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),
    /// A domain group failed in one of the pipeline stages.
    #[error("domain {domain}: {source}")]
    Domain {
        /// Domain whose processing failed.
        domain: String,
        /// Underlying pipeline failure.
        source: PipelineError,
    },
}

// ============================================================================
// SECTION: Options and Report
// ============================================================================

/// Effective settings for one run, after flags override configuration.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    /// Conflict policies for every stage.
    pub strategies: StrategySet,
    /// Maximum number of dot-splits when rebuilding nested structure.
    pub depth: u32,
    /// Indentation width for canonical serialization.
    pub indent: usize,
}

/// Aggregate outcome of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Number of domain groups processed.
    pub domains: usize,
    /// Number of catalogs processed across all groups.
    pub catalogs: usize,
    /// Paths of catalogs rewritten on disk, in processing order.
    pub rewritten: Vec<PathBuf>,
}

// ============================================================================
// SECTION: Runner
// ============================================================================

/// Discovers domain groups and processes each one through the pipeline.
///
/// # Errors
///
/// Returns [`RunError::Discovery`] when a search root cannot be scanned and
/// [`RunError::Domain`] for the first domain group whose processing fails.
pub fn run_pipeline(
    config: &MessageGateConfig,
    options: &RunOptions,
) -> Result<RunReport, RunError> {
    let groups = discover_domain_groups(config)?;
    let pipeline = Pipeline::new(options.strategies, options.depth, options.indent);
    let codec = YamlCodec::new();
    let mut store = FileCatalogStore::new();

    let mut report = RunReport::default();
    for group in &groups {
        let reports =
            pipeline
                .process_group(group, &codec, &mut store)
                .map_err(|source| RunError::Domain {
                    domain: group.domain.clone(),
                    source,
                })?;
        report.domains += 1;
        report.catalogs += reports.len();
        for catalog in reports {
            if catalog.outcome == GateOutcome::Rewritten {
                report.rewritten.push(catalog.file.path);
            }
        }
    }
    Ok(report)
}
