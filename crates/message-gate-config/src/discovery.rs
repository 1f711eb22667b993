// crates/message-gate-config/src/discovery.rs
// ============================================================================
// Module: Catalog Discovery
// Description: Scans search roots and groups catalog files by domain.
// Purpose: Produce explicit domain group value objects for the pipeline.
// Dependencies: message-gate-core, thiserror, crate::config
// ============================================================================

//! ## Overview
//! Discovery scans each configured search root for files named
//! `<domain>.<language>.<ext>` and groups them by domain across roots, so
//! one domain translated under several directories still resolves as a
//! single group. Results are deterministic: groups order by domain name and
//! members by path. Roots that do not exist are skipped, matching the glob
//! semantics discovery replaces; an unreadable existing root is an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use message_gate_core::CatalogFile;
use message_gate_core::DomainGroup;
use thiserror::Error;

use crate::config::MessageGateConfig;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Discovery errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// A search root exists but could not be scanned.
    #[error("failed to scan search root {root:?}: {source}")]
    Scan {
        /// Root that failed to scan.
        root: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
}

// ============================================================================
// SECTION: Discovery
// ============================================================================

/// Length of the language code in catalog filenames.
const LANGUAGE_LEN: usize = 2;

/// Scans the configured search roots and groups catalogs by domain.
///
/// # Errors
///
/// Returns [`DiscoveryError::Scan`] when an existing root cannot be read.
pub fn discover_domain_groups(
    config: &MessageGateConfig,
) -> Result<Vec<DomainGroup>, DiscoveryError> {
    let mut by_domain: BTreeMap<String, Vec<CatalogFile>> = BTreeMap::new();
    for root in &config.search_roots {
        if !root.is_dir() {
            continue;
        }
        let entries = fs::read_dir(root).map_err(|source| DiscoveryError::Scan {
            root: root.clone(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| DiscoveryError::Scan {
                root: root.clone(),
                source,
            })?;
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
                continue;
            };
            if let Some((domain, language)) = parse_catalog_name(name, &config.extension) {
                by_domain
                    .entry(domain.to_string())
                    .or_default()
                    .push(CatalogFile::new(path.clone(), domain, language));
            }
        }
    }
    Ok(by_domain
        .into_iter()
        .map(|(domain, files)| DomainGroup::new(domain, files))
        .collect())
}

/// Parses `<domain>.<language>.<ext>` out of a filename.
///
/// Domain and language are word tokens (letters, digits, underscores); the
/// language is exactly two characters and the extension must match the
/// configured one. Returns `None` for any other filename.
fn parse_catalog_name<'a>(name: &'a str, extension: &str) -> Option<(&'a str, &'a str)> {
    let mut parts = name.split('.');
    let domain = parts.next()?;
    let language = parts.next()?;
    let ext = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    if ext != extension || language.len() != LANGUAGE_LEN {
        return None;
    }
    let word = |token: &str| {
        !token.is_empty() && token.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
    };
    (word(domain) && word(language)).then_some((domain, language))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
