// crates/message-gate-config/src/config.rs
// ============================================================================
// Module: Configuration Model
// Description: TOML configuration with strict load guards and validation.
// Purpose: Carry search roots and run defaults with fail-closed loading.
// Dependencies: serde, thiserror, toml
// ============================================================================

//! ## Overview
//! The configuration names where catalogs live and the serialization
//! defaults the pipeline uses. Loading resolves an explicit path, then the
//! `MESSAGE_GATE_CONFIG` environment variable, then `message-gate.toml` in
//! the working directory; a missing default file yields the built-in
//! defaults, while an explicitly named file must exist. All inputs are
//! untrusted: path lengths, file size, and encoding are bounded before the
//! file is parsed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "MESSAGE_GATE_CONFIG";

/// Default config file name resolved against the working directory.
const DEFAULT_CONFIG_PATH: &str = "message-gate.toml";

/// Upper bound on config file size in bytes.
const MAX_CONFIG_BYTES: u64 = 1_048_576;

/// Upper bound on the whole config path length in bytes.
const MAX_PATH_BYTES: usize = 4_096;

/// Upper bound on a single path component length in bytes.
const MAX_COMPONENT_BYTES: usize = 255;

/// Default search root scanned for catalogs.
const DEFAULT_SEARCH_ROOT: &str = "translations";

/// Default catalog file extension.
const DEFAULT_EXTENSION: &str = "yml";

/// Default maximum nesting depth when rebuilding trees.
const DEFAULT_DEPTH: u32 = 666;

/// Default indentation width for canonical output.
const DEFAULT_INDENT: usize = 4;

/// Largest accepted indentation width.
const MAX_INDENT: usize = 16;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config path exceeds the accepted length bound.
    #[error("config path exceeds max length ({MAX_PATH_BYTES} bytes)")]
    PathTooLong,
    /// One path component exceeds the accepted length bound.
    #[error("config path component too long (over {MAX_COMPONENT_BYTES} bytes)")]
    PathComponentTooLong,
    /// An explicitly named config file does not exist.
    #[error("config file not found: {path:?}")]
    NotFound {
        /// Path that was explicitly requested.
        path: PathBuf,
    },
    /// Config file exceeds the size cap.
    #[error("config file exceeds size limit ({MAX_CONFIG_BYTES} bytes)")]
    TooLarge,
    /// Config file is not valid UTF-8.
    #[error("config file must be utf-8")]
    NotUtf8,
    /// Config file could not be read.
    #[error("failed to read config {path:?}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// Config file could not be parsed as TOML.
    #[error("failed to parse config: {0}")]
    Parse(String),
    /// Config content failed validation.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Model
// ============================================================================

/// Message Gate run configuration.
///
/// # Invariants
/// - `search_roots` is non-empty; `extension` is a non-empty word token;
///   `indent` is within `1..=MAX_INDENT`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct MessageGateConfig {
    /// Directories scanned for catalog files.
    pub search_roots: Vec<PathBuf>,
    /// Catalog file extension, without the leading dot.
    pub extension: String,
    /// Default maximum nesting depth for rebuilt trees.
    pub depth: u32,
    /// Default indentation width for canonical output.
    pub indent: usize,
}

impl Default for MessageGateConfig {
    fn default() -> Self {
        Self {
            search_roots: vec![PathBuf::from(DEFAULT_SEARCH_ROOT)],
            extension: DEFAULT_EXTENSION.to_string(),
            depth: DEFAULT_DEPTH,
            indent: DEFAULT_INDENT,
        }
    }
}

impl MessageGateConfig {
    /// Loads configuration from `path`, the environment override, or the
    /// default location, falling back to built-in defaults when no file
    /// exists at the default location.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the path violates a guard, the file
    /// cannot be read or parsed, or the content fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let env_path = std::env::var(CONFIG_PATH_ENV).ok().map(PathBuf::from);
        let (resolved, explicit) = match (path, env_path) {
            (Some(explicit), _) => (explicit.to_path_buf(), true),
            (None, Some(from_env)) => (from_env, true),
            (None, None) => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
        };

        check_path_bounds(&resolved)?;
        if !resolved.exists() {
            if explicit {
                return Err(ConfigError::NotFound {
                    path: resolved,
                });
            }
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }

        let metadata = fs::metadata(&resolved).map_err(|source| ConfigError::Io {
            path: resolved.clone(),
            source,
        })?;
        if metadata.len() > MAX_CONFIG_BYTES {
            return Err(ConfigError::TooLarge);
        }
        let bytes = fs::read(&resolved).map_err(|source| ConfigError::Io {
            path: resolved.clone(),
            source,
        })?;
        let text = String::from_utf8(bytes).map_err(|_| ConfigError::NotUtf8)?;
        let config: Self =
            toml::from_str(&text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates content bounds and token shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_roots.is_empty() {
            return Err(ConfigError::Invalid("search_roots must not be empty".to_string()));
        }
        if self.extension.is_empty()
            || !self.extension.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        {
            return Err(ConfigError::Invalid(format!(
                "extension must be a non-empty word token, got {:?}",
                self.extension
            )));
        }
        if self.indent == 0 || self.indent > MAX_INDENT {
            return Err(ConfigError::Invalid(format!(
                "indent must be between 1 and {MAX_INDENT}, got {}",
                self.indent
            )));
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Path Guards
// ============================================================================

/// Enforces the path length bounds before any filesystem access.
fn check_path_bounds(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_PATH_BYTES {
        return Err(ConfigError::PathTooLong);
    }
    for component in path.components() {
        if component.as_os_str().len() > MAX_COMPONENT_BYTES {
            return Err(ConfigError::PathComponentTooLong);
        }
    }
    Ok(())
}
