// crates/message-gate-config/src/lib.rs
// ============================================================================
// Module: Message Gate Config
// Description: Configuration model, validation, and catalog discovery.
// Purpose: Locate catalog files and carry run defaults for the pipeline.
// Dependencies: message-gate-core, serde, thiserror, toml
// ============================================================================

//! ## Overview
//! Configuration is a small TOML file naming the search roots that hold
//! translation catalogs plus the default nesting depth and indent width.
//! Loading is strict and fail-closed: bounded path lengths, a file size
//! cap, UTF-8 required, unknown fields rejected. Discovery is an explicit
//! function from a validated config to [`message_gate_core::DomainGroup`]
//! value objects, fully decoupled from the resolution pipeline.

// ============================================================================
// SECTION: Modules
// ============================================================================

mod config;
pub mod discovery;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::CONFIG_PATH_ENV;
pub use config::ConfigError;
pub use config::MessageGateConfig;
pub use discovery::DiscoveryError;
pub use discovery::discover_domain_groups;
