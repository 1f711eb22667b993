// crates/message-gate-cli/src/main.rs
// ============================================================================
// Module: Message Gate CLI Entry Point
// Description: Command dispatcher for catalog check and cleanup workflows.
// Purpose: Provide a safe, localized CLI for translation catalog maintenance.
// Dependencies: clap, message-gate-cli, message-gate-config, message-gate-core,
// thiserror
// ============================================================================

//! ## Overview
//! The Message Gate CLI normalizes translation catalogs: `check` verifies
//! that every catalog is already canonical without touching disk, while
//! `cleanup` resolves duplicates, synchronizes key sets across languages,
//! and rewrites catalogs in canonical form under the selected conflict
//! policies. All user-facing strings are routed through the i18n catalog to
//! prepare for future localization.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::ArgAction;
use clap::Args;
use clap::CommandFactory;
use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use message_gate_cli::diff::render_context_diff;
use message_gate_cli::i18n::Locale;
use message_gate_cli::i18n::set_locale;
use message_gate_cli::runner::RunError;
use message_gate_cli::runner::RunOptions;
use message_gate_cli::runner::RunReport;
use message_gate_cli::runner::run_pipeline;
use message_gate_cli::t;
use message_gate_config::MessageGateConfig;
use message_gate_core::ChangeStrategy;
use message_gate_core::DepthStrategy;
use message_gate_core::DuplicateStrategy;
use message_gate_core::GateError;
use message_gate_core::PipelineError;
use message_gate_core::StrategySet;
use message_gate_core::SyncStrategy;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Environment variable for CLI locale selection.
const LANG_ENV: &str = "MESSAGE_GATE_LANG";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "message-gate", disable_help_subcommand = true, disable_version_flag = true)]
struct Cli {
    /// Print version information and exit.
    #[arg(long = "version", action = ArgAction::SetTrue, global = true)]
    show_version: bool,
    /// Preferred output language (overrides `MESSAGE_GATE_LANG`).
    #[arg(long, value_enum, value_name = "LANG", global = true)]
    lang: Option<LangArg>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Verify that every catalog is canonical without writing anything.
    Check(CheckCommand),
    /// Resolve conflicts and rewrite catalogs in canonical form.
    Cleanup(CleanupCommand),
}

/// Arguments for the read-only check command.
#[derive(Args, Debug)]
struct CheckCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Maximum nesting depth for rebuilt catalogs (overrides config).
    #[arg(long, value_name = "DEPTH")]
    depth: Option<u32>,
    /// Indentation width for canonical output (overrides config).
    #[arg(long, value_name = "WIDTH")]
    indent: Option<usize>,
}

/// Arguments for the cleanup command.
#[derive(Args, Debug)]
struct CleanupCommand {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Maximum nesting depth for rebuilt catalogs (overrides config).
    #[arg(long, value_name = "DEPTH")]
    depth: Option<u32>,
    /// Indentation width for canonical output (overrides config).
    #[arg(long, value_name = "WIDTH")]
    indent: Option<usize>,
    /// Policy for duplicate key declarations within one catalog.
    #[arg(
        long = "duplicate-key",
        alias = "duplicates",
        value_enum,
        value_name = "STRATEGY",
        default_value_t = DuplicateArg::Ask
    )]
    duplicate_key: DuplicateArg,
    /// Policy for keys missing from sibling language catalogs.
    #[arg(long, value_enum, value_name = "STRATEGY", default_value_t = SyncArg::Ask)]
    sync: SyncArg,
    /// Policy for leaf-versus-branch collisions while nesting keys.
    #[arg(
        long = "depth-strategy",
        alias = "depth-conflicts",
        value_enum,
        value_name = "STRATEGY",
        default_value_t = DepthArg::Join
    )]
    depth_strategy: DepthArg,
    /// Policy for applying detected differences to disk.
    #[arg(long, value_enum, value_name = "STRATEGY", default_value_t = ChangeArg::Ask)]
    changes: ChangeArg,
}

// ============================================================================
// SECTION: Argument Enums
// ============================================================================

/// Supported CLI language selections.
#[derive(ValueEnum, Copy, Clone, Debug)]
enum LangArg {
    /// English.
    En,
    /// Catalan.
    Ca,
}

impl From<LangArg> for Locale {
    fn from(value: LangArg) -> Self {
        match value {
            LangArg::En => Self::En,
            LangArg::Ca => Self::Ca,
        }
    }
}

/// Duplicate strategy selections.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum DuplicateArg {
    /// Fail when any key carries more than one value.
    Fail,
    /// Keep the first declared value.
    First,
    /// Keep the last declared value.
    Last,
    /// Interactive resolution (not implemented).
    Ask,
}

impl From<DuplicateArg> for DuplicateStrategy {
    fn from(value: DuplicateArg) -> Self {
        match value {
            DuplicateArg::Fail => Self::Fail,
            DuplicateArg::First => Self::First,
            DuplicateArg::Last => Self::Last,
            DuplicateArg::Ask => Self::Ask,
        }
    }
}

/// Sync strategy selections.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum SyncArg {
    /// Insert the key text itself as a placeholder for missing keys.
    UseKey,
    /// Leave missing keys missing.
    Ignore,
    /// Fail on the first key absent from any sibling catalog.
    Fail,
    /// Interactive resolution (not implemented).
    Ask,
}

impl From<SyncArg> for SyncStrategy {
    fn from(value: SyncArg) -> Self {
        match value {
            SyncArg::UseKey => Self::UseKey,
            SyncArg::Ignore => Self::Ignore,
            SyncArg::Fail => Self::Fail,
            SyncArg::Ask => Self::Ask,
        }
    }
}

/// Depth strategy selections.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum DepthArg {
    /// Glue the colliding path portion back into a flat composite segment.
    Join,
    /// Fail on the first collision.
    Fail,
    /// Interactive resolution (not implemented).
    Ask,
}

impl From<DepthArg> for DepthStrategy {
    fn from(value: DepthArg) -> Self {
        match value {
            DepthArg::Join => Self::Join,
            DepthArg::Fail => Self::Fail,
            DepthArg::Ask => Self::Ask,
        }
    }
}

/// Change strategy selections.
#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
enum ChangeArg {
    /// Fail without writing anything.
    Fail,
    /// Replace file content with the canonical text.
    Overwrite,
    /// Show the diff, then fail (interactive confirmation not implemented).
    Ask,
}

impl From<ChangeArg> for ChangeStrategy {
    fn from(value: ChangeArg) -> Self {
        match value {
            ChangeArg::Fail => Self::Fail,
            ChangeArg::Overwrite => Self::Overwrite,
            ChangeArg::Ask => Self::Ask,
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// CLI error wrapper for localized error messages.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`] from a localized message.
    const fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

/// CLI result alias for fallible operations.
type CliResult<T> = Result<T, CliError>;

// ============================================================================
// SECTION: Entry Point
// ============================================================================

/// CLI entry point returning an exit code.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => emit_error(&err.to_string()),
    }
}

/// Executes the CLI command dispatcher.
fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let env_lang = std::env::var(LANG_ENV).ok();
    let locale = resolve_locale(cli.lang, env_lang.as_deref())?;
    set_locale(locale);
    if locale != Locale::En {
        write_stderr_line(&t!("i18n.disclaimer.machine_translated"))
            .map_err(|err| CliError::new(output_error("stderr", &err)))?;
    }

    if cli.show_version {
        let version = env!("CARGO_PKG_VERSION");
        write_stdout_line(&t!("main.version", version = version))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }

    let Some(command) = cli.command else {
        show_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    match command {
        Commands::Check(command) => command_check(&command),
        Commands::Cleanup(command) => command_cleanup(&command),
    }
}

// ============================================================================
// SECTION: Check Command
// ============================================================================

/// Executes the `check` command.
fn command_check(command: &CheckCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let options = RunOptions {
        strategies: StrategySet::checking(),
        depth: command.depth.unwrap_or(config.depth),
        indent: command.indent.unwrap_or(config.indent),
    };
    let report = execute_run(&config, &options)?;
    if report.catalogs == 0 {
        write_stdout_line(&t!("run.no_catalogs"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    write_stdout_line(&t!(
        "check.ok",
        catalogs = report.catalogs,
        domains = report.domains
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Cleanup Command
// ============================================================================

/// Executes the `cleanup` command.
fn command_cleanup(command: &CleanupCommand) -> CliResult<ExitCode> {
    let config = load_config(command.config.as_deref())?;
    let options = RunOptions {
        strategies: StrategySet {
            duplicates: command.duplicate_key.into(),
            sync: command.sync.into(),
            depth: command.depth_strategy.into(),
            changes: command.changes.into(),
        },
        depth: command.depth.unwrap_or(config.depth),
        indent: command.indent.unwrap_or(config.indent),
    };
    let report = execute_run(&config, &options)?;
    if report.catalogs == 0 {
        write_stdout_line(&t!("run.no_catalogs"))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
        return Ok(ExitCode::SUCCESS);
    }
    report_cleanup(&report)?;
    Ok(ExitCode::SUCCESS)
}

/// Prints the per-file rewrite lines and the cleanup summary.
fn report_cleanup(report: &RunReport) -> CliResult<()> {
    for path in &report.rewritten {
        write_stdout_line(&t!("cleanup.rewrote", path = path.display()))
            .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    }
    write_stdout_line(&t!(
        "cleanup.ok",
        catalogs = report.catalogs,
        domains = report.domains,
        rewritten = report.rewritten.len()
    ))
    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Run Helpers
// ============================================================================

/// Loads configuration, localizing the failure message.
fn load_config(path: Option<&std::path::Path>) -> CliResult<MessageGateConfig> {
    MessageGateConfig::load(path)
        .map_err(|err| CliError::new(t!("config.load_failed", error = err)))
}

/// Runs the pipeline and localizes failures, rendering the pending diff when
/// the interactive change strategy detects a difference.
fn execute_run(config: &MessageGateConfig, options: &RunOptions) -> CliResult<RunReport> {
    match run_pipeline(config, options) {
        Ok(report) => Ok(report),
        Err(RunError::Discovery(err)) => {
            Err(CliError::new(t!("discovery.failed", error = err)))
        }
        Err(RunError::Domain {
            domain,
            source,
        }) => {
            if let PipelineError::Gate(GateError::Unimplemented {
                ref file,
                ref current,
                ref proposed,
            }) = source
            {
                let rendered = render_context_diff(
                    &t!("diff.label.original", path = file.display()),
                    &t!("diff.label.proposed", path = file.display()),
                    current,
                    proposed,
                );
                write_stdout_bytes(rendered.as_bytes())
                    .map_err(|err| CliError::new(output_error("stdout", &err)))?;
            }
            Err(CliError::new(t!("run.domain_failed", domain = domain, error = source)))
        }
    }
}

/// Resolves the CLI locale from flags or environment.
fn resolve_locale(lang: Option<LangArg>, env_lang: Option<&str>) -> CliResult<Locale> {
    if let Some(lang) = lang {
        return Ok(lang.into());
    }
    if let Some(value) = env_lang {
        return Locale::parse(value).ok_or_else(|| {
            CliError::new(t!("i18n.lang.invalid_env", env = LANG_ENV, value = value))
        });
    }
    Ok(Locale::En)
}

/// Prints top-level help when no subcommand is provided.
fn show_help() -> CliResult<()> {
    let mut command = Cli::command();
    command.print_help().map_err(|err| CliError::new(output_error("stdout", &err)))?;
    write_stdout_line("").map_err(|err| CliError::new(output_error("stdout", &err)))?;
    Ok(())
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes raw bytes to stdout without adding a newline.
fn write_stdout_bytes(bytes: &[u8]) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    stdout.write_all(bytes)
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Formats a localized output error message.
fn output_error(stream: &str, error: &std::io::Error) -> String {
    t!("output.write_failed", stream = stream, error = error)
}

/// Emits an error message to stderr and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
