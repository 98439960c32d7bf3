// crates/dis-samples-cli/src/main.rs
// ============================================================================
// Module: DIS Samples CLI Entry Point
// Description: Command dispatcher for the DIS sample scenarios.
// Purpose: List scenarios and run them against a configured service.
// Dependencies: clap, dis-config, dis-samples, thiserror, tracing,
//               tracing-subscriber
// ============================================================================

//! ## Overview
//! `dis-samples list` prints every scenario name. `dis-samples run` loads the
//! configuration, connects to the service with the static bearer token and
//! runs the named scenarios in order. A failed scenario is logged and the
//! next one still runs; only configuration and setup failures change the exit
//! code.

// ============================================================================
// SECTION: Modules
// ============================================================================


// ============================================================================
// SECTION: Imports
// ============================================================================

use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use dis_config::SamplesConfig;
use dis_samples::SampleEnv;
use dis_samples::SampleRunner;
use dis_samples::ScenarioKind;
use dis_samples::harness::connect;
use thiserror::Error;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Log filter used when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "info";

// ============================================================================
// SECTION: CLI Types
// ============================================================================

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(name = "dis-samples", version, disable_help_subcommand = true)]
struct Cli {
    /// Configuration file (defaults to `DIS_SAMPLES_CONFIG`, then `dis-samples.toml`).
    #[arg(long, value_name = "PATH", global = true)]
    config: Option<PathBuf>,
    /// Selected subcommand to execute.
    #[command(subcommand)]
    command: Commands,
}

/// Supported CLI subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print every scenario name.
    List,
    /// Run scenarios against the configured service.
    Run(RunCommand),
}

/// Arguments of `run`.
#[derive(clap::Args, Debug)]
struct RunCommand {
    /// Scenario names, as printed by `list`.
    #[arg(value_name = "SCENARIO", value_parser = parse_scenario, required_unless_present = "all")]
    scenarios: Vec<ScenarioKind>,
    /// Run every scenario.
    #[arg(long, conflicts_with = "scenarios")]
    all: bool,
}

/// CLI error wrapper for user-facing failures.
#[derive(Debug, Error)]
#[error("{message}")]
struct CliError {
    /// Human-readable error message.
    message: String,
}

impl CliError {
    /// Constructs a new [`CliError`].
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
    match cli.command {
        Commands::List => command_list(),
        Commands::Run(command) => {
            init_tracing()?;
            command_run(cli.config.as_deref(), &command)
        }
    }
}

// ============================================================================
// SECTION: Commands
// ============================================================================

/// Prints every scenario name, one per line.
fn command_list() -> CliResult<ExitCode> {
    for kind in ScenarioKind::ALL {
        write_stdout_line(kind.name())
            .map_err(|err| CliError::new(format!("failed to write stdout: {err}")))?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Runs the selected scenarios and logs a summary.
fn command_run(config_path: Option<&Path>, command: &RunCommand) -> CliResult<ExitCode> {
    let config = SamplesConfig::load(config_path)
        .map_err(|err| CliError::new(err.to_string()))?;
    let client = connect(&config, &config.dot_authentication_token)
        .map_err(|err| CliError::new(err.to_string()))?;
    let env = SampleEnv::from_config(config).map_err(|err| CliError::new(err.to_string()))?;
    let runner = SampleRunner::new(client, env);

    let selected = selected_scenarios(command);
    let mut failed = 0_usize;
    for kind in &selected {
        if !runner.run(*kind).is_completed() {
            failed += 1;
        }
    }
    if failed == 0 {
        info!(total = selected.len(), "all scenarios completed");
    } else {
        warn!(total = selected.len(), failed, "some scenarios stopped early");
    }
    Ok(ExitCode::SUCCESS)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Parses a scenario name.
fn parse_scenario(name: &str) -> Result<ScenarioKind, String> {
    ScenarioKind::from_name(name)
        .ok_or_else(|| format!("unknown scenario `{name}`; run `dis-samples list`"))
}

/// Returns the scenarios a `run` invocation selects, in order.
fn selected_scenarios(command: &RunCommand) -> Vec<ScenarioKind> {
    if command.all { ScenarioKind::ALL.to_vec() } else { command.scenarios.clone() }
}

/// Installs the global fmt subscriber.
fn init_tracing() -> CliResult<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|err| CliError::new(format!("failed to initialize logging: {err}")))
}

// ============================================================================
// SECTION: Output Helpers
// ============================================================================

/// Writes a single line to stdout.
fn write_stdout_line(message: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout();
    writeln!(&mut stdout, "{message}")
}

/// Writes a single line to stderr.
fn write_stderr_line(message: &str) -> std::io::Result<()> {
    let mut stderr = std::io::stderr();
    writeln!(&mut stderr, "{message}")
}

/// Emits an error message and returns a failure exit code.
fn emit_error(message: &str) -> ExitCode {
    let _ = write_stderr_line(message);
    ExitCode::FAILURE
}
