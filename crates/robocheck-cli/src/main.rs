//! Command-line front end for the Robocheck action validator.
//!
//! # Commands
//!
//! - `check <ACTION>...` -- validate actions one after another against a
//!   single world and print each status.
//! - `verify <FILE>` -- replay a sequence file (one action per line, or a
//!   `{"actions": [...]}` JSON request) from a fresh world and print the
//!   report.
//! - `actions` -- list the action catalog.
//!
//! # Startup Sequence
//!
//! 1. Parse arguments
//! 2. Load configuration (`robocheck.yaml`, optional unless `--config` given)
//! 3. Initialize structured logging (tracing) on stderr
//! 4. Run the command

mod error;
mod output;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use robocheck_core::{
    LogFormat, LoggingConfig, SequenceEntry, SequenceVerifier, VerifierConfig, load_sequence,
    parse_request,
};
use robocheck_rules::Validator;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::ParseError;

use crate::error::CliError;

/// Config file read when `--config` is not given.
const DEFAULT_CONFIG_PATH: &str = "robocheck.yaml";

/// Filter used when the configured one does not parse.
const FALLBACK_LOG_LEVEL: &str = "info";

#[derive(Parser, Debug)]
#[command(name = "robocheck", version, about = "Robot action precondition validator")]
struct Cli {
    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates actions in order against one world.
    Check {
        /// Action identifiers, matched exactly.
        #[arg(required = true)]
        actions: Vec<String>,
    },
    /// Verifies a sequence file from a fresh world.
    Verify {
        /// Sequence text file, or a JSON request when the extension is `.json`.
        file: PathBuf,
        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Lists known actions with their preconditions and battery cost.
    Actions,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            error!(error = %err, "robocheck failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging);
    info!(level = config.logging.level, "Configuration loaded");

    match cli.command {
        Commands::Check { actions } => check(&config, &actions),
        Commands::Verify { file, json } => verify(&config, &file, json),
        Commands::Actions => {
            print!("{}", output::render_catalog(&robocheck_rules::catalog()));
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Load the explicit config file, or the default one if it exists.
fn load_config(path: Option<&Path>) -> Result<VerifierConfig, CliError> {
    if let Some(path) = path {
        return Ok(VerifierConfig::from_file(path)?);
    }
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    if default_path.exists() {
        return Ok(VerifierConfig::from_file(default_path)?);
    }
    let mut config = VerifierConfig::default();
    config.logging.apply_env_overrides();
    Ok(config)
}

fn init_logging(logging: &LoggingConfig) {
    let (filter, rejected) = log_filter(&logging.level);
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);
    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
    if let Some(err) = rejected {
        warn!(
            level = logging.level,
            fallback = FALLBACK_LOG_LEVEL,
            error = %err,
            "Invalid log filter, using fallback"
        );
    }
}

/// Parse `level`, falling back to [`FALLBACK_LOG_LEVEL`] and handing back
/// the parse error so it can be reported once logging is up.
fn log_filter(level: &str) -> (EnvFilter, Option<ParseError>) {
    match EnvFilter::try_new(level) {
        Ok(filter) => (filter, None),
        Err(err) => (EnvFilter::new(FALLBACK_LOG_LEVEL), Some(err)),
    }
}

fn check(config: &VerifierConfig, actions: &[String]) -> Result<ExitCode, CliError> {
    let mut validator = Validator::with_world(config.world.initial_world()?);
    let mut all_valid = true;
    for action in actions {
        let status = validator.validate(action);
        all_valid &= status.is_valid();
        println!("{action}: {status}");
    }
    println!("world: {}", validator.world());
    Ok(exit_code(all_valid))
}

fn verify(config: &VerifierConfig, file: &Path, json: bool) -> Result<ExitCode, CliError> {
    let entries = read_entries(file)?;
    info!(file = %file.display(), entries = entries.len(), "Sequence loaded");

    let verifier = SequenceVerifier::new(&config.world)?;
    let report = verifier.verify(&entries);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", output::render_report(&report));
    }
    Ok(exit_code(report.is_valid()))
}

fn read_entries(file: &Path) -> Result<Vec<SequenceEntry>, CliError> {
    let is_json = file
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        let body = std::fs::read_to_string(file).map_err(robocheck_core::SequenceError::from)?;
        return Ok(parse_request(&body)?);
    }
    Ok(load_sequence(file)?
        .into_iter()
        .map(SequenceEntry::from)
        .collect())
}

const fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
