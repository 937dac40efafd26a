use std::io;
use std::path::Path;
use std::process::ExitCode;

use biblia_core::error::{AnalysisError, SelectionError, StatsError};
use clap::Parser;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod output;
pub mod profile;
pub mod state;

use self::cli::Cli;
use self::commands::handle_command;
use self::output::OutputFormat;
use self::state::AppState;

/// Exit code for a selection the corpus cannot satisfy
const EXIT_BAD_SELECTION: u8 = 2;
/// Exit code for an internal consistency fault (EX_SOFTWARE)
const EXIT_INTERNAL: u8 = 70;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // .env may set RUST_LOG, so it is read before the subscriber exists
    let dotenv = load_dotenv(None);
    init_tracing(cli.log_json);
    if let Err(e) = dotenv {
        tracing::debug!("No .env loaded: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

/// `.env` from the working directory (or its parents), or an explicit file
fn load_dotenv(path: Option<&Path>) -> dotenvy::Result<()> {
    match path {
        Some(path) => dotenvy::from_path(path),
        None => dotenvy::dotenv().map(|_| ()),
    }
}

fn log_filter(var: &str) -> EnvFilter {
    EnvFilter::try_from_env(var).unwrap_or_else(|_| EnvFilter::new("warn"))
}

fn init_tracing(json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(log_filter(EnvFilter::DEFAULT_ENV))
        .with_writer(io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.with_ansi(atty::is(atty::Stream::Stderr)).init();
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = profile::load_config(cli.config.as_deref())?;
    if let Some(path) = &cli.corpus {
        config.corpus.path = path.display().to_string();
    }
    if let Some(language) = cli.language {
        config.analysis.language = language;
    }

    let state = AppState::init(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    handle_command(&state, &cli.command, OutputFormat::from_flag(cli.json), &mut out)
}

/// Selection problems are the user's to fix; anything else is logged as a failure
fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(selection) = selection_error(err) {
        eprintln!("{selection}");
        return ExitCode::from(EXIT_BAD_SELECTION);
    }

    if let Some(stats) = stats_error(err) {
        tracing::error!("Internal consistency fault: {stats}");
        return ExitCode::from(EXIT_INTERNAL);
    }

    tracing::error!("{err:#}");
    eprintln!("error: {err:#}");
    ExitCode::FAILURE
}

fn selection_error(err: &anyhow::Error) -> Option<&SelectionError> {
    err.downcast_ref::<SelectionError>()
        .or_else(|| match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::Selection(e)) => Some(e),
            _ => None,
        })
}

fn stats_error(err: &anyhow::Error) -> Option<&StatsError> {
    err.downcast_ref::<StatsError>()
        .or_else(|| match err.downcast_ref::<AnalysisError>() {
            Some(AnalysisError::Stats(e)) => Some(e),
            _ => None,
        })
}
