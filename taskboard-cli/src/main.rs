//! Taskboard CLI - ordered-card kanban engine on the command line.
//!
//! Commands:
//! - `taskboard move <board> <card> <over>`: apply a drop (or `--preview` drag-over)
//! - `taskboard view <board>`: print grouped, filtered projections
//! - `taskboard check <board>`: validate a snapshot
//!
//! Exit codes:
//! - 0: Success
//! - 1: Error, including an invalid board

use std::io::Write;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskboard_cli::commands::dispatch;
use taskboard_cli::{result_to_exit, Cli, CliError, CliResult, ConfigProvider};

fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("taskboard=debug,taskboard_cli=debug,taskboard_kanban=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stderr)
        .init();

    std::process::exit(result_to_exit(run(cli)));
}

fn run(cli: Cli) -> CliResult<()> {
    let dir = std::env::current_dir().unwrap_or_else(|_| ".".into());
    let config = ConfigProvider::new(dir).with_file(cli.config).load()?;
    let output = dispatch(cli.command, &config)?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(output.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(CliError::output)
}
