//! Error types for the taskboard CLI

use std::path::PathBuf;
use taskboard_kanban::KanbanError;
use thiserror::Error;

/// Exit code for a successful run
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for any failure, including an invalid board under `check`
pub const EXIT_ERROR: i32 = 1;

/// Result type for CLI operations
pub type CliResult<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The engine rejected the board or the intent
    #[error(transparent)]
    Kanban(#[from] KanbanError),

    /// Configuration could not be loaded or extracted
    #[error("Failed to load configuration: {source}")]
    Config {
        #[source]
        source: Box<figment::Error>,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported file format for {path}: expected one of {expected}")]
    UnsupportedFormat {
        path: PathBuf,
        expected: &'static str,
    },

    #[error("Failed to write output: {0}")]
    Output(String),
}

impl CliError {
    pub fn parse(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub fn output(message: impl ToString) -> Self {
        Self::Output(message.to_string())
    }

    /// Exit code the binary returns for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }
}

impl From<figment::Error> for CliError {
    fn from(error: figment::Error) -> Self {
        Self::Config {
            source: Box::new(error),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(error: serde_json::Error) -> Self {
        Self::output(error)
    }
}

impl From<serde_yaml_ng::Error> for CliError {
    fn from(error: serde_yaml_ng::Error) -> Self {
        Self::output(error)
    }
}

/// Convert a command result to an exit code, reporting the error on stderr
pub fn result_to_exit<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}
