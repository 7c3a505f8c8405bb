//! Taskboard CLI library.
//!
//! The `taskboard` binary is a thin collaborator around `taskboard-kanban`:
//! it reads a board snapshot, applies one move intent or prints projections,
//! and never writes the board back.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod snapshot;

pub use cli::{BoardFormat, Cli, Commands, ViewFormat};
pub use config::{CliConfig, ConfigProvider};
pub use error::{result_to_exit, CliError, CliResult, EXIT_ERROR, EXIT_SUCCESS};
