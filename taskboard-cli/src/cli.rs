//! CLI definition for the taskboard command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use taskboard_kanban::GroupAxis;

/// Output format for `taskboard view`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewFormat {
    /// One table per group
    #[default]
    Table,
    Json,
    Yaml,
}

/// Output format for `taskboard move`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum BoardFormat {
    #[default]
    Yaml,
    Json,
}

/// Taskboard - ordered-card kanban engine
///
/// Loads a board snapshot, applies drag-and-drop intents and prints grouped,
/// filtered views. Board files are never written back.
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Taskboard - ordered-card kanban engine")]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Configuration file, used instead of taskboard.{toml,yaml,json} in the working directory
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Drop a card onto another card or onto a list and print the new board
    Move {
        /// Board snapshot (.yaml, .yml or .json)
        board: PathBuf,
        /// Id of the card being dragged
        card: String,
        /// Card id, or list marker such as column-done
        over: String,
        /// Treat the intent as a drag-over instead of a drop
        #[arg(long)]
        preview: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = BoardFormat::Yaml)]
        format: BoardFormat,
    },
    /// Print the board split by a grouping axis with filters applied
    View {
        /// Board snapshot (.yaml, .yml or .json)
        board: PathBuf,
        /// Grouping axis: none, priority, assignee or label
        #[arg(short, long)]
        group_by: Option<GroupAxis>,
        /// Case-insensitive text to look for in title and description
        #[arg(short, long)]
        search: Option<String>,
        /// Priority filter: all, high, medium or low
        #[arg(long)]
        priority: Option<String>,
        /// Category filter, e.g. ux or research
        #[arg(long)]
        category: Option<String>,
        /// List id filter
        #[arg(long)]
        status: Option<String>,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<ViewFormat>,
    },
    /// Validate a board snapshot's ordering and ownership rules
    Check {
        /// Board snapshot (.yaml, .yml or .json)
        board: PathBuf,
    },
}
