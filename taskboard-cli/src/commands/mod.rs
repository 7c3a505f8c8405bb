//! Subcommand implementations. Each returns its rendered output; printing is
//! left to the binary.

mod check;
mod mv;
mod view;

pub use check::run_check;
pub use mv::{run_move, MoveReport};
pub use view::{run_view, ViewOptions};

use crate::cli::Commands;
use crate::config::CliConfig;
use crate::error::CliResult;
use taskboard_kanban::FilterSet;

/// Route a parsed subcommand to its handler
pub fn dispatch(command: Commands, config: &CliConfig) -> CliResult<String> {
    match command {
        Commands::Move {
            board,
            card,
            over,
            preview,
            format,
        } => run_move(&board, &card, &over, preview, format, config),
        Commands::View {
            board,
            group_by,
            search,
            priority,
            category,
            status,
            format,
        } => {
            let options = ViewOptions {
                group_by,
                format,
                filters: FilterSet {
                    search_term: search,
                    priority,
                    category,
                    status,
                },
            };
            run_view(&board, &options, config)
        }
        Commands::Check { board } => run_check(&board),
    }
}
