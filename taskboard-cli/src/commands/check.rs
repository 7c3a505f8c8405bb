//! `taskboard check` - validate a snapshot

use crate::error::CliResult;
use crate::snapshot::load_board;
use std::path::Path;

/// Load and validate `path`; a broken board surfaces as the error
pub fn run_check(path: &Path) -> CliResult<String> {
    let board = load_board(path)?;
    Ok(format!(
        "✓ {}: {} lists, {} cards\n",
        if board.name.is_empty() {
            path.display().to_string()
        } else {
            board.name.clone()
        },
        board.lists.len(),
        board.card_count()
    ))
}
