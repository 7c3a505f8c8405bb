//! `taskboard move` - apply one drop or drag-over intent

use crate::cli::BoardFormat;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::snapshot::load_board;
use serde::Serialize;
use std::path::Path;
use taskboard_kanban::{Board, BoardSession, CardTransition, MoveIntent};
use tracing::info;

/// What `move` prints: the updated board and the transition, if any
#[derive(Debug, Serialize)]
pub struct MoveReport<'a> {
    pub board: &'a Board,
    pub transition: Option<CardTransition>,
}

/// Load `path`, apply the intent `card` over `over` and render the result
pub fn run_move(
    path: &Path,
    card: &str,
    over: &str,
    preview: bool,
    format: BoardFormat,
    config: &CliConfig,
) -> CliResult<String> {
    let board = load_board(path)?;
    let mut session = BoardSession::with_settings(board, config.view.clone())?;
    let intent = MoveIntent::parse(card, over, &config.view.list_marker_prefix);

    let transition = if preview {
        session.hover(&intent)?
    } else {
        session.apply(&intent)?
    };
    if transition.is_none() {
        info!(card, over, preview, "card stayed in its list");
    }

    let report = MoveReport {
        board: session.board(),
        transition,
    };
    let rendered = match format {
        BoardFormat::Yaml => serde_yaml_ng::to_string(&report)?,
        BoardFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    Ok(rendered)
}
