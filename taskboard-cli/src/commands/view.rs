//! `taskboard view` - print grouped, filtered projections

use crate::cli::ViewFormat;
use crate::config::CliConfig;
use crate::error::CliResult;
use crate::snapshot::load_board;
use comfy_table::{presets::UTF8_FULL, Table};
use std::fmt::Write;
use std::path::Path;
use taskboard_kanban::{Card, FilterSet, GroupAxis, ProjectedBoard, Projection, Projector};

/// Options of one `view` invocation; `None` falls back to the config
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    pub group_by: Option<GroupAxis>,
    pub format: Option<ViewFormat>,
    pub filters: FilterSet,
}

pub fn run_view(path: &Path, options: &ViewOptions, config: &CliConfig) -> CliResult<String> {
    let board = load_board(path)?;
    let axis = options.group_by.unwrap_or(config.group_by);
    let format = options.format.unwrap_or(config.format);

    let projector = Projector::new(config.view.clone());
    let projection = projector.project(&board, axis, &options.filters);

    let rendered = match format {
        ViewFormat::Table => render_tables(&projection),
        ViewFormat::Json => serde_json::to_string_pretty(&projection)?,
        ViewFormat::Yaml => serde_yaml_ng::to_string(&projection)?,
    };
    Ok(rendered)
}

/// One table per group, headed by the group title
fn render_tables(projection: &Projection<'_>) -> String {
    let mut out = String::new();
    for (key, view) in projection.groups() {
        let title = projection.title(key);
        if !title.is_empty() {
            let _ = writeln!(out, "{} ({})", title, view.card_count());
        }
        if view.card_count() == 0 {
            out.push_str("No cards\n\n");
            continue;
        }
        let _ = writeln!(out, "{}", group_table(view));
        out.push('\n');
    }
    out
}

fn group_table(view: &ProjectedBoard<'_>) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "List", "#", "Card", "Title", "Priority", "Assignees", "Labels", "Due",
    ]);
    for list in &view.lists {
        for card in &list.cards {
            table.add_row(card_row(list.title, card));
        }
    }
    table
}

fn card_row(list_title: &str, card: &Card) -> Vec<String> {
    vec![
        list_title.to_string(),
        card.order.to_string(),
        card.id.to_string(),
        if card.completed {
            format!("{} ✓", card.title)
        } else {
            card.title.clone()
        },
        card.priority.to_string(),
        join(card.assignees.iter()),
        join(card.labels.iter()),
        card.due_date.map(|d| d.to_string()).unwrap_or_default(),
    ]
}

fn join<'a>(values: impl Iterator<Item = &'a String>) -> String {
    values.map(String::as_str).collect::<Vec<_>>().join(", ")
}
