//! Board snapshot files.
//!
//! A snapshot is YAML (`.yaml`, `.yml`) or JSON (`.json`) and holds the board
//! either nested, with every list carrying its cards, or flat, with columns
//! under `lists` and every card under a top-level `cards` key naming its list
//! through `list_id`. The two shapes cannot be mixed in one file.

use crate::error::{CliError, CliResult};
use serde::Deserialize;
use std::path::Path;
use taskboard_kanban::auto_color::auto_color;
use taskboard_kanban::{Board, Card, KanbanError, List};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapshotFormat {
    Yaml,
    Json,
}

impl SnapshotFormat {
    fn from_path(path: &Path) -> CliResult<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(CliError::UnsupportedFormat {
                path: path.to_path_buf(),
                expected: ".yaml, .yml, .json",
            }),
        }
    }
}

/// A board as stored on disk, before it is checked
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lists: Vec<List>,
    /// Flat card collection, present only in the flat shape
    #[serde(default)]
    pub cards: Option<Vec<Card>>,
}

impl Snapshot {
    /// Read and parse a snapshot file
    pub fn load(path: &Path) -> CliResult<Self> {
        let format = SnapshotFormat::from_path(path)?;
        let text = std::fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot: Snapshot = match format {
            SnapshotFormat::Yaml => {
                serde_yaml_ng::from_str(&text).map_err(|e| CliError::parse(path, e))?
            }
            SnapshotFormat::Json => {
                serde_json::from_str(&text).map_err(|e| CliError::parse(path, e))?
            }
        };
        debug!(path = %path.display(), ?format, lists = snapshot.lists.len(), "loaded snapshot");
        Ok(snapshot)
    }

    /// Turn the snapshot into a canonical board.
    ///
    /// Column `order` comes from file position and missing colors are derived
    /// from the list id. Nested cards with no `list_id` take their list's id;
    /// everything else must already satisfy the board rules. Flat cards go
    /// through [`Board::assemble`], which sorts and renumbers them.
    pub fn into_board(self) -> CliResult<Board> {
        let mut lists = self.lists;
        for (index, list) in lists.iter_mut().enumerate() {
            list.order = index;
            if list.color.is_empty() {
                list.color = auto_color(list.id.as_str()).to_string();
            }
            for card in &mut list.cards {
                if card.list_id.as_str().is_empty() {
                    card.list_id = list.id.clone();
                }
            }
        }

        let board = match self.cards {
            Some(cards) => {
                if lists.iter().any(|list| !list.is_empty()) {
                    return Err(KanbanError::invalid_board(
                        "snapshot has both nested and top-level cards",
                    )
                    .into());
                }
                Board::assemble(self.name, lists, cards)?
            }
            None => Board {
                name: self.name,
                lists,
            },
        };
        board.validate()?;
        Ok(board)
    }
}

/// Load a snapshot file and check it
pub fn load_board(path: &Path) -> CliResult<Board> {
    Snapshot::load(path)?.into_board()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use taskboard_kanban::CardId;
    use tempfile::TempDir;

    const FLAT: &str = r#"
name: Design sprint
lists:
  - id: todo
    title: To Do
  - id: done
    title: Done
    color: "00ff00"
cards:
  - id: c2
    title: Second
    list_id: todo
    order: 5
  - id: c1
    title: First
    list_id: todo
    order: 2
    priority: high
  - id: c3
    title: Shipped
    list_id: done
"#;

    const NESTED: &str = r#"{
  "name": "Nested",
  "lists": [
    {"id": "todo", "title": "To Do", "cards": [
      {"id": "a", "title": "A"},
      {"id": "b", "title": "B", "order": 1}
    ]},
    {"id": "done", "title": "Done"}
  ]
}"#;

    fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn test_flat_yaml_is_assembled() {
        let dir = TempDir::new().unwrap();
        let board = load_board(&write(&dir, "board.yaml", FLAT)).unwrap();

        assert_eq!(board.name, "Design sprint");
        let todo: Vec<(&str, usize)> = board.lists[0]
            .cards
            .iter()
            .map(|c| (c.id.as_str(), c.order))
            .collect();
        assert_eq!(todo, vec![("c1", 0), ("c2", 1)]);
        assert_eq!(board.lists[1].color, "00ff00");
        assert_eq!(board.lists[1].order, 1);
        assert!(!board.lists[0].color.is_empty());
    }

    #[test]
    fn test_nested_json_fills_list_ids() {
        let dir = TempDir::new().unwrap();
        let board = load_board(&write(&dir, "board.json", NESTED)).unwrap();
        let card = board.find_card(&CardId::from("b")).unwrap();
        assert_eq!(card.list_id, "todo");
        assert_eq!(board.card_count(), 2);
    }

    #[test]
    fn test_nested_gaps_are_rejected() {
        let dir = TempDir::new().unwrap();
        let text = NESTED.replace(r#""order": 1"#, r#""order": 4"#);
        let result = load_board(&write(&dir, "board.json", &text));
        assert!(matches!(
            result,
            Err(CliError::Kanban(KanbanError::InvalidBoard { .. }))
        ));
    }

    #[test]
    fn test_flat_card_in_unknown_list() {
        let dir = TempDir::new().unwrap();
        let text = FLAT.replace("list_id: done", "list_id: archive");
        let result = load_board(&write(&dir, "board.yml", &text));
        assert!(matches!(
            result,
            Err(CliError::Kanban(KanbanError::ListNotFound { .. }))
        ));
    }

    #[test]
    fn test_mixed_shapes_rejected() {
        let snapshot = Snapshot {
            name: "mixed".into(),
            lists: vec![List::new("todo", "To Do").with_cards([Card::new("a", "A")])],
            cards: Some(vec![Card::new("b", "B").in_list("todo")]),
        };
        assert!(snapshot.into_board().is_err());
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let result = Snapshot::load(&write(&dir, "board.txt", FLAT));
        assert!(matches!(result, Err(CliError::UnsupportedFormat { .. })));
    }

    #[test]
    fn test_parse_error_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "board.json", "{ not json");
        let err = Snapshot::load(&path).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(err.to_string().contains("board.json"));
    }

    #[test]
    fn test_missing_file() {
        let result = load_board(Path::new("/nonexistent/board.yaml"));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }
}
