//! Board-level types: Board, List

use super::card::Card;
use super::ids::{CardId, ListId};
use crate::auto_color::auto_color;
use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// A list (column) defines a workflow stage and owns an ordered run of cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    pub id: ListId,
    pub title: String,
    /// Position of the column on the board
    #[serde(default)]
    pub order: usize,
    /// 6-character hex color code without #
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub cards: Vec<Card>,
}

impl List {
    /// Create an empty list with an auto-color derived from its id
    pub fn new(id: impl Into<ListId>, title: impl Into<String>) -> Self {
        let id = id.into();
        let color = auto_color(id.as_str()).to_string();
        Self {
            id,
            title: title.into(),
            order: 0,
            color,
            cards: Vec::new(),
        }
    }

    /// Set an explicit color
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Append cards, taking ownership of them and renumbering
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        self.cards.extend(cards);
        self.renumber();
        self
    }

    /// Index of a card within this list
    pub fn position_of(&self, id: &CardId) -> Option<usize> {
        self.cards.iter().position(|c| &c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Re-establish ownership and dense ordering from array position
    pub(crate) fn renumber(&mut self) {
        for (index, card) in self.cards.iter_mut().enumerate() {
            card.order = index;
            card.list_id = self.id.clone();
        }
    }
}

/// The kanban board: an ordered sequence of lists.
///
/// A `Board` is the canonical snapshot handed to and returned from the reorder
/// engine. Cards live inside their owning list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Board {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub lists: Vec<List>,
}

impl Board {
    /// Create an empty board with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lists: Vec::new(),
        }
    }

    /// Add a list to the end of the board
    pub fn with_list(mut self, mut list: List) -> Self {
        list.order = self.lists.len();
        self.lists.push(list);
        self
    }

    /// Build a canonical board from columns and a flat card collection.
    ///
    /// Each card goes to the list named by its `list_id`. Within a list cards
    /// keep their incoming `order` (stable for ties) and are then renumbered
    /// densely. Cards already present in `lists` stay ahead of assembled ones.
    pub fn assemble(
        name: impl Into<String>,
        lists: Vec<List>,
        cards: impl IntoIterator<Item = Card>,
    ) -> Result<Self> {
        let mut board = Self {
            name: name.into(),
            lists,
        };

        let index: HashMap<ListId, usize> = board
            .lists
            .iter()
            .enumerate()
            .map(|(i, l)| (l.id.clone(), i))
            .collect();
        if index.len() != board.lists.len() {
            let mut seen = HashSet::new();
            for list in &board.lists {
                if !seen.insert(&list.id) {
                    return Err(KanbanError::duplicate_id("list", list.id.as_str()));
                }
            }
        }

        let mut seen_cards: HashSet<CardId> = board.cards().map(|c| c.id.clone()).collect();
        let mut incoming: Vec<Vec<Card>> = vec![Vec::new(); board.lists.len()];
        for card in cards {
            let slot = *index
                .get(&card.list_id)
                .ok_or_else(|| KanbanError::list_not_found(card.list_id.as_str()))?;
            if !seen_cards.insert(card.id.clone()) {
                return Err(KanbanError::duplicate_id("card", card.id.as_str()));
            }
            incoming[slot].push(card);
        }

        for (list, mut cards) in board.lists.iter_mut().zip(incoming) {
            cards.sort_by_key(|c| c.order);
            list.cards.extend(cards);
            list.renumber();
        }

        Ok(board)
    }

    /// Iterate over every card in board order
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.lists.iter().flat_map(|l| l.cards.iter())
    }

    /// Total number of cards on the board
    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    /// Find a list by id
    pub fn find_list(&self, id: &ListId) -> Option<&List> {
        self.lists.iter().find(|l| &l.id == id)
    }

    /// Find a card by id
    pub fn find_card(&self, id: &CardId) -> Option<&Card> {
        self.cards().find(|c| &c.id == id)
    }

    /// Locate a card as (list index, card index)
    pub fn locate_card(&self, id: &CardId) -> Option<(usize, usize)> {
        self.lists
            .iter()
            .enumerate()
            .find_map(|(li, list)| list.position_of(id).map(|ci| (li, ci)))
    }

    /// Index of a list within the board
    pub fn list_index(&self, id: &ListId) -> Option<usize> {
        self.lists.iter().position(|l| &l.id == id)
    }

    /// Re-establish card ownership and dense ordering from array positions
    pub fn normalize(&mut self) {
        for list in &mut self.lists {
            list.renumber();
        }
    }

    /// Check the ownership and ordering invariants, reporting the first violation
    pub fn validate(&self) -> Result<()> {
        let mut list_ids = HashSet::new();
        let mut card_ids = HashSet::new();

        for list in &self.lists {
            if !list_ids.insert(&list.id) {
                return Err(KanbanError::duplicate_id("list", list.id.as_str()));
            }
            for (index, card) in list.cards.iter().enumerate() {
                if !card_ids.insert(&card.id) {
                    return Err(KanbanError::duplicate_id("card", card.id.as_str()));
                }
                if card.list_id != list.id {
                    return Err(KanbanError::invalid_board(format!(
                        "card '{}' sits in list '{}' but claims list '{}'",
                        card.id, list.id, card.list_id
                    )));
                }
                if card.order != index {
                    return Err(KanbanError::invalid_board(format!(
                        "card '{}' at position {} of list '{}' has order {}",
                        card.id, index, list.id, card.order
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::card::Priority;

    fn two_lists() -> Vec<List> {
        vec![List::new("todo", "To Do"), List::new("done", "Done")]
    }

    #[test]
    fn test_board_creation() {
        let board = Board::new("Sprint")
            .with_list(List::new("todo", "To Do"))
            .with_list(List::new("done", "Done"));
        assert_eq!(board.name, "Sprint");
        assert_eq!(board.lists[1].order, 1);
        assert_eq!(board.card_count(), 0);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_list_auto_color() {
        let list = List::new("todo", "To Do");
        assert_eq!(list.color, auto_color("todo"));
        let list = list.with_color("ff0000");
        assert_eq!(list.color, "ff0000");
    }

    #[test]
    fn test_with_cards_renumbers() {
        let list = List::new("todo", "To Do")
            .with_cards([Card::new("a", "A").with_order(7), Card::new("b", "B")]);
        assert_eq!(list.cards[0].order, 0);
        assert_eq!(list.cards[1].order, 1);
        assert!(list.cards.iter().all(|c| c.list_id == "todo"));
    }

    #[test]
    fn test_assemble_sorts_by_incoming_order() {
        let cards = vec![
            Card::new("c2", "Second").in_list("todo").with_order(5),
            Card::new("c1", "First").in_list("todo").with_order(1),
            Card::new("c3", "Done").in_list("done").with_order(9),
        ];
        let board = Board::assemble("b", two_lists(), cards).unwrap();

        let todo: Vec<&str> = board.lists[0].cards.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(todo, vec!["c1", "c2"]);
        assert_eq!(board.lists[0].cards[1].order, 1);
        assert_eq!(board.lists[1].cards[0].order, 0);
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_assemble_unknown_list() {
        let cards = vec![Card::new("c1", "x").in_list("nowhere")];
        let err = Board::assemble("b", two_lists(), cards).unwrap_err();
        assert_eq!(err, KanbanError::list_not_found("nowhere"));
    }

    #[test]
    fn test_assemble_duplicate_card() {
        let cards = vec![
            Card::new("c1", "x").in_list("todo"),
            Card::new("c1", "y").in_list("done"),
        ];
        let err = Board::assemble("b", two_lists(), cards).unwrap_err();
        assert!(matches!(err, KanbanError::DuplicateId { .. }));
    }

    #[test]
    fn test_assemble_duplicate_list() {
        let lists = vec![List::new("todo", "A"), List::new("todo", "B")];
        let err = Board::assemble("b", lists, Vec::new()).unwrap_err();
        assert_eq!(err, KanbanError::duplicate_id("list", "todo"));
    }

    #[test]
    fn test_validate_detects_order_gap() {
        let mut board = Board::new("b").with_list(
            List::new("todo", "To Do").with_cards([Card::new("a", "A"), Card::new("b", "B")]),
        );
        board.lists[0].cards[1].order = 3;
        assert!(matches!(board.validate(), Err(KanbanError::InvalidBoard { .. })));

        board.normalize();
        assert!(board.validate().is_ok());
    }

    #[test]
    fn test_validate_detects_wrong_owner() {
        let mut board = Board::new("b")
            .with_list(List::new("todo", "To Do").with_cards([Card::new("a", "A")]))
            .with_list(List::new("done", "Done"));
        board.lists[0].cards[0].list_id = ListId::from("done");
        assert!(matches!(board.validate(), Err(KanbanError::InvalidBoard { .. })));
    }

    #[test]
    fn test_validate_detects_duplicate_card() {
        let board = Board::new("b")
            .with_list(List::new("todo", "To Do").with_cards([Card::new("a", "A")]))
            .with_list(List::new("done", "Done").with_cards([Card::new("a", "A again")]));
        assert_eq!(
            board.validate(),
            Err(KanbanError::duplicate_id("card", "a"))
        );
    }

    #[test]
    fn test_locate_and_find() {
        let board = Board::new("b")
            .with_list(List::new("todo", "To Do"))
            .with_list(List::new("done", "Done").with_cards([
                Card::new("a", "A"),
                Card::new("b", "B").with_priority(Priority::High),
            ]));
        assert_eq!(board.locate_card(&CardId::from("b")), Some((1, 1)));
        assert_eq!(board.locate_card(&CardId::from("zz")), None);
        assert_eq!(
            board.find_card(&CardId::from("b")).map(|c| c.priority),
            Some(Priority::High)
        );
        assert_eq!(board.list_index(&ListId::from("done")), Some(1));
        assert!(board.find_list(&ListId::from("nope")).is_none());
    }

    #[test]
    fn test_board_yaml_roundtrip_keeps_nesting() {
        let board = Board::new("b")
            .with_list(List::new("todo", "To Do").with_cards([Card::new("a", "A")]));
        let yaml = serde_yaml_ng::to_string(&board).unwrap();
        let parsed: Board = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, board);
    }
}
