//! Move intents: the outcome of a drag gesture as seen by the engine

use super::ids::{CardId, ListId};
use serde::{Deserialize, Serialize};

/// Default prefix that marks a drop target as a list rather than a card
pub const DEFAULT_LIST_MARKER_PREFIX: &str = "column-";

/// What the moved card was dropped over
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    /// Dropped over a sibling card: take that card's position
    Card(CardId),
    /// Dropped directly onto a list: append at the end
    List(ListId),
}

impl DropTarget {
    /// Resolve a raw drop target id.
    ///
    /// Anything starting with `marker_prefix` names the list whose id is the
    /// remainder; everything else names a card.
    pub fn parse(raw: &str, marker_prefix: &str) -> Self {
        match raw.strip_prefix(marker_prefix) {
            Some(list) if !marker_prefix.is_empty() => Self::List(ListId::from(list)),
            _ => Self::Card(CardId::from(raw)),
        }
    }

    /// Render back to the raw marker form
    pub fn to_raw(&self, marker_prefix: &str) -> String {
        match self {
            Self::Card(id) => id.to_string(),
            Self::List(id) => format!("{}{}", marker_prefix, id),
        }
    }
}

/// A "card picked up here, dropped there" request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveIntent {
    /// The card being moved
    pub card: CardId,
    /// Where it was dropped
    pub over: DropTarget,
}

impl MoveIntent {
    pub fn new(card: impl Into<CardId>, over: DropTarget) -> Self {
        Self {
            card: card.into(),
            over,
        }
    }

    /// Drop a card over another card
    pub fn onto_card(card: impl Into<CardId>, target: impl Into<CardId>) -> Self {
        Self::new(card, DropTarget::Card(target.into()))
    }

    /// Drop a card onto a list (appended at the end)
    pub fn onto_list(card: impl Into<CardId>, list: impl Into<ListId>) -> Self {
        Self::new(card, DropTarget::List(list.into()))
    }

    /// Build an intent from the raw ids a drag-and-drop layer reports
    pub fn parse(card: &str, over: &str, marker_prefix: &str) -> Self {
        Self::new(card, DropTarget::parse(over, marker_prefix))
    }

    /// True when the card was dropped over itself
    pub fn is_self_drop(&self) -> bool {
        matches!(&self.over, DropTarget::Card(target) if target == &self.card)
    }
}
