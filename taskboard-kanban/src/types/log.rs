//! Transition reports and the activity log built from them

use super::ids::{CardId, EntryId, ListId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Report of a card changing lists.
///
/// Produced only when the source and destination lists differ; a same-list
/// reorder has nothing for the collaborator to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardTransition {
    pub card_id: CardId,
    pub from_list_id: ListId,
    pub to_list_id: ListId,
}

impl CardTransition {
    pub fn new(
        card_id: impl Into<CardId>,
        from_list_id: impl Into<ListId>,
        to_list_id: impl Into<ListId>,
    ) -> Self {
        Self {
            card_id: card_id.into(),
            from_list_id: from_list_id.into(),
            to_list_id: to_list_id.into(),
        }
    }
}

/// An activity log entry recording one applied transition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Unique ID for this log entry
    pub id: EntryId,

    /// When the transition was applied
    pub timestamp: DateTime<Utc>,

    pub transition: CardTransition,

    /// True when the move was applied while the drag was still in progress
    #[serde(default)]
    pub preview: bool,

    /// Who performed the move
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actor: Option<String>,
}

impl ActivityEntry {
    /// Create a new log entry stamped now
    pub fn new(transition: CardTransition, preview: bool) -> Self {
        Self {
            id: EntryId::new(),
            timestamp: Utc::now(),
            transition,
            preview,
            actor: None,
        }
    }

    /// Set the actor
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }
}
