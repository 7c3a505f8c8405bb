//! Reorder engine.
//!
//! Applies a single move intent to a board and keeps every touched list
//! densely numbered. Same-list and cross-list moves share one path: resolve
//! source and destination, lift the card out, insert it at the destination,
//! renumber the lists that changed.
//!
//! Resolution happens before any mutation, so a failed intent never leaves a
//! board half-moved.

use crate::error::{KanbanError, Result};
use crate::types::{Board, CardTransition, DropTarget, MoveIntent};
use tracing::{debug, trace};

/// What applying an intent did to a board
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveEffect {
    /// Present when the card changed lists
    pub transition: Option<CardTransition>,
    /// False when the card ended where it started
    pub changed: bool,
}

impl MoveEffect {
    fn unchanged() -> Self {
        Self::default()
    }
}

/// Result of [`reorder`] or [`preview`]: the new board plus the move report
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderOutcome {
    pub board: Board,
    pub transition: Option<CardTransition>,
    changed: bool,
}

impl ReorderOutcome {
    /// True when the card ended in the list and index it started from
    pub fn is_noop(&self) -> bool {
        !self.changed
    }

    /// Split into the board and the optional transition
    pub fn into_parts(self) -> (Board, Option<CardTransition>) {
        (self.board, self.transition)
    }
}

/// Source and destination of a move, resolved against a board
#[derive(Debug, Clone, Copy)]
struct Resolved {
    from_list: usize,
    from_index: usize,
    to_list: usize,
    /// `None` appends to the destination
    to_index: Option<usize>,
}

fn resolve(board: &Board, intent: &MoveIntent) -> Result<Resolved> {
    let (from_list, from_index) = board
        .locate_card(&intent.card)
        .ok_or_else(|| KanbanError::card_not_found(intent.card.as_str()))?;

    let (to_list, to_index) = match &intent.over {
        DropTarget::List(list_id) => {
            let to_list = board
                .list_index(list_id)
                .ok_or_else(|| KanbanError::list_not_found(list_id.as_str()))?;
            (to_list, None)
        }
        DropTarget::Card(card_id) => {
            let (to_list, to_index) = board
                .locate_card(card_id)
                .ok_or_else(|| KanbanError::card_not_found(card_id.as_str()))?;
            (to_list, Some(to_index))
        }
    };

    Ok(Resolved {
        from_list,
        from_index,
        to_list,
        to_index,
    })
}

impl Board {
    /// Apply a drop in place.
    ///
    /// Dropping a card over itself is a no-op. Unknown cards or lists fail
    /// with a not-found error and leave the board untouched.
    pub fn apply_move(&mut self, intent: &MoveIntent) -> Result<MoveEffect> {
        if intent.is_self_drop() {
            trace!(card = %intent.card, "card dropped on itself");
            return Ok(MoveEffect::unchanged());
        }
        let resolved = resolve(self, intent)?;
        Ok(self.relocate(resolved))
    }

    /// Apply a drag-over in place.
    ///
    /// Only hovering a card that lives in a different list moves anything;
    /// hovering a list marker, a sibling in the same list or the card itself
    /// leaves the board as it is.
    pub fn apply_preview(&mut self, intent: &MoveIntent) -> Result<MoveEffect> {
        if intent.is_self_drop() {
            return Ok(MoveEffect::unchanged());
        }
        let resolved = resolve(self, intent)?;
        if matches!(intent.over, DropTarget::List(_)) || resolved.from_list == resolved.to_list {
            trace!(card = %intent.card, "hover does not cross lists");
            return Ok(MoveEffect::unchanged());
        }
        Ok(self.relocate(resolved))
    }

    fn relocate(&mut self, resolved: Resolved) -> MoveEffect {
        let Resolved {
            from_list,
            from_index,
            to_list,
            to_index,
        } = resolved;

        let mut card = self.lists[from_list].cards.remove(from_index);
        let from_list_id = self.lists[from_list].id.clone();

        let destination = &mut self.lists[to_list];
        let index = to_index
            .map(|i| i.min(destination.cards.len()))
            .unwrap_or(destination.cards.len());
        card.list_id = destination.id.clone();
        let card_id = card.id.clone();
        destination.cards.insert(index, card);
        destination.renumber();

        if from_list == to_list {
            let changed = index != from_index;
            if changed {
                debug!(card = %card_id, list = %from_list_id, from = from_index, to = index, "card reordered");
            }
            return MoveEffect {
                transition: None,
                changed,
            };
        }

        self.lists[from_list].renumber();
        let to_list_id = self.lists[to_list].id.clone();
        debug!(card = %card_id, from = %from_list_id, to = %to_list_id, index, "card moved between lists");

        MoveEffect {
            transition: Some(CardTransition {
                card_id,
                from_list_id,
                to_list_id,
            }),
            changed: true,
        }
    }
}

/// Apply a drop intent to a board snapshot.
///
/// Returns a new board with the moved card relocated and every touched list
/// renumbered from 0. The input board is never modified; on error the caller
/// still holds it unchanged.
pub fn reorder(board: &Board, intent: &MoveIntent) -> Result<ReorderOutcome> {
    let mut next = board.clone();
    let effect = next.apply_move(intent)?;
    Ok(ReorderOutcome {
        board: next,
        transition: effect.transition,
        changed: effect.changed,
    })
}

/// Apply a drag-over intent to a board snapshot.
///
/// Same contract as [`reorder`] but only acts when the hovered card lives in
/// another list.
pub fn preview(board: &Board, intent: &MoveIntent) -> Result<ReorderOutcome> {
    let mut next = board.clone();
    let effect = next.apply_preview(intent)?;
    Ok(ReorderOutcome {
        board: next,
        transition: effect.transition,
        changed: effect.changed,
    })
}
