//! Ordered-card state engine for kanban boards
//!
//! This crate holds the two pieces of a board client that carry real
//! invariants: relocating a card between ordered lists, and deriving grouped,
//! filtered views of the same cards. Rendering, storage and sync belong to the
//! caller; the engine works on in-memory snapshots only.
//!
//! ## Overview
//!
//! - **Reorder engine** - [`reorder`] applies one drop intent and returns the
//!   new board plus a [`CardTransition`] when the card changed lists.
//!   [`preview`] is the drag-over variant.
//! - **View projector** - [`project`] filters cards and splits the board by
//!   priority, assignee or label without touching the canonical board.
//! - **Session** - [`BoardSession`] owns the canonical board, applies intents
//!   one at a time and keeps an activity log of transitions.
//!
//! ## Basic Usage
//!
//! ```rust
//! use taskboard_kanban::{reorder, project, Board, Card, FilterSet, GroupAxis, List, MoveIntent};
//!
//! let board = Board::new("Sprint")
//!     .with_list(List::new("todo", "To Do").with_cards([Card::new("c1", "Write docs")]))
//!     .with_list(List::new("done", "Done"));
//!
//! let outcome = reorder(&board, &MoveIntent::onto_list("c1", "done"))?;
//! assert!(outcome.transition.is_some());
//! assert_eq!(outcome.board.lists[1].cards[0].order, 0);
//!
//! let projection = project(&outcome.board, GroupAxis::Priority, &FilterSet::new());
//! assert_eq!(projection.len(), 3);
//! # Ok::<(), taskboard_kanban::KanbanError>(())
//! ```
//!
//! ## Invariants
//!
//! Before and after every reorder:
//!
//! 1. each card's `list_id` names the list that holds it,
//! 2. `order` within a list runs `0..n` and matches array position,
//! 3. a card id appears in exactly one list,
//! 4. cards are only moved, never created or dropped.

pub mod auto_color;
mod error;
pub mod reorder;
mod session;
pub mod settings;
pub mod types;
pub mod view;

pub use error::{KanbanError, Result};
pub use reorder::{preview, reorder, MoveEffect, ReorderOutcome};
pub use session::BoardSession;
pub use settings::{GroupTitles, KanbanSettings};
pub use view::{
    project, FilterSet, GroupAxis, GroupKey, ProjectedBoard, ProjectedList, Projection, Projector,
};

// Re-export commonly used types
pub use types::{
    ActivityEntry, Board, Card, CardId, CardTransition, DropTarget, EntryId, List, ListId,
    MoveIntent, Priority,
};
