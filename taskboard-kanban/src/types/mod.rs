//! Core types for the kanban engine

mod board;
mod card;
mod ids;
mod intent;
mod log;

// Re-export all types
pub use board::{Board, List};
pub use card::{Card, Priority};
pub use ids::{CardId, EntryId, ListId};
pub use intent::{DropTarget, MoveIntent, DEFAULT_LIST_MARKER_PREFIX};
pub use log::{ActivityEntry, CardTransition};
