//! In-memory owner of the canonical board.
//!
//! A `BoardSession` applies intents one at a time (every mutating call takes
//! `&mut self`) and records each cross-list transition in an activity log,
//! newest first. Nothing is written anywhere; the collaborator reads the log
//! and the board and persists them however it likes.

use crate::error::Result;
use crate::reorder::MoveEffect;
use crate::settings::KanbanSettings;
use crate::types::{ActivityEntry, Board, CardTransition, MoveIntent};
use crate::view::{FilterSet, GroupAxis, Projection, Projector};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct BoardSession {
    board: Board,
    projector: Projector,
    activity: Vec<ActivityEntry>,
    actor: Option<String>,
}

impl BoardSession {
    /// Open a session over a board, rejecting snapshots that break the
    /// ordering or ownership invariants
    pub fn new(board: Board) -> Result<Self> {
        Self::with_settings(board, KanbanSettings::default())
    }

    pub fn with_settings(board: Board, settings: KanbanSettings) -> Result<Self> {
        board.validate()?;
        debug!(board = %board.name, lists = board.lists.len(), cards = board.card_count(), "opened board session");
        Ok(Self {
            board,
            projector: Projector::new(settings),
            activity: Vec::new(),
            actor: None,
        })
    }

    /// Attribute every recorded transition to `actor`
    pub fn with_actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn settings(&self) -> &KanbanSettings {
        self.projector.settings()
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Apply a drop
    pub fn apply(&mut self, intent: &MoveIntent) -> Result<Option<CardTransition>> {
        let effect = self.board.apply_move(intent)?;
        Ok(self.record(effect, false))
    }

    /// Apply a drag-over; only crossing into another list's card moves anything
    pub fn hover(&mut self, intent: &MoveIntent) -> Result<Option<CardTransition>> {
        let effect = self.board.apply_preview(intent)?;
        Ok(self.record(effect, true))
    }

    /// Apply a drop described by the raw ids a drag-and-drop layer reports
    pub fn apply_raw(&mut self, card: &str, over: &str) -> Result<Option<CardTransition>> {
        let intent = MoveIntent::parse(card, over, &self.settings().list_marker_prefix);
        self.apply(&intent)
    }

    /// Project the current board
    pub fn project(&self, axis: GroupAxis, filters: &FilterSet) -> Projection<'_> {
        self.projector.project(&self.board, axis, filters)
    }

    /// Recorded transitions, newest first
    pub fn activity(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.activity.iter().rev()
    }

    fn record(&mut self, effect: MoveEffect, preview: bool) -> Option<CardTransition> {
        let transition = effect.transition?;
        info!(
            card = %transition.card_id,
            from = %transition.from_list_id,
            to = %transition.to_list_id,
            preview,
            "card changed lists"
        );
        let mut entry = ActivityEntry::new(transition.clone(), preview);
        if let Some(actor) = &self.actor {
            entry = entry.with_actor(actor.clone());
        }
        self.activity.push(entry);
        Some(transition)
    }
}
