//! View projector.
//!
//! Derives grouped and filtered, board-shaped views from a canonical board.
//! Projections borrow the card records of the board they came from and never
//! write back: list membership and `order` values are shown as they are in
//! the canonical board, with non-matching cards left out.

mod filter;
mod group;

pub use filter::{FilterSet, ALL};
pub use group::{GroupAxis, GroupKey};

use crate::settings::KanbanSettings;
use crate::types::{Board, Card, List, ListId, Priority};
use filter::CompiledFilter;
use indexmap::{IndexMap, IndexSet};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use tracing::trace;

/// A list as seen through a projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedList<'a> {
    pub id: &'a ListId,
    pub title: &'a str,
    pub order: usize,
    pub color: &'a str,
    pub cards: Vec<&'a Card>,
}

/// Board-shaped view for one group: every list of the board, each holding
/// only the cards that belong to the group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProjectedBoard<'a> {
    pub lists: Vec<ProjectedList<'a>>,
}

impl<'a> ProjectedBoard<'a> {
    fn from_board(board: &'a Board, mut keep: impl FnMut(&Card) -> bool) -> Self {
        let lists = board
            .lists
            .iter()
            .map(|list: &'a List| ProjectedList {
                id: &list.id,
                title: &list.title,
                order: list.order,
                color: &list.color,
                cards: list.cards.iter().filter(|&card| keep(card)).collect(),
            })
            .collect();
        Self { lists }
    }

    pub fn card_count(&self) -> usize {
        self.lists.iter().map(|l| l.cards.len()).sum()
    }

    /// Iterate over the cards of this group in board order
    pub fn cards(&self) -> impl Iterator<Item = &'a Card> + '_ {
        self.lists.iter().flat_map(|l| l.cards.iter().copied())
    }
}

/// Every group produced for one axis, in display order
#[derive(Debug, Clone, PartialEq)]
pub struct Projection<'a> {
    axis: GroupAxis,
    groups: IndexMap<GroupKey, ProjectedBoard<'a>>,
    settings: KanbanSettings,
}

impl<'a> Projection<'a> {
    pub fn axis(&self) -> GroupAxis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, key: &GroupKey) -> Option<&ProjectedBoard<'a>> {
        self.groups.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &GroupKey> {
        self.groups.keys()
    }

    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &ProjectedBoard<'a>)> {
        self.groups.iter()
    }

    /// Human-readable title for a group key
    pub fn title(&self, key: &GroupKey) -> String {
        key.title(&self.settings.titles)
    }
}

/// Serialized as a sequence of `{ key, title, lists }` in display order, so
/// no two groups can share an encoded key
impl Serialize for Projection<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Group<'p, 'a> {
            key: &'p GroupKey,
            title: String,
            lists: &'p [ProjectedList<'a>],
        }

        let mut seq = serializer.serialize_seq(Some(self.groups.len()))?;
        for (key, board) in &self.groups {
            seq.serialize_element(&Group {
                key,
                title: self.title(key),
                lists: &board.lists,
            })?;
        }
        seq.end()
    }
}

/// Builds projections with a fixed set of settings
#[derive(Debug, Clone, Default)]
pub struct Projector {
    settings: KanbanSettings,
}

impl Projector {
    pub fn new(settings: KanbanSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &KanbanSettings {
        &self.settings
    }

    /// Filter the board's cards, then split them along `axis`.
    ///
    /// Priority grouping always yields `high`, `medium` and `low`. Assignee and
    /// label grouping yield one group per value seen on a matching card, in
    /// board order, plus a sentinel group when some matching card has none.
    pub fn project<'a>(
        &self,
        board: &'a Board,
        axis: GroupAxis,
        filters: &FilterSet,
    ) -> Projection<'a> {
        let filter = CompiledFilter::new(filters, &self.settings);

        let keys: Vec<GroupKey> = match axis {
            GroupAxis::None => vec![GroupKey::All],
            GroupAxis::Priority => Priority::ALL.into_iter().map(GroupKey::Priority).collect(),
            GroupAxis::Assignee => dynamic_keys(board, &filter, |card| {
                if card.assignees.is_empty() {
                    vec![GroupKey::NoAssignee]
                } else {
                    card.assignees.iter().cloned().map(GroupKey::Assignee).collect()
                }
            }),
            GroupAxis::Label => dynamic_keys(board, &filter, |card| {
                if card.labels.is_empty() {
                    vec![GroupKey::NoLabel]
                } else {
                    card.labels.iter().cloned().map(GroupKey::Label).collect()
                }
            }),
        };

        let groups: IndexMap<GroupKey, ProjectedBoard<'a>> = keys
            .into_iter()
            .map(|key| {
                let view =
                    ProjectedBoard::from_board(board, |card| filter.matches(card) && key.admits(card));
                trace!(axis = %axis, group = %key, cards = view.card_count(), "projected group");
                (key, view)
            })
            .collect();

        Projection {
            axis,
            groups,
            settings: self.settings.clone(),
        }
    }
}

/// Distinct group keys over the matching cards, first seen first
fn dynamic_keys(
    board: &Board,
    filter: &CompiledFilter,
    keys_of: impl Fn(&Card) -> Vec<GroupKey>,
) -> Vec<GroupKey> {
    let keys: IndexSet<GroupKey> = board
        .cards()
        .filter(|card| filter.matches(card))
        .flat_map(keys_of)
        .collect();
    keys.into_iter().collect()
}

/// Project a board with default settings
pub fn project<'a>(board: &'a Board, axis: GroupAxis, filters: &FilterSet) -> Projection<'a> {
    Projector::default().project(board, axis, filters)
}
