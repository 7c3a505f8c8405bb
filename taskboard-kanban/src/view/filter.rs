//! Card filters for projections

use crate::settings::KanbanSettings;
use crate::types::{Card, ListId, Priority};
use serde::{Deserialize, Serialize};

/// Filter value that matches every card on its axis
pub const ALL: &str = "all";

/// Optional filter predicates, combined conjunctively.
///
/// An omitted filter matches everything. Supplied values are compared
/// exactly: one that names nothing known (an unknown priority or category,
/// or a differently cased one) matches no card, except the literal `all`
/// which always matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSet {
    /// Case-insensitive substring of title or description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Matched against the card's list id
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Check a single card against every supplied filter
    pub fn matches(&self, card: &Card, settings: &KanbanSettings) -> bool {
        CompiledFilter::new(self, settings).matches(card)
    }
}

/// One filter axis after parsing
#[derive(Debug, Clone)]
enum Rule<T> {
    Any,
    Only(T),
    Nothing,
}

impl<T> Rule<T> {
    fn from_value(value: Option<&str>, parse: impl FnOnce(&str) -> Option<T>) -> Self {
        match value {
            None => Self::Any,
            Some(ALL) => Self::Any,
            Some(v) => parse(v).map_or(Self::Nothing, Self::Only),
        }
    }

    fn check(&self, pred: impl FnOnce(&T) -> bool) -> bool {
        match self {
            Self::Any => true,
            Self::Only(value) => pred(value),
            Self::Nothing => false,
        }
    }
}

/// A `FilterSet` parsed once and applied to many cards
#[derive(Debug, Clone)]
pub(crate) struct CompiledFilter {
    needle: Option<String>,
    priority: Rule<Priority>,
    category: Rule<Vec<String>>,
    status: Rule<ListId>,
}

impl CompiledFilter {
    pub(crate) fn new(filters: &FilterSet, settings: &KanbanSettings) -> Self {
        let needle = filters
            .search_term
            .as_deref()
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase);

        let priority = Rule::from_value(filters.priority.as_deref(), |v| {
            Priority::ALL.into_iter().find(|p| p.as_str() == v)
        });
        let category = Rule::from_value(filters.category.as_deref(), |v| {
            settings
                .category_keywords(v)
                .map(|keywords| keywords.iter().map(|k| k.to_lowercase()).collect())
        });
        let status = Rule::from_value(filters.status.as_deref(), |v| Some(ListId::from(v)));

        Self {
            needle,
            priority,
            category,
            status,
        }
    }

    pub(crate) fn matches(&self, card: &Card) -> bool {
        let matches_search = self
            .needle
            .as_deref()
            .map_or(true, |needle| card.mentions(needle));

        matches_search
            && self.priority.check(|p| card.priority == *p)
            && self.category.check(|keywords| {
                card.labels.iter().any(|label| {
                    let label = label.to_lowercase();
                    keywords.iter().any(|k| label.contains(k.as_str()))
                })
            })
            && self.status.check(|list| &card.list_id == list)
    }
}
