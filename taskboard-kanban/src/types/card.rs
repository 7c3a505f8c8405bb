//! Card types: Card, Priority

use super::ids::{CardId, ListId};
use crate::error::KanbanError;
use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Card priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// All priorities, highest first
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(KanbanError::invalid_value(
                "priority",
                format!("'{}' is not one of high, medium, low", other),
            )),
        }
    }
}

/// A card on the board.
///
/// `list_id` and `order` are owned by the reorder engine; every other field is
/// display data that the engine carries through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,

    /// Id of the task this card was created from, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,

    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub labels: IndexSet<String>,

    #[serde(default)]
    pub assignees: IndexSet<String>,

    /// The list that currently owns this card
    #[serde(default)]
    pub list_id: ListId,

    /// Display position within the owning list, dense from 0
    #[serde(default)]
    pub order: usize,

    #[serde(default)]
    pub completed: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    #[serde(default)]
    pub attachments: u32,

    #[serde(default)]
    pub comments: u32,
}

impl Card {
    /// Create a new card with the given id and title
    pub fn new(id: impl Into<CardId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            task_id: None,
            title: title.into(),
            description: None,
            priority: Priority::default(),
            due_date: None,
            labels: IndexSet::new(),
            assignees: IndexSet::new(),
            list_id: ListId::default(),
            order: 0,
            completed: false,
            image: None,
            attachments: 0,
            comments: 0,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the due date
    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Set labels; duplicates collapse, first occurrence wins
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Set assignees; duplicates collapse, first occurrence wins
    pub fn with_assignees<I, S>(mut self, assignees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.assignees = assignees.into_iter().map(Into::into).collect();
        self
    }

    /// Set the owning list
    pub fn in_list(mut self, list_id: impl Into<ListId>) -> Self {
        self.list_id = list_id.into();
        self
    }

    /// Set the order within the owning list
    pub fn with_order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Link the card to its originating task
    pub fn with_task_id(mut self, task_id: impl Into<String>) -> Self {
        self.task_id = Some(task_id.into());
        self
    }

    /// Case-insensitive substring search over title and description.
    ///
    /// `needle` must already be lowercase.
    pub fn mentions(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_creation() {
        let card = Card::new("c1", "Write docs");
        assert_eq!(card.id, "c1");
        assert_eq!(card.title, "Write docs");
        assert_eq!(card.priority, Priority::Low);
        assert!(card.labels.is_empty());
        assert!(card.assignees.is_empty());
    }

    #[test]
    fn test_labels_are_a_set() {
        let card = Card::new("c1", "t").with_labels(["ux", "ui", "ux"]);
        assert_eq!(card.labels.len(), 2);
        assert_eq!(card.labels.get_index(0).map(String::as_str), Some("ux"));
    }

    #[test]
    fn test_priority_parse() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" medium ".parse::<Priority>().unwrap(), Priority::Medium);
        assert!(matches!(
            "urgent".parse::<Priority>(),
            Err(KanbanError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_mentions() {
        let card = Card::new("c1", "Fix Login").with_description("The OAuth redirect breaks");
        assert!(card.mentions("login"));
        assert!(card.mentions("oauth"));
        assert!(!card.mentions("signup"));
        assert!(!Card::new("c2", "Title only").mentions("desc"));
    }

    #[test]
    fn test_card_deserializes_with_defaults() {
        let yaml = r#"
id: c9
title: Minimal
list_id: todo
"#;
        let card: Card = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(card.id, "c9");
        assert_eq!(card.list_id, "todo");
        assert_eq!(card.order, 0);
        assert_eq!(card.priority, Priority::Low);
        assert!(!card.completed);
    }

    #[test]
    fn test_due_date_serialization() {
        let card = Card::new("c1", "t").with_due_date(NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["due_date"], "2025-03-14");
        assert!(json.get("description").is_none());
    }
}
