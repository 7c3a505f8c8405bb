//! Grouping axes and group keys

use crate::error::KanbanError;
use crate::settings::{GroupTitles, NAME_PLACEHOLDER};
use crate::types::{Card, Priority};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimension used to split a board into several projections
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupAxis {
    #[default]
    None,
    Priority,
    Assignee,
    Label,
}

impl GroupAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Priority => "priority",
            Self::Assignee => "assignee",
            Self::Label => "label",
        }
    }
}

impl fmt::Display for GroupAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GroupAxis {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "priority" => Ok(Self::Priority),
            "assignee" => Ok(Self::Assignee),
            "label" => Ok(Self::Label),
            other => Err(KanbanError::invalid_value(
                "group_by",
                format!("'{}' is not one of none, priority, assignee, label", other),
            )),
        }
    }
}

/// Key of one projection group.
///
/// Sentinel groups are their own variants, so a person literally named
/// "Unassigned" never collides with the no-assignee group. Serialized keys
/// keep the variant as `kind` and the value, if any, as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum GroupKey {
    /// The single group produced when not grouping
    All,
    Priority(Priority),
    Assignee(String),
    NoAssignee,
    Label(String),
    NoLabel,
}

impl GroupKey {
    /// Whether a card belongs in this group
    pub fn admits(&self, card: &Card) -> bool {
        match self {
            Self::All => true,
            Self::Priority(priority) => card.priority == *priority,
            Self::Assignee(name) => card.assignees.contains(name),
            Self::NoAssignee => card.assignees.is_empty(),
            Self::Label(name) => card.labels.contains(name),
            Self::NoLabel => card.labels.is_empty(),
        }
    }

    /// Human-readable title for this group
    pub fn title(&self, titles: &GroupTitles) -> String {
        match self {
            Self::All => titles.none.clone(),
            Self::Priority(Priority::High) => titles.high.clone(),
            Self::Priority(Priority::Medium) => titles.medium.clone(),
            Self::Priority(Priority::Low) => titles.low.clone(),
            Self::Assignee(name) => titles.assignee.replace(NAME_PLACEHOLDER, name),
            Self::NoAssignee => titles.no_assignee.clone(),
            Self::Label(name) => titles.label.replace(NAME_PLACEHOLDER, name),
            Self::NoLabel => titles.no_label.clone(),
        }
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("none"),
            Self::Priority(priority) => f.write_str(priority.as_str()),
            Self::Assignee(name) | Self::Label(name) => f.write_str(name),
            Self::NoAssignee => f.write_str("no-assignee"),
            Self::NoLabel => f.write_str("no-label"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_parse() {
        assert_eq!("Priority".parse::<GroupAxis>().unwrap(), GroupAxis::Priority);
        assert_eq!("none".parse::<GroupAxis>().unwrap(), GroupAxis::None);
        assert!("status".parse::<GroupAxis>().is_err());
    }

    #[test]
    fn test_titles() {
        let titles = GroupTitles::default();
        assert_eq!(GroupKey::All.title(&titles), "");
        assert_eq!(
            GroupKey::Priority(Priority::High).title(&titles),
            "High Priority"
        );
        assert_eq!(
            GroupKey::Assignee("Jane Smith".into()).title(&titles),
            "Assigned to: Jane Smith"
        );
        assert_eq!(GroupKey::NoAssignee.title(&titles), "Unassigned");
        assert_eq!(GroupKey::Label("UX".into()).title(&titles), "Label: UX");
        assert_eq!(GroupKey::NoLabel.title(&titles), "No label");
    }

    #[test]
    fn test_admits() {
        let card = Card::new("c1", "t")
            .with_assignees(["ana"])
            .with_priority(Priority::Medium);
        assert!(GroupKey::All.admits(&card));
        assert!(GroupKey::Assignee("ana".into()).admits(&card));
        assert!(!GroupKey::NoAssignee.admits(&card));
        assert!(GroupKey::NoLabel.admits(&card));
        assert!(!GroupKey::Priority(Priority::High).admits(&card));
    }

    #[test]
    fn test_key_serializes_kind_and_name() {
        assert_eq!(
            serde_json::to_value(GroupKey::Priority(Priority::Low)).unwrap(),
            serde_json::json!({"kind": "priority", "name": "low"})
        );
        assert_eq!(
            serde_json::to_value(GroupKey::NoLabel).unwrap(),
            serde_json::json!({"kind": "no_label"})
        );
        assert_ne!(
            serde_json::to_value(GroupKey::Label("no-label".into())).unwrap(),
            serde_json::to_value(GroupKey::NoLabel).unwrap()
        );
    }
}
