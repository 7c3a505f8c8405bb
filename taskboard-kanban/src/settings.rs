//! Engine settings supplied by the collaborator.
//!
//! Every field has a default, so a partial config file (or none at all)
//! deserializes into a usable value.

use crate::types::DEFAULT_LIST_MARKER_PREFIX;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the assignee or label name in title templates
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Display titles for projection groups
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupTitles {
    /// Title of the single ungrouped group
    pub none: String,
    pub high: String,
    pub medium: String,
    pub low: String,
    /// Template for assignee groups, `{name}` is replaced
    pub assignee: String,
    pub no_assignee: String,
    /// Template for label groups, `{name}` is replaced
    pub label: String,
    pub no_label: String,
}

impl Default for GroupTitles {
    fn default() -> Self {
        Self {
            none: String::new(),
            high: "High Priority".into(),
            medium: "Medium Priority".into(),
            low: "Low Priority".into(),
            assignee: "Assigned to: {name}".into(),
            no_assignee: "Unassigned".into(),
            label: "Label: {name}".into(),
            no_label: "No label".into(),
        }
    }
}

/// Settings shared by intent parsing and the view projector
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanSettings {
    /// Prefix that marks a raw drop target as a list id
    pub list_marker_prefix: String,

    /// Category name -> label keywords. A card is in a category when any of
    /// its labels contains one of the keywords, ignoring case.
    pub categories: IndexMap<String, Vec<String>>,

    pub titles: GroupTitles,
}

impl Default for KanbanSettings {
    fn default() -> Self {
        Self {
            list_marker_prefix: DEFAULT_LIST_MARKER_PREFIX.to_string(),
            categories: default_categories(),
            titles: GroupTitles::default(),
        }
    }
}

impl KanbanSettings {
    /// Keywords for a category; the name must match a table key exactly
    pub fn category_keywords(&self, category: &str) -> Option<&[String]> {
        self.categories.get(category).map(Vec::as_slice)
    }
}

fn default_categories() -> IndexMap<String, Vec<String>> {
    [
        ("frontend", &["frontend", "desenvolvimento"][..]),
        ("ux", &["ux", "experiência"][..]),
        ("ui", &["ui", "interface"][..]),
        ("research", &["pesquisa", "research"][..]),
    ]
    .into_iter()
    .map(|(name, keywords)| {
        (
            name.to_string(),
            keywords.iter().map(|k| k.to_string()).collect(),
        )
    })
    .collect()
}
