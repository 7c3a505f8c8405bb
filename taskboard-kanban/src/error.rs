//! Error types for the kanban engine

use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
///
/// Every variant is recoverable: the engine resolves an intent completely
/// before touching the board, so an error always leaves the board as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KanbanError {
    /// Card not found
    #[error("card not found: {id}")]
    CardNotFound { id: String },

    /// List not found
    #[error("list not found: {id}")]
    ListNotFound { id: String },

    /// Duplicate ID
    #[error("duplicate {item_type} ID: {id}")]
    DuplicateId { item_type: String, id: String },

    /// A board snapshot breaks one of the ordering or ownership invariants
    #[error("invalid board: {message}")]
    InvalidBoard { message: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl KanbanError {
    /// Create a card not found error
    pub fn card_not_found(id: impl Into<String>) -> Self {
        Self::CardNotFound { id: id.into() }
    }

    /// Create a list not found error
    pub fn list_not_found(id: impl Into<String>) -> Self {
        Self::ListNotFound { id: id.into() }
    }

    /// Create a duplicate ID error
    pub fn duplicate_id(item_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::DuplicateId {
            item_type: item_type.into(),
            id: id.into(),
        }
    }

    /// Create an invalid board error
    pub fn invalid_board(message: impl Into<String>) -> Self {
        Self::InvalidBoard {
            message: message.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error means a referenced card or list does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CardNotFound { .. } | Self::ListNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::card_not_found("abc123");
        assert_eq!(err.to_string(), "card not found: abc123");

        let err = KanbanError::list_not_found("doing");
        assert_eq!(err.to_string(), "list not found: doing");
    }

    #[test]
    fn test_duplicate_id_display() {
        let err = KanbanError::duplicate_id("card", "c1");
        assert_eq!(err.to_string(), "duplicate card ID: c1");
    }

    #[test]
    fn test_is_not_found() {
        assert!(KanbanError::card_not_found("x").is_not_found());
        assert!(KanbanError::list_not_found("x").is_not_found());
        assert!(!KanbanError::invalid_board("gap in order").is_not_found());
        assert!(!KanbanError::invalid_value("priority", "urgent").is_not_found());
    }
}
