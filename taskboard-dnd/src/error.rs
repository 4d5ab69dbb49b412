//! Error types for the board model
//!
//! The reorder engine itself never fails: every drag transition is total.
//! These errors come from board validation, element lookups, and settings
//! checks performed outside the drag event stream.

use thiserror::Error;

/// Result type for board model operations
pub type Result<T> = std::result::Result<T, DndError>;

/// Errors that can occur outside the drag transitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DndError {
    /// `column_order_ids` is not a permutation of the board's column ids
    #[error("column order of board '{board}' does not match its columns")]
    ColumnOrderMismatch { board: String },

    /// `card_order_ids` is not a permutation of the column's card ids
    #[error("card order of column '{column}' does not match its cards")]
    CardOrderMismatch { column: String },

    /// A card's `column_id` disagrees with the column that holds it
    #[error("card '{card}' is held by column '{expected}' but points at '{actual}'")]
    CardColumnMismatch {
        card: String,
        expected: String,
        actual: String,
    },

    /// The same card id appears more than once on the board
    #[error("card '{card}' appears more than once")]
    DuplicateCard { card: String },

    /// No column or card carries this id
    #[error("element not found: {id}")]
    ElementNotFound { id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl DndError {
    /// Create an element-not-found error
    pub fn element_not_found(id: impl Into<String>) -> Self {
        Self::ElementNotFound { id: id.into() }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether this error describes a board that breaks its own invariants
    pub fn is_invariant_violation(&self) -> bool {
        matches!(
            self,
            Self::ColumnOrderMismatch { .. }
                | Self::CardOrderMismatch { .. }
                | Self::CardColumnMismatch { .. }
                | Self::DuplicateCard { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DndError::element_not_found("c9");
        assert_eq!(err.to_string(), "element not found: c9");
    }

    #[test]
    fn test_invalid_value() {
        let err = DndError::invalid_value("distance", "must not be negative");
        assert!(err.to_string().contains("must not be negative"));
    }

    #[test]
    fn test_invariant_violation() {
        let duplicate = DndError::DuplicateCard { card: "c1".into() };
        assert!(duplicate.is_invariant_violation());
        assert!(!DndError::element_not_found("x").is_invariant_violation());
    }
}
