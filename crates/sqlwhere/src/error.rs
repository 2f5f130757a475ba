//! Error types for sqlwhere

use thiserror::Error;

use crate::ops::Operator;

/// Result type alias for sqlwhere operations
pub type SqlWhereResult<T> = Result<T, SqlWhereError>;

/// Error types for predicate translation
#[derive(Debug, Error)]
pub enum SqlWhereError {
    /// A node kind appeared where resolution has no handling rule
    #[error("Unsupported expression shape: {0}")]
    UnsupportedShape(String),

    /// A comparison/logical operator with no SQL token in the operator table
    #[error("No SQL operator mapped for {0:?}")]
    UnsupportedOperator(Operator),

    /// A top-level predicate that is not a single comparison
    #[error("Predicate must be a single comparison, found {0}")]
    InvalidPredicate(String),
}

impl SqlWhereError {
    /// Create an unsupported-shape error naming the offending node kind
    pub fn unsupported_shape(shape: impl Into<String>) -> Self {
        Self::UnsupportedShape(shape.into())
    }

    /// Create an invalid-predicate error naming the offending node kind
    pub fn invalid_predicate(kind: impl Into<String>) -> Self {
        Self::InvalidPredicate(kind.into())
    }

    /// Check if this is an unsupported-shape error
    pub fn is_unsupported_shape(&self) -> bool {
        matches!(self, Self::UnsupportedShape(_))
    }

    /// Check if this is an invalid-predicate error
    pub fn is_invalid_predicate(&self) -> bool {
        matches!(self, Self::InvalidPredicate(_))
    }
}
