//! Error types for the sift crate.

use thiserror::Error;

/// Errors raised while building predicates.
///
/// Evaluation never fails: anything that could make `matches` ill-defined is
/// rejected here, at construction time.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiftError {
    /// Operator is not valid for the given value type.
    #[error("operator '{op}' is not valid for {value_type} values")]
    InvalidOperatorForType {
        op: &'static str,
        value_type: &'static str,
    },

    /// A combinator chain was given fewer than two operands.
    #[error("{combinator} needs at least two predicates, got {got}")]
    TooFewOperands {
        combinator: &'static str,
        got: usize,
    },

    /// Field predicates must name a field.
    #[error("field name must not be empty")]
    EmptyFieldName,
}

/// Result type for sift operations.
pub type Result<T> = std::result::Result<T, SiftError>;
