//! Comparison operators for field predicates.

/// Comparison operator for a [`Field`](crate::Field) predicate.
///
/// - `Eq`, `Ne`: valid for every value type
/// - `In`: membership in a set, valid for set values only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// Equal (exact match).
    Eq,
    /// Not equal.
    Ne,
    /// Value is one of the given set.
    In,
}

impl Op {
    /// Returns `true` if this operator compares against a single value.
    pub fn is_scalar_op(self) -> bool {
        matches!(self, Op::Eq | Op::Ne)
    }

    /// Returns `true` if this operator compares against a set of values.
    pub fn is_set_op(self) -> bool {
        matches!(self, Op::In)
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Op::Eq => "eq",
            Op::Ne => "ne",
            Op::In => "in",
        }
    }

    /// Returns the symbol used when describing predicates.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Eq => "==",
            Op::Ne => "!=",
            Op::In => "in",
        }
    }
}

impl std::fmt::Display for Op {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
