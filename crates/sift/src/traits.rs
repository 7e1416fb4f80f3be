//! Traits for exposing record attributes by name.
//!
//! [`Record`] is the seam between a caller's struct and the generic
//! [`Field`](crate::Field) predicate. Types that only need hand-written
//! predicates do not have to implement it.

use crate::value::Value;

/// A value with named attributes that field predicates can read.
///
/// # Example
///
/// ```
/// use sift::{Record, RecordEnum, Value};
///
/// #[derive(Clone, Copy)]
/// enum Shape {
///     Circle,
///     Square,
/// }
///
/// impl RecordEnum for Shape {
///     fn discriminant(&self) -> u32 {
///         match self {
///             Shape::Circle => 0,
///             Shape::Square => 1,
///         }
///     }
///
///     fn label(&self) -> &'static str {
///         match self {
///             Shape::Circle => "circle",
///             Shape::Square => "square",
///         }
///     }
/// }
///
/// struct Tile {
///     shape: Shape,
///     glazed: bool,
/// }
///
/// impl Record for Tile {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "shape" => self.shape.value(),
///             "glazed" => Value::Bool(self.glazed),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let tile = Tile { shape: Shape::Square, glazed: true };
/// assert_eq!(tile.field("shape"), Value::Enum(1));
/// assert_eq!(tile.field("colour"), Value::None);
/// ```
pub trait Record {
    /// Returns the value of the named attribute.
    ///
    /// Unknown names must return [`Value::None`], which no field predicate
    /// matches.
    fn field(&self, name: &str) -> Value<'_>;
}

/// Enum attributes stored as stable discriminants.
///
/// Use explicit discriminants rather than relying on declaration order, so
/// predicates built from saved values keep meaning the same thing.
pub trait RecordEnum {
    /// Stable discriminant for this variant.
    fn discriminant(&self) -> u32;

    /// Lowercase label for this variant, used when describing predicates.
    fn label(&self) -> &'static str;

    /// Wraps the discriminant in a [`Value`].
    fn value(&self) -> Value<'static> {
        Value::Enum(self.discriminant())
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn field(&self, name: &str) -> Value<'_> {
        (**self).field(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    enum Status {
        Pending,
        Active,
    }

    impl RecordEnum for Status {
        fn discriminant(&self) -> u32 {
            match self {
                Status::Pending => 0,
                Status::Active => 1,
            }
        }

        fn label(&self) -> &'static str {
            match self {
                Status::Pending => "pending",
                Status::Active => "active",
            }
        }
    }

    struct Job {
        name: String,
        status: Status,
    }

    impl Record for Job {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "name" => Value::String(&self.name),
                "status" => self.status.value(),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn record_manual_impl() {
        let job = Job {
            name: "build".to_string(),
            status: Status::Active,
        };

        assert_eq!(job.field("name"), Value::String("build"));
        assert_eq!(job.field("status"), Value::Enum(1));
        assert_eq!(job.field("unknown"), Value::None);
    }

    #[test]
    fn record_through_reference() {
        let job = Job {
            name: "lint".to_string(),
            status: Status::Pending,
        };
        let by_ref = &job;
        assert_eq!(Record::field(&by_ref, "status"), Value::Enum(0));
    }

    #[test]
    fn enum_discriminant_and_label() {
        assert_eq!(Status::Pending.discriminant(), 0);
        assert_eq!(Status::Active.label(), "active");
        assert_eq!(Status::Active.value(), Value::Enum(1));
    }
}
