//! Field predicates: compare one named attribute against a captured value.
//!
//! A [`Field`] works with any [`Record`]. Its operator and value are checked
//! against each other when it is built, so an ill-formed field predicate can
//! never reach evaluation.

use std::fmt;

use crate::error::{Result, SiftError};
use crate::op::Op;
use crate::predicate::Predicate;
use crate::traits::{Record, RecordEnum};
use crate::value::Value;

/// A single attribute test: field name, operator and captured value.
///
/// # Example
///
/// ```
/// use sift::{filter, Field, Record, Value};
///
/// struct Item {
///     name: &'static str,
///     stock: i64,
/// }
///
/// impl Record for Item {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "name" => Value::String(self.name),
///             "stock" => Value::Number(self.stock),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let items = [Item { name: "nail", stock: 0 }, Item { name: "bolt", stock: 12 }];
/// let out_of_stock = Field::is("stock", 0).unwrap();
///
/// let names: Vec<_> = filter(&items, &out_of_stock).iter().map(|i| i.name).collect();
/// assert_eq!(names, ["nail"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    op: Op,
    value: FieldValue,
}

impl Field {
    /// Creates a field predicate, rejecting operator/value combinations
    /// that could never be evaluated.
    pub fn new(name: impl Into<String>, op: Op, value: impl Into<FieldValue>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(SiftError::EmptyFieldName);
        }
        let value = value.into();
        let fits = if value.is_set() {
            op.is_set_op()
        } else {
            op.is_scalar_op()
        };
        if !fits {
            return Err(SiftError::InvalidOperatorForType {
                op: op.as_str(),
                value_type: value.type_name(),
            });
        }
        Ok(Field { name, op, value })
    }

    /// `name == value`
    pub fn is(name: impl Into<String>, value: impl Into<FieldValue>) -> Result<Self> {
        Field::new(name, Op::Eq, value)
    }

    /// `name != value`
    pub fn is_not(name: impl Into<String>, value: impl Into<FieldValue>) -> Result<Self> {
        Field::new(name, Op::Ne, value)
    }

    /// `name in {variants}` for an enum attribute.
    pub fn is_in<E, I>(name: impl Into<String>, variants: I) -> Result<Self>
    where
        E: RecordEnum,
        I: IntoIterator<Item = E>,
    {
        let set = variants
            .into_iter()
            .map(|v| EnumValue::of(&v))
            .collect::<Vec<_>>();
        Field::new(name, Op::In, FieldValue::EnumSet(set))
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the operator.
    pub fn op(&self) -> Op {
        self.op
    }

    /// Returns the captured value.
    pub fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Evaluates this predicate against an already extracted field value.
    ///
    /// A missing field or a type mismatch never matches, not even for `Ne`.
    pub fn matches_value(&self, field_value: &Value<'_>) -> bool {
        let equal = match (&self.value, field_value) {
            (_, Value::None) => return false,
            (FieldValue::EnumSet(set), Value::Enum(d)) => {
                return set.iter().any(|e| e.discriminant == *d);
            }
            (FieldValue::String(expected), Value::String(actual)) => expected == actual,
            (FieldValue::Number(expected), Value::Number(actual)) => expected == actual,
            (FieldValue::Enum(expected), Value::Enum(actual)) => expected.discriminant == *actual,
            (FieldValue::Bool(expected), Value::Bool(actual)) => expected == actual,
            _ => return false,
        };
        match self.op {
            Op::Eq => equal,
            Op::Ne => !equal,
            Op::In => false,
        }
    }
}

impl<R: Record + ?Sized> Predicate<R> for Field {
    fn matches(&self, item: &R) -> bool {
        self.matches_value(&item.field(&self.name))
    }

    fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.op.symbol(), self.value)
    }
}

/// An enum variant captured by discriminant, with its label kept for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnumValue {
    /// Stable discriminant, see [`RecordEnum::discriminant`].
    pub discriminant: u32,
    /// Variant label, see [`RecordEnum::label`].
    pub label: &'static str,
}

impl EnumValue {
    /// Captures an enum variant.
    pub fn of<E: RecordEnum + ?Sized>(variant: &E) -> Self {
        EnumValue {
            discriminant: variant.discriminant(),
            label: variant.label(),
        }
    }
}

/// Owned value captured by a [`Field`] predicate.
///
/// Unlike [`Value`], which borrows from a record, `FieldValue` owns its data
/// so it can outlive the records it is tested against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// String value.
    String(String),
    /// Integer value.
    Number(i64),
    /// Single enum variant.
    Enum(EnumValue),
    /// Set of enum variants (for `In`).
    EnumSet(Vec<EnumValue>),
    /// Boolean value.
    Bool(bool),
}

impl FieldValue {
    /// Captures an enum variant.
    pub fn variant<E: RecordEnum + ?Sized>(variant: &E) -> Self {
        FieldValue::Enum(EnumValue::of(variant))
    }

    /// Returns `true` for set values.
    pub fn is_set(&self) -> bool {
        matches!(self, FieldValue::EnumSet(_))
    }

    /// Returns the name of this value's type, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldValue::String(_) => "string",
            FieldValue::Number(_) => "number",
            FieldValue::Enum(_) => "enum",
            FieldValue::EnumSet(_) => "enum set",
            FieldValue::Bool(_) => "bool",
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{:?}", s),
            FieldValue::Number(n) => write!(f, "{}", n),
            FieldValue::Enum(e) => f.write_str(e.label),
            FieldValue::EnumSet(set) => {
                let labels: Vec<&str> = set.iter().map(|e| e.label).collect();
                write!(f, "{{{}}}", labels.join(", "))
            }
            FieldValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

// Conversions from common types to FieldValue

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Number(n as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(n: u32) -> Self {
        FieldValue::Number(n as i64)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<EnumValue> for FieldValue {
    fn from(e: EnumValue) -> Self {
        FieldValue::Enum(e)
    }
}

impl From<Vec<EnumValue>> for FieldValue {
    fn from(set: Vec<EnumValue>) -> Self {
        FieldValue::EnumSet(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    enum Tier {
        Free,
        Pro,
        Team,
    }

    impl RecordEnum for Tier {
        fn discriminant(&self) -> u32 {
            match self {
                Tier::Free => 0,
                Tier::Pro => 1,
                Tier::Team => 2,
            }
        }

        fn label(&self) -> &'static str {
            match self {
                Tier::Free => "free",
                Tier::Pro => "pro",
                Tier::Team => "team",
            }
        }
    }

    struct Account {
        owner: String,
        seats: i64,
        tier: Tier,
        active: bool,
    }

    impl Record for Account {
        fn field(&self, name: &str) -> Value<'_> {
            match name {
                "owner" => Value::String(&self.owner),
                "seats" => Value::Number(self.seats),
                "tier" => self.tier.value(),
                "active" => Value::Bool(self.active),
                _ => Value::None,
            }
        }
    }

    fn account() -> Account {
        Account {
            owner: "ada".to_string(),
            seats: 3,
            tier: Tier::Pro,
            active: true,
        }
    }

    #[test]
    fn string_eq_and_ne() {
        let a = account();
        assert!(Field::is("owner", "ada").unwrap().matches(&a));
        assert!(!Field::is("owner", "Ada").unwrap().matches(&a)); // case sensitive
        assert!(Field::is_not("owner", "bob").unwrap().matches(&a));
        assert!(!Field::is_not("owner", "ada").unwrap().matches(&a));
    }

    #[test]
    fn number_and_bool() {
        let a = account();
        assert!(Field::is("seats", 3).unwrap().matches(&a));
        assert!(!Field::is("seats", 4).unwrap().matches(&a));
        assert!(Field::is("active", true).unwrap().matches(&a));
        assert!(Field::is_not("active", false).unwrap().matches(&a));
    }

    #[test]
    fn enum_eq_and_in() {
        let a = account();
        assert!(Field::is("tier", FieldValue::variant(&Tier::Pro))
            .unwrap()
            .matches(&a));
        assert!(!Field::is("tier", FieldValue::variant(&Tier::Free))
            .unwrap()
            .matches(&a));
        assert!(Field::is_in("tier", [Tier::Pro, Tier::Team])
            .unwrap()
            .matches(&a));
        assert!(!Field::is_in("tier", [Tier::Free]).unwrap().matches(&a));
        assert!(!Field::is_in("tier", Vec::<Tier>::new())
            .unwrap()
            .matches(&a));
    }

    #[test]
    fn missing_field_never_matches() {
        let a = account();
        assert!(!Field::is("nickname", "ada").unwrap().matches(&a));
        assert!(!Field::is_not("nickname", "ada").unwrap().matches(&a));
    }

    #[test]
    fn type_mismatch_never_matches() {
        let a = account();
        assert!(!Field::is("seats", "3").unwrap().matches(&a));
        assert!(!Field::is_not("seats", "3").unwrap().matches(&a));
        assert!(!Field::is("owner", true).unwrap().matches(&a));
    }

    #[test]
    fn construction_rejects_bad_configuration() {
        assert_eq!(
            Field::new("owner", Op::In, "ada").unwrap_err(),
            SiftError::InvalidOperatorForType {
                op: "in",
                value_type: "string"
            }
        );
        assert_eq!(
            Field::new("tier", Op::Eq, vec![EnumValue::of(&Tier::Pro)]).unwrap_err(),
            SiftError::InvalidOperatorForType {
                op: "eq",
                value_type: "enum set"
            }
        );
        assert_eq!(Field::is("", 1).unwrap_err(), SiftError::EmptyFieldName);
    }

    #[test]
    fn describe_reads_naturally() {
        assert_eq!(
            Field::is("owner", "ada").unwrap().to_string(),
            "owner == \"ada\""
        );
        assert_eq!(
            Field::is_not("tier", FieldValue::variant(&Tier::Free))
                .unwrap()
                .to_string(),
            "tier != free"
        );
        let set = Field::is_in("tier", [Tier::Pro, Tier::Team]).unwrap();
        assert_eq!(Predicate::<Account>::describe(&set), "tier in {pro, team}");
    }

    #[test]
    fn accessors() {
        let f = Field::is("seats", 2).unwrap();
        assert_eq!(f.name(), "seats");
        assert_eq!(f.op(), Op::Eq);
        assert_eq!(f.value(), &FieldValue::Number(2));
    }
}
