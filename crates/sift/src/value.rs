//! Runtime values read out of records.
//!
//! A [`Value`] is what a [`Record`](crate::Record) hands back for one of its
//! named attributes. It borrows from the record, so reading a field never
//! copies string data.

/// Runtime value of a record attribute, borrowed from the record.
///
/// # Example
///
/// ```
/// use sift::{Record, Value};
///
/// struct Book {
///     title: String,
///     pages: u32,
/// }
///
/// impl Record for Book {
///     fn field(&self, name: &str) -> Value<'_> {
///         match name {
///             "title" => Value::String(&self.title),
///             "pages" => Value::Number(self.pages as i64),
///             _ => Value::None,
///         }
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Value<'a> {
    /// String value (borrowed).
    String(&'a str),
    /// Integer value.
    Number(i64),
    /// Enum discriminant, see [`RecordEnum`](crate::RecordEnum).
    Enum(u32),
    /// Boolean value.
    Bool(bool),
    /// Field not present or not readable.
    None,
}
