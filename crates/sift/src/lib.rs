//! Sift - composable predicates for filtering in-memory collections.
//!
//! Sift separates *what* to select from *how* selection runs. A predicate
//! is any type implementing [`Predicate`]. The filter functions take a
//! slice and one predicate and return the matching items in input order.
//! New criteria are new predicate types. The filter engine and the
//! predicates that already exist never change to accommodate them.
//!
//! - [`Field`]: tests one named attribute of a [`Record`] against a captured value
//! - [`And`], [`Or`], [`Not`]: combine predicates, nesting to any depth
//! - [`from_fn`]: wraps a closure as a named predicate
//! - [`filter`], [`count`], [`find`], ...: evaluate a predicate over a slice
//!
//! # Quick Start
//!
//! ```rust
//! use sift::{filter, Field, FieldValue, PredicateExt, Record, RecordEnum, Value};
//!
//! #[derive(Clone, Copy)]
//! enum Color {
//!     Green,
//!     Blue,
//! }
//!
//! impl RecordEnum for Color {
//!     fn discriminant(&self) -> u32 {
//!         match self {
//!             Color::Green => 1,
//!             Color::Blue => 2,
//!         }
//!     }
//!
//!     fn label(&self) -> &'static str {
//!         match self {
//!             Color::Green => "green",
//!             Color::Blue => "blue",
//!         }
//!     }
//! }
//!
//! struct Thing {
//!     name: &'static str,
//!     color: Color,
//!     large: bool,
//! }
//!
//! impl Record for Thing {
//!     fn field(&self, name: &str) -> Value<'_> {
//!         match name {
//!             "name" => Value::String(self.name),
//!             "color" => self.color.value(),
//!             "large" => Value::Bool(self.large),
//!             _ => Value::None,
//!         }
//!     }
//! }
//!
//! let things = vec![
//!     Thing { name: "Apple", color: Color::Green, large: false },
//!     Thing { name: "Tree", color: Color::Green, large: true },
//!     Thing { name: "House", color: Color::Blue, large: true },
//! ];
//!
//! let green = Field::is("color", FieldValue::variant(&Color::Green))?;
//! let large = Field::is("large", true)?;
//! let green_and_large = green.and(large);
//!
//! let names: Vec<_> = filter(&things, &green_and_large).iter().map(|t| t.name).collect();
//! assert_eq!(names, ["Tree"]);
//! # Ok::<(), sift::SiftError>(())
//! ```
//!
//! # Semantics
//!
//! - Predicates are pure. `matches` has no side effects.
//! - [`filter`] returns an order-preserving subsequence of its input and
//!   borrows items rather than cloning them.
//! - `filter(items, a and b)` equals `filter(filter(items, a), b)`.
//! - Combinators short-circuit.
//! - Construction is where configuration errors surface ([`SiftError`]).
//!   Evaluation cannot fail.

mod combinator;
mod error;
mod field;
mod filter;
mod op;
mod predicate;
mod traits;
mod value;

// Re-export public API
pub use combinator::{And, Not, Or};
pub use error::{Result, SiftError};
pub use field::{EnumValue, Field, FieldValue};
pub use filter::{all, any, count, filter, filter_cloned, find, position, retain};
pub use op::Op;
pub use predicate::{always, from_fn, Always, FnPredicate, Predicate, PredicateExt};
pub use traits::{Record, RecordEnum};
pub use value::Value;
