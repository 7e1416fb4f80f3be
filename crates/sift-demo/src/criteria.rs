//! Dedicated product predicates.
//!
//! Each criterion is its own type. Supporting a new one (say, a price band)
//! means adding a type here; `sift::filter` and the criteria below stay as
//! they are.

use sift::{Predicate, RecordEnum};

use crate::product::{Color, Product, Size};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorIs(pub Color);

impl Predicate<Product> for ColorIs {
    fn matches(&self, item: &Product) -> bool {
        item.color == self.0
    }

    fn describe(&self) -> String {
        format!("color == {}", self.0.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeIs(pub Size);

impl Predicate<Product> for SizeIs {
    fn matches(&self, item: &Product) -> bool {
        item.size == self.0
    }

    fn describe(&self) -> String {
        format!("size == {}", self.0.label())
    }
}

/// Case-insensitive substring match on the product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameContains {
    needle: String,
    folded: String,
}

impl NameContains {
    pub fn new(needle: &str) -> Self {
        NameContains {
            needle: needle.to_string(),
            folded: needle.to_lowercase(),
        }
    }
}

impl Predicate<Product> for NameContains {
    fn matches(&self, item: &Product) -> bool {
        item.name.to_lowercase().contains(&self.folded)
    }

    fn describe(&self) -> String {
        format!("name contains {:?}", self.needle)
    }
}
