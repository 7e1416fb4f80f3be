//! One-method-per-criterion filtering, kept for comparison.
//!
//! Every new criterion, and every combination of criteria, needs another
//! method here. That is what `sift` predicates avoid: compare
//! `by_size_and_color` with `ColorIs(..).and(SizeIs(..))`.

use crate::product::{Color, Product, Size};

#[derive(Debug, Default, Clone, Copy)]
pub struct ProductFilter;

impl ProductFilter {
    pub fn by_color<'a>(&self, items: &'a [Product], color: Color) -> Vec<&'a Product> {
        let mut result = Vec::new();
        for item in items {
            if item.color == color {
                result.push(item);
            }
        }
        result
    }

    pub fn by_size<'a>(&self, items: &'a [Product], size: Size) -> Vec<&'a Product> {
        let mut result = Vec::new();
        for item in items {
            if item.size == size {
                result.push(item);
            }
        }
        result
    }

    pub fn by_size_and_color<'a>(
        &self,
        items: &'a [Product],
        size: Size,
        color: Color,
    ) -> Vec<&'a Product> {
        let mut result = Vec::new();
        for item in items {
            if item.size == size && item.color == color {
                result.push(item);
            }
        }
        result
    }
}
