//! The filter engine.
//!
//! Every function here evaluates a predicate once per item, front to back.
//! Items are borrowed, never copied or reordered, and the input slice is
//! left untouched (except by [`retain`], which exists to mutate).

use crate::predicate::Predicate;

/// Returns references to the items that satisfy `predicate`, in input order.
///
/// Filtering is per element: duplicates in `items` each appear in the result
/// if they match. An empty input, or no matches, yields an empty vector.
///
/// # Example
///
/// ```
/// use sift::{filter, from_fn};
///
/// let words = ["tree", "apple", "house", "tree"];
/// let has_e = from_fn("contains 'e'", |w: &&str| w.contains('e'));
///
/// assert_eq!(filter(&words, &has_e), vec![&"tree", &"apple", &"house", &"tree"]);
/// ```
pub fn filter<'a, T, P>(items: &'a [T], predicate: &P) -> Vec<&'a T>
where
    P: Predicate<T> + ?Sized,
{
    items
        .iter()
        .filter(|item| predicate.matches(item))
        .collect()
}

/// Filters and clones matching items.
pub fn filter_cloned<T, P>(items: &[T], predicate: &P) -> Vec<T>
where
    T: Clone,
    P: Predicate<T> + ?Sized,
{
    filter(items, predicate).into_iter().cloned().collect()
}

/// Filters a vector in place, keeping only matching items.
pub fn retain<T, P>(items: &mut Vec<T>, predicate: &P)
where
    P: Predicate<T> + ?Sized,
{
    items.retain(|item| predicate.matches(item));
}

/// Counts the number of matching items.
pub fn count<T, P>(items: &[T], predicate: &P) -> usize
where
    P: Predicate<T> + ?Sized,
{
    items.iter().filter(|item| predicate.matches(item)).count()
}

/// Returns `true` if any item matches.
pub fn any<T, P>(items: &[T], predicate: &P) -> bool
where
    P: Predicate<T> + ?Sized,
{
    items.iter().any(|item| predicate.matches(item))
}

/// Returns `true` if all items match. Vacuously `true` for an empty slice.
pub fn all<T, P>(items: &[T], predicate: &P) -> bool
where
    P: Predicate<T> + ?Sized,
{
    items.iter().all(|item| predicate.matches(item))
}

/// Finds the first matching item.
pub fn find<'a, T, P>(items: &'a [T], predicate: &P) -> Option<&'a T>
where
    P: Predicate<T> + ?Sized,
{
    items.iter().find(|item| predicate.matches(item))
}

/// Finds the first matching item and returns its index.
pub fn position<T, P>(items: &[T], predicate: &P) -> Option<usize>
where
    P: Predicate<T> + ?Sized,
{
    items.iter().position(|item| predicate.matches(item))
}
