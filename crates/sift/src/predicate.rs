//! The [`Predicate`] trait and its small helpers.
//!
//! A predicate is a pure test over one item. Everything else in the crate
//! (field predicates, combinators, the filter functions) is built on this
//! trait, and new kinds of tests are added by implementing it. Nothing that
//! already exists has to change.

use std::fmt;
use std::rc::Rc;

use crate::combinator::{And, Not, Or};

/// A pure boolean test over an item of type `T`.
///
/// Implementations must not have side effects: the result of `matches`
/// depends only on the predicate's own configuration and `item`.
///
/// # Example
///
/// ```
/// use sift::{filter, Predicate};
///
/// struct Even;
///
/// impl Predicate<u32> for Even {
///     fn matches(&self, item: &u32) -> bool {
///         item % 2 == 0
///     }
/// }
///
/// let numbers = [1, 2, 3, 4];
/// assert_eq!(filter(&numbers, &Even), vec![&2, &4]);
/// ```
pub trait Predicate<T: ?Sized> {
    /// Returns `true` if `item` satisfies this predicate.
    fn matches(&self, item: &T) -> bool;

    /// Human-readable form of this predicate, for diagnostics.
    fn describe(&self) -> String {
        "<predicate>".to_string()
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Box<P> {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Rc<P> {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Combinator methods available on every predicate.
///
/// Each method moves `self` into shared ownership, so the result does not
/// borrow from its operands. Use [`PredicateExt::shared`] first when the
/// same predicate should appear in more than one tree.
pub trait PredicateExt<T: ?Sized>: Predicate<T> + Sized + 'static {
    /// Both `self` and `other` must match.
    fn and<Q>(self, other: Q) -> And<T>
    where
        Q: Predicate<T> + 'static,
    {
        And::new(Rc::new(self), Rc::new(other))
    }

    /// At least one of `self` and `other` must match.
    fn or<Q>(self, other: Q) -> Or<T>
    where
        Q: Predicate<T> + 'static,
    {
        Or::new(Rc::new(self), Rc::new(other))
    }

    /// Inverts `self`.
    fn not(self) -> Not<T> {
        Not::new(Rc::new(self))
    }

    /// Moves `self` behind an `Rc` so it can be shared between trees.
    fn shared(self) -> Rc<dyn Predicate<T>> {
        Rc::new(self)
    }
}

impl<T: ?Sized, P: Predicate<T> + 'static> PredicateExt<T> for P {}

/// A predicate backed by a closure.
///
/// Created by [`from_fn`].
pub struct FnPredicate<F> {
    name: String,
    test: F,
}

impl<T: ?Sized, F> Predicate<T> for FnPredicate<F>
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        (self.test)(item)
    }

    fn describe(&self) -> String {
        self.name.clone()
    }
}

impl<F> fmt::Debug for FnPredicate<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPredicate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Wraps a closure as a named predicate.
///
/// ```
/// use sift::{from_fn, Predicate};
///
/// let short = from_fn("len < 4", |s: &str| s.len() < 4);
/// assert!(short.matches("abc"));
/// assert_eq!(short.describe(), "len < 4");
/// ```
pub fn from_fn<T, F>(name: impl Into<String>, test: F) -> FnPredicate<F>
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    FnPredicate {
        name: name.into(),
        test,
    }
}

/// The predicate that matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Always;

impl<T: ?Sized> Predicate<T> for Always {
    fn matches(&self, _item: &T) -> bool {
        true
    }

    fn describe(&self) -> String {
        "*".to_string()
    }
}

/// Returns the predicate that matches everything.
pub fn always() -> Always {
    Always
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive;

    impl Predicate<i32> for Positive {
        fn matches(&self, item: &i32) -> bool {
            *item > 0
        }

        fn describe(&self) -> String {
            "x > 0".to_string()
        }
    }

    #[test]
    fn default_describe() {
        struct Anything;
        impl Predicate<i32> for Anything {
            fn matches(&self, _item: &i32) -> bool {
                true
            }
        }
        assert_eq!(Anything.describe(), "<predicate>");
    }

    #[test]
    fn forwards_through_pointers() {
        let boxed: Box<dyn Predicate<i32>> = Box::new(Positive);
        assert!(boxed.matches(&1));
        assert!(!boxed.matches(&-1));
        assert_eq!(boxed.describe(), "x > 0");

        let shared: Rc<dyn Predicate<i32>> = Rc::new(Positive);
        assert!(shared.matches(&3));

        let by_ref = &Positive;
        assert!(Predicate::matches(&by_ref, &5i32));
    }

    #[test]
    fn closure_predicate() {
        let even = from_fn("even", |n: &i32| n % 2 == 0);
        assert!(even.matches(&4));
        assert!(!even.matches(&3));
        assert_eq!(even.describe(), "even");
        assert!(format!("{:?}", even).contains("even"));
    }

    #[test]
    fn always_matches() {
        assert!(Predicate::<i32>::matches(&always(), &-7));
        assert!(Predicate::<str>::matches(&always(), ""));
    }

    #[test]
    fn ext_methods_compose() {
        let small = from_fn("x < 10", |n: &i32| *n < 10);
        let p = Positive.and(small);
        assert!(p.matches(&5));
        assert!(!p.matches(&-5));
        assert!(!p.matches(&50));

        let q = Positive.not();
        assert!(q.matches(&-1));
        assert!(!q.matches(&1));
    }
}
