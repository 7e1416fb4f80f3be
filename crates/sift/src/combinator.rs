//! Logical combinators over predicates.
//!
//! Operands are held as `Rc<dyn Predicate<T>>`: a combinator shares its
//! sub-predicates rather than copying them, and the same sub-predicate can
//! sit in several trees at once. Combinators are predicates themselves, so
//! they nest to any depth.

use std::fmt;
use std::rc::Rc;

use crate::error::{Result, SiftError};
use crate::predicate::Predicate;

/// Satisfied iff both operands are satisfied.
///
/// Evaluation short-circuits: the right operand is not consulted when the
/// left one fails.
///
/// # Example
///
/// ```
/// use std::rc::Rc;
/// use sift::{from_fn, And, Predicate};
///
/// let positive = Rc::new(from_fn("x > 0", |n: &i32| *n > 0));
/// let small = Rc::new(from_fn("x < 10", |n: &i32| *n < 10));
///
/// let both = And::new(positive, small);
/// assert!(both.matches(&3));
/// assert!(!both.matches(&30));
/// assert_eq!(both.describe(), "(x > 0 and x < 10)");
/// ```
pub struct And<T: ?Sized> {
    left: Rc<dyn Predicate<T>>,
    right: Rc<dyn Predicate<T>>,
}

impl<T: ?Sized> And<T> {
    /// Creates a conjunction of two shared predicates.
    pub fn new(left: Rc<dyn Predicate<T>>, right: Rc<dyn Predicate<T>>) -> Self {
        And { left, right }
    }

    /// Folds two or more predicates into a left-leaning conjunction.
    ///
    /// `[a, b, c]` becomes `(a and b) and c`. Fewer than two operands is a
    /// configuration error.
    pub fn chain<I>(operands: I) -> Result<Self>
    where
        T: 'static,
        I: IntoIterator<Item = Rc<dyn Predicate<T>>>,
    {
        fold_operands("and", operands, And::new)
    }

    /// Returns the left operand.
    pub fn left(&self) -> &Rc<dyn Predicate<T>> {
        &self.left
    }

    /// Returns the right operand.
    pub fn right(&self) -> &Rc<dyn Predicate<T>> {
        &self.right
    }
}

impl<T: ?Sized> Predicate<T> for And<T> {
    fn matches(&self, item: &T) -> bool {
        self.left.matches(item) && self.right.matches(item)
    }

    fn describe(&self) -> String {
        format!("({} and {})", self.left.describe(), self.right.describe())
    }
}

impl<T: ?Sized> Clone for And<T> {
    fn clone(&self) -> Self {
        And {
            left: Rc::clone(&self.left),
            right: Rc::clone(&self.right),
        }
    }
}

impl<T: ?Sized> fmt::Debug for And<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("And").field(&self.describe()).finish()
    }
}

/// Satisfied iff at least one operand is satisfied.
///
/// Short-circuits on the first match.
pub struct Or<T: ?Sized> {
    left: Rc<dyn Predicate<T>>,
    right: Rc<dyn Predicate<T>>,
}

impl<T: ?Sized> Or<T> {
    /// Creates a disjunction of two shared predicates.
    pub fn new(left: Rc<dyn Predicate<T>>, right: Rc<dyn Predicate<T>>) -> Self {
        Or { left, right }
    }

    /// Folds two or more predicates into a left-leaning disjunction.
    pub fn chain<I>(operands: I) -> Result<Self>
    where
        T: 'static,
        I: IntoIterator<Item = Rc<dyn Predicate<T>>>,
    {
        fold_operands("or", operands, Or::new)
    }
}

impl<T: ?Sized> Predicate<T> for Or<T> {
    fn matches(&self, item: &T) -> bool {
        self.left.matches(item) || self.right.matches(item)
    }

    fn describe(&self) -> String {
        format!("({} or {})", self.left.describe(), self.right.describe())
    }
}

impl<T: ?Sized> Clone for Or<T> {
    fn clone(&self) -> Self {
        Or {
            left: Rc::clone(&self.left),
            right: Rc::clone(&self.right),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Or<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Or").field(&self.describe()).finish()
    }
}

/// Satisfied iff the inner predicate is not.
pub struct Not<T: ?Sized> {
    inner: Rc<dyn Predicate<T>>,
}

impl<T: ?Sized> Not<T> {
    /// Creates the negation of a shared predicate.
    pub fn new(inner: Rc<dyn Predicate<T>>) -> Self {
        Not { inner }
    }
}

impl<T: ?Sized> Predicate<T> for Not<T> {
    fn matches(&self, item: &T) -> bool {
        !self.inner.matches(item)
    }

    fn describe(&self) -> String {
        format!("not {}", self.inner.describe())
    }
}

impl<T: ?Sized> Clone for Not<T> {
    fn clone(&self) -> Self {
        Not {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Not<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Not").field(&self.describe()).finish()
    }
}

/// Left-folds `operands` with `join`, failing on fewer than two.
fn fold_operands<T, C, I, F>(combinator: &'static str, operands: I, join: F) -> Result<C>
where
    T: ?Sized + 'static,
    C: Predicate<T> + 'static,
    I: IntoIterator<Item = Rc<dyn Predicate<T>>>,
    F: Fn(Rc<dyn Predicate<T>>, Rc<dyn Predicate<T>>) -> C,
{
    let mut operands = operands.into_iter();
    let (first, second) = match (operands.next(), operands.next()) {
        (Some(first), Some(second)) => (first, second),
        (first, _) => {
            return Err(SiftError::TooFewOperands {
                combinator,
                got: usize::from(first.is_some()),
            })
        }
    };
    let seed = join(first, second);
    Ok(operands.fold(seed, |acc, next| join(Rc::new(acc), next)))
}
