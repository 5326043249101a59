//! Orderings a [`Tree`][crate::Tree] can be built over.
//!
//! A [`Tree`][crate::Tree] never calls [`Ord`] directly. Instead it holds a
//! [`Comparator`] by value and passes it down through every operation. Keys
//! that implement [`Ord`] can use [`Natural`], and any closure of the form
//! `Fn(&K, &K) -> Ordering` is a [`Comparator`] as well.
//!
//! # Examples
//!
//! ```
//! use avltree::Tree;
//!
//! let tree = Tree::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! let tree = tree.insert(1).insert(3).insert(2);
//!
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
//! ```

use std::cmp::Ordering;

/// A total order over `K`.
///
/// Implementations must be antisymmetric, transitive and consistent between
/// calls. The tree caches no comparison results so an inconsistent
/// comparator silently breaks the search order.
pub trait Comparator<K: ?Sized> {
    /// Compares `a` with `b`.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Natural;

impl<K> Comparator<K> for Natural
where
    K: Ord + ?Sized,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Comparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
