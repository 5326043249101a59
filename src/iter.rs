//! Iterators over the keys of a [`Tree`][crate::Tree].

use std::cmp::Ordering;
use std::iter::FusedIterator;

use crate::compare::Comparator;
use crate::node::Node;

/// An in-order walk over the keys of a [`Tree`][crate::Tree], smallest first.
///
/// Created by [`Tree::iter`][crate::Tree::iter].
#[derive(Debug)]
pub struct Iter<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> Iter<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>) -> Self {
        let mut this = Self {
            stack: Vec::with_capacity(root.map_or(0, Node::height)),
            remaining: root.map_or(0, Node::size),
        };

        // Descend down the left side of the tree.
        this.push_subtree(root);

        this
    }

    fn push_subtree(&mut self, subtree_root: Option<&'a Node<K>>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            self.stack.push(v);
            ptr = v.left();
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Descend down the left side of the right hand child of this node, if
        // any.
        self.push_subtree(v.right());
        self.remaining -= 1;

        Some(v.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// An in-order walk over the keys of a [`Tree`][crate::Tree] that fall within
/// an inclusive range.
///
/// Subtrees that cannot hold a key in range are never visited: a node ordering
/// before the lower bound has its left subtree skipped, and the walk stops at
/// the first node ordering after the upper bound.
///
/// Created by [`Tree::range`][crate::Tree::range].
#[derive(Debug)]
pub struct Range<'a, K, C> {
    stack: Vec<&'a Node<K>>,
    lo: &'a K,
    hi: &'a K,
    cmp: &'a C,
}

impl<'a, K, C> Range<'a, K, C>
where
    C: Comparator<K>,
{
    pub(crate) fn new(root: Option<&'a Node<K>>, lo: &'a K, hi: &'a K, cmp: &'a C) -> Self {
        let mut this = Self {
            stack: Vec::new(),
            lo,
            hi,
            cmp,
        };

        this.push_subtree(root);

        this
    }

    /// Pushes the left spine of `subtree_root`, stepping right past any node
    /// that orders before the lower bound.
    fn push_subtree(&mut self, subtree_root: Option<&'a Node<K>>) {
        let mut ptr = subtree_root;

        while let Some(v) = ptr {
            if self.cmp.compare(v.key(), self.lo) == Ordering::Less {
                ptr = v.right();
            } else {
                self.stack.push(v);
                ptr = v.left();
            }
        }
    }
}

impl<'a, K, C> Iterator for Range<'a, K, C>
where
    C: Comparator<K>,
{
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Everything still on the stack orders after `v`.
        if self.cmp.compare(v.key(), self.hi) == Ordering::Greater {
            self.stack.clear();
            return None;
        }

        self.push_subtree(v.right());

        Some(v.key())
    }
}

impl<K, C> FusedIterator for Range<'_, K, C> where C: Comparator<K> {}
