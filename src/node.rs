//! The vertices of a [`Tree`][crate::Tree] and the AVL balancing kernel.
//!
//! A [`Node`] is never modified after it is built. Operations that would
//! change a subtree instead build a new spine from the changed position back
//! up to the subtree root and reference every untouched child of the old
//! spine. Keys are held in [`Arc`]s so rotations and successor lifting can
//! move them between nodes without cloning `K`.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::compare::Comparator;

/// A possibly empty subtree. Many parents, across many versions of a tree,
/// may share the same `Link`.
#[derive(Debug)]
pub(crate) struct Link<K>(Option<Arc<Node<K>>>);

impl<K> Clone for Link<K> {
    fn clone(&self) -> Self {
        Self(self.0.as_ref().map(Arc::clone))
    }
}

impl<K> From<Node<K>> for Link<K> {
    fn from(node: Node<K>) -> Self {
        Self(Some(Arc::new(node)))
    }
}

impl<K> Link<K> {
    pub(crate) fn empty() -> Self {
        Self(None)
    }

    pub(crate) fn node(&self) -> Option<&Node<K>> {
        self.0.as_deref()
    }

    /// Height of the subtree, with an empty subtree being 0.
    pub(crate) fn height(&self) -> usize {
        self.node().map_or(0, |n| n.height)
    }

    pub(crate) fn size(&self) -> usize {
        self.node().map_or(0, |n| n.size)
    }

    /// Returns the subtree with `key` added, or `None` if an equal key is
    /// already present and the subtree is unchanged.
    pub(crate) fn insert<C>(&self, key: K, cmp: &C) -> Option<Self>
    where
        C: Comparator<K>,
    {
        match self.node() {
            None => Some(Self::from(Node::leaf(key))),
            Some(n) => n.insert(key, cmp).map(Self::from),
        }
    }

    /// Returns the subtree without `key`, or `None` if no equal key is
    /// present and the subtree is unchanged.
    pub(crate) fn delete<C>(&self, key: &K, cmp: &C) -> Option<Self>
    where
        C: Comparator<K>,
    {
        self.node().and_then(|n| n.delete(key, cmp))
    }

    pub(crate) fn find<C>(&self, key: &K, cmp: &C) -> Option<&K>
    where
        C: Comparator<K>,
    {
        self.node().and_then(|n| n.find(key, cmp))
    }
}

/// A single vertex of a [`Tree`][crate::Tree].
///
/// Every key in the left subtree orders before this node's key and every key
/// in the right subtree orders after it. The node caches the height and size
/// of the subtree it roots.
#[derive(Debug)]
pub struct Node<K> {
    key: Arc<K>,
    left: Link<K>,
    right: Link<K>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,

    /// How many nodes are in the subtree rooted at this node, including
    /// itself.
    size: usize,
}

impl<K> Node<K> {
    /// The only place `height` and `size` are derived.
    fn new(key: Arc<K>, left: Link<K>, right: Link<K>) -> Self {
        Self {
            height: left.height().max(right.height()) + 1,
            size: left.size() + right.size() + 1,
            key,
            left,
            right,
        }
    }

    fn leaf(key: K) -> Self {
        Self::new(Arc::new(key), Link::empty(), Link::empty())
    }

    /// Builds a node from children that are each balanced and whose heights
    /// differ by at most two, rotating as needed.
    fn balanced(key: Arc<K>, left: Link<K>, right: Link<K>) -> Self {
        Self::new(key, left, right).rebalance()
    }

    /// Builds a node with arbitrary cached values, for exercising validation.
    #[cfg(test)]
    pub(crate) fn from_parts(
        key: K,
        left: Option<Node<K>>,
        right: Option<Node<K>>,
        height: usize,
        size: usize,
    ) -> Self {
        Self {
            key: Arc::new(key),
            left: Link(left.map(Arc::new)),
            right: Link(right.map(Arc::new)),
            height,
            size,
        }
    }

    /// The key stored at this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node<K>> {
        self.left.node()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node<K>> {
        self.right.node()
    }

    /// Number of levels in the subtree rooted here. A leaf has height 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of nodes in the subtree rooted here.
    pub fn size(&self) -> usize {
        self.size
    }

    /// `height(left) - height(right)`. Anything outside `-1..=1` needs a
    /// rotation.
    pub(crate) fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    /// Lifts the left child to the root. The old root becomes the new root's
    /// right child and adopts the left child's right subtree as its left.
    ///
    /// Returns an equivalent node if there is no left child to lift.
    fn rotate_right(&self) -> Self {
        match self.left.node() {
            None => Self::new(Arc::clone(&self.key), Link::empty(), self.right.clone()),
            Some(l) => {
                let new_right = Self::new(Arc::clone(&self.key), l.right.clone(), self.right.clone());
                Self::new(Arc::clone(&l.key), l.left.clone(), Link::from(new_right))
            }
        }
    }

    /// Lifts the right child to the root. The old root becomes the new root's
    /// left child and adopts the right child's left subtree as its right.
    ///
    /// Returns an equivalent node if there is no right child to lift.
    fn rotate_left(&self) -> Self {
        match self.right.node() {
            None => Self::new(Arc::clone(&self.key), self.left.clone(), Link::empty()),
            Some(r) => {
                let new_left = Self::new(Arc::clone(&self.key), self.left.clone(), r.left.clone());
                Self::new(Arc::clone(&r.key), Link::from(new_left), r.right.clone())
            }
        }
    }

    /// Restores the AVL property at this node, assuming both children already
    /// satisfy it and the balance factor is within `-2..=2`.
    ///
    /// **Note** This takes `self` so an already balanced node is returned
    /// without rebuilding it.
    fn rebalance(self) -> Self {
        let balance_factor = self.balance_factor();
        let balanced = if balance_factor > 1 {
            match self.left.node() {
                // Left-right: straighten the left child first.
                Some(l) if l.balance_factor() < 0 => Self::new(
                    Arc::clone(&self.key),
                    Link::from(l.rotate_left()),
                    self.right.clone(),
                )
                .rotate_right(),
                _ => self.rotate_right(),
            }
        } else if balance_factor < -1 {
            match self.right.node() {
                // Right-left: straighten the right child first.
                Some(r) if r.balance_factor() > 0 => Self::new(
                    Arc::clone(&self.key),
                    self.left.clone(),
                    Link::from(r.rotate_right()),
                )
                .rotate_left(),
                _ => self.rotate_left(),
            }
        } else {
            self
        };

        // In tests, after balancing, assert that we've restored/maintained the AVL invariant.
        if cfg!(test) {
            assert!(balanced.balance_factor().abs() <= 1);
        }
        balanced
    }

    fn insert<C>(&self, key: K, cmp: &C) -> Option<Self>
    where
        C: Comparator<K>,
    {
        match cmp.compare(&key, self.key()) {
            Ordering::Less => {
                let new_left = self.left.insert(key, cmp)?;
                Some(Self::balanced(Arc::clone(&self.key), new_left, self.right.clone()))
            }
            Ordering::Equal => None,
            Ordering::Greater => {
                let new_right = self.right.insert(key, cmp)?;
                Some(Self::balanced(Arc::clone(&self.key), self.left.clone(), new_right))
            }
        }
    }

    fn find<C>(&self, key: &K, cmp: &C) -> Option<&K>
    where
        C: Comparator<K>,
    {
        match cmp.compare(key, self.key()) {
            Ordering::Less => self.left.find(key, cmp),
            Ordering::Equal => Some(self.key()),
            Ordering::Greater => self.right.find(key, cmp),
        }
    }

    fn delete<C>(&self, key: &K, cmp: &C) -> Option<Link<K>>
    where
        C: Comparator<K>,
    {
        match cmp.compare(key, self.key()) {
            Ordering::Less => {
                let new_left = self.left.delete(key, cmp)?;
                Some(Link::from(Self::balanced(
                    Arc::clone(&self.key),
                    new_left,
                    self.right.clone(),
                )))
            }
            Ordering::Equal => Some(self.splice()),
            Ordering::Greater => {
                let new_right = self.right.delete(key, cmp)?;
                Some(Link::from(Self::balanced(
                    Arc::clone(&self.key),
                    self.left.clone(),
                    new_right,
                )))
            }
        }
    }

    /// Returns the subtree rooted here with this node's key removed.
    fn splice(&self) -> Link<K> {
        match (self.left.node(), self.right.node()) {
            (None, None) => Link::empty(),
            (Some(_), None) => self.left.clone(),
            (None, Some(_)) => self.right.clone(),

            // With two children a replacement key is lifted from the taller
            // subtree: the predecessor if the left is strictly taller,
            // otherwise the successor.
            (Some(left), Some(right)) => {
                if left.height > right.height {
                    let (pred_key, new_left) = left.delete_largest();
                    Link::from(Self::balanced(pred_key, new_left, self.right.clone()))
                } else {
                    let (succ_key, new_right) = right.delete_smallest();
                    Link::from(Self::balanced(succ_key, self.left.clone(), new_right))
                }
            }
        }
    }

    /// Returns the largest key and a new subtree without it.
    fn delete_largest(&self) -> (Arc<K>, Link<K>) {
        match self.right.node() {
            None => (Arc::clone(&self.key), self.left.clone()),
            Some(r) => {
                let (key, new_right) = r.delete_largest();
                let node = Self::balanced(Arc::clone(&self.key), self.left.clone(), new_right);
                (key, Link::from(node))
            }
        }
    }

    /// Returns the smallest key and a new subtree without it.
    fn delete_smallest(&self) -> (Arc<K>, Link<K>) {
        match self.left.node() {
            None => (Arc::clone(&self.key), self.right.clone()),
            Some(l) => {
                let (key, new_left) = l.delete_smallest();
                let node = Self::balanced(Arc::clone(&self.key), new_left, self.right.clone());
                (key, Link::from(node))
            }
        }
    }

    /// The leftmost node of this subtree.
    pub(crate) fn first(&self) -> &Self {
        let mut node = self;
        while let Some(l) = node.left() {
            node = l;
        }
        node
    }

    /// The rightmost node of this subtree.
    pub(crate) fn last(&self) -> &Self {
        let mut node = self;
        while let Some(r) = node.right() {
            node = r;
        }
        node
    }
}
