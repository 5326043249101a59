//! A persistent AVL tree. Any operations that one would expect to modify the
//! tree (e.g. `insert` or `delete`) instead return a new tree that references
//! most of the nodes of the original tree.
//!
//! # Examples
//!
//! ```
//! use avltree::Tree;
//!
//! let tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! // This `insert` returns a new tree!
//! let new_tree = tree.insert(1);
//!
//! // The new tree has this new key but the old one doesn't.
//! assert!(new_tree.contains(&1));
//! assert!(!tree.contains(&1));
//!
//! // And delete it for good measure.
//! let newer_tree = new_tree.insert(2).delete(&1);
//!
//! // All history is preserved.
//! assert_eq!(newer_tree.iter().collect::<Vec<_>>(), vec![&2]);
//! assert_eq!(new_tree.iter().collect::<Vec<_>>(), vec![&1]);
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use crate::compare::{Comparator, Natural};
use crate::error::InvalidStructure;
use crate::iter::{Iter, Range};
use crate::node::{Link, Node};
use crate::validate;

/// A handle to an immutable, self-balancing binary search tree of keys.
///
/// Keys are ordered by the comparator `C` held in the handle. Cloning a
/// `Tree` is cheap: the clone shares every node with the original.
pub struct Tree<K, C = Natural> {
    root: Link<K>,
    cmp: C,
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree` ordered by `K`'s [`Ord`] implementation.
    pub fn new() -> Self {
        Self::with_comparator(Natural)
    }
}

impl<K, C> Default for Tree<K, C>
where
    C: Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

/// Manual implementation of `Clone` so we don't require `K: Clone` to share
/// the nodes.
impl<K, C> Clone for Tree<K, C>
where
    C: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            cmp: self.cmp.clone(),
        }
    }
}

impl<K, C> Tree<K, C> {
    /// Generates a new, empty `Tree` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
    /// let tree = Tree::with_comparator(by_len).insert("ccc").insert("a").insert("bb");
    ///
    /// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![&"a", &"bb", &"ccc"]);
    /// // Keys comparing equal are duplicates.
    /// assert_eq!(tree.insert("zz").len(), 3);
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self {
            root: Link::empty(),
            cmp,
        }
    }

    /// The comparator ordering this tree.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns a new tree that also contains `key`. If an equal key is
    /// already present the returned tree shares this tree's root.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    /// let new_tree = tree.insert(2);
    ///
    /// // All history is preserved.
    /// assert_eq!(new_tree.len(), 2);
    /// assert_eq!(tree.len(), 1);
    /// assert_eq!(new_tree.insert(2).len(), 2);
    /// ```
    pub fn insert(&self, key: K) -> Self
    where
        C: Comparator<K> + Clone,
    {
        match self.root.insert(key, &self.cmp) {
            Some(root) => Self {
                root,
                cmp: self.cmp.clone(),
            },
            None => {
                log::trace!("insert of a key already present, tree unchanged");
                self.clone()
            }
        }
    }

    /// Returns a new tree without the key equal to `key`. If the tree never
    /// contained such a key the returned tree shares this tree's root.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let tree = Tree::new().insert(1);
    /// let newer_tree = tree.delete(&1);
    ///
    /// // All history is preserved.
    /// assert!(!newer_tree.contains(&1));
    /// assert!(tree.contains(&1));
    ///
    /// // Deleting an absent key is not an error.
    /// assert!(newer_tree.delete(&1).is_empty());
    /// ```
    pub fn delete(&self, key: &K) -> Self
    where
        C: Comparator<K> + Clone,
    {
        match self.root.delete(key, &self.cmp) {
            Some(root) => Self {
                root,
                cmp: self.cmp.clone(),
            },
            None => {
                log::trace!("delete of a key not present, tree unchanged");
                self.clone()
            }
        }
    }

    /// Returns `true` if the tree holds a key equal to `key`.
    pub fn contains(&self, key: &K) -> bool
    where
        C: Comparator<K>,
    {
        self.get(key).is_some()
    }

    /// Potentially finds the stored key equal to `key`. This is useful
    /// when the comparator only looks at part of the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let by_id = |a: &(u32, &str), b: &(u32, &str)| a.0.cmp(&b.0);
    /// let tree = Tree::with_comparator(by_id).insert((1, "one")).insert((2, "two"));
    ///
    /// assert_eq!(tree.get(&(2, "")), Some(&(2, "two")));
    /// assert_eq!(tree.get(&(42, "")), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&K>
    where
        C: Comparator<K>,
    {
        self.root.find(key, &self.cmp)
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|n| n.first().key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|n| n.last().key())
    }

    /// Iterates, in ascending order, over the keys `k` with
    /// `lo <= k <= hi`. A `lo` ordering after `hi` yields nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use avltree::Tree;
    ///
    /// let tree: Tree<_> = (0..10).collect();
    ///
    /// assert_eq!(tree.range(&3, &6).copied().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    /// assert_eq!(tree.range(&6, &3).count(), 0);
    /// ```
    pub fn range<'a>(&'a self, lo: &'a K, hi: &'a K) -> Range<'a, K, C>
    where
        C: Comparator<K>,
    {
        Range::new(self.root(), lo, hi, &self.cmp)
    }

    /// Iterates over every key in ascending order.
    pub fn iter(&self) -> Iter<'_, K> {
        Iter::new(self.root())
    }

    /// Gets the number of keys in this tree.
    pub fn size(&self) -> usize {
        self.root.size()
    }

    /// Alias for [`Tree::size`].
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Returns `true` if the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.node().is_none()
    }

    /// Gets the height of this tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// The root node, for inspecting the shape of the tree.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.node()
    }

    /// Checks every structural invariant of the tree: search order, cached
    /// heights and sizes, and AVL balance.
    ///
    /// An error here indicates a bug in this crate.
    pub fn validate(&self) -> Result<(), InvalidStructure>
    where
        K: fmt::Debug,
        C: Comparator<K>,
    {
        validate::validate(self.root(), &self.cmp).map_err(|e| {
            log::debug!("tree failed validation: {}", e);
            e
        })
    }
}

/// Two trees are equal when they hold the same keys, regardless of shape.
impl<K, C> PartialEq for Tree<K, C>
where
    C: Comparator<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| self.cmp.compare(a, b) == Ordering::Equal)
    }
}

impl<K, C> Eq for Tree<K, C> where C: Comparator<K> {}

impl<K, C> fmt::Debug for Tree<K, C>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, K, C> IntoIterator for &'a Tree<K, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        iter.into_iter().fold(Self::new(), |tree, key| tree.insert(key))
    }
}

impl<K, C> Extend<K> for Tree<K, C>
where
    C: Comparator<K> + Clone,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            *self = self.insert(key);
        }
    }
}
