/// A broken tree invariant, reported by [`Tree::validate`][crate::Tree::validate].
///
/// Each variant names the key of the first offending node (rendered with
/// [`Debug`]) and the invariant it breaks. Seeing one of these means the tree
/// implementation is wrong; callers cannot recover from it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvalidStructure {
    /// A key sits on the wrong side of one of its ancestors.
    #[error("node {key} is out of order with respect to its ancestors")]
    Order {
        /// The misplaced key.
        key: String,
    },

    /// The cached height disagrees with the children's heights.
    #[error("node {key} caches height {cached} but its subtree has height {actual}")]
    Height {
        /// The node's key.
        key: String,
        /// Height stored in the node.
        cached: usize,
        /// Height computed from the children.
        actual: usize,
    },

    /// The cached size disagrees with the children's sizes.
    #[error("node {key} caches size {cached} but its subtree holds {actual} nodes")]
    Size {
        /// The node's key.
        key: String,
        /// Size stored in the node.
        cached: usize,
        /// Size computed from the children.
        actual: usize,
    },

    /// The children's heights differ by more than one.
    #[error("node {key} has balance factor {factor}")]
    Balance {
        /// The node's key.
        key: String,
        /// `height(left) - height(right)`.
        factor: isize,
    },
}
