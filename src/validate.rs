use std::cmp::Ordering;
use std::fmt::Debug;

use crate::compare::Comparator;
use crate::error::InvalidStructure;
use crate::node::Node;

/// Walks the tree rooted at `root` depth first and reports the first node
/// that breaks the search order, a cached height or size, or the AVL balance.
pub(crate) fn validate<K, C>(root: Option<&Node<K>>, cmp: &C) -> Result<(), InvalidStructure>
where
    K: Debug,
    C: Comparator<K>,
{
    check(root, None, None, cmp).map(|_| ())
}

/// Checks the subtree at `node`, whose keys must all fall strictly between
/// `lower` and `upper`, and returns its actual `(height, size)`.
fn check<K, C>(
    node: Option<&Node<K>>,
    lower: Option<&K>,
    upper: Option<&K>,
    cmp: &C,
) -> Result<(usize, usize), InvalidStructure>
where
    K: Debug,
    C: Comparator<K>,
{
    let node = match node {
        Some(n) => n,
        None => return Ok((0, 0)),
    };
    let key = node.key();

    let above_lower = lower.map_or(true, |lo| cmp.compare(lo, key) == Ordering::Less);
    let below_upper = upper.map_or(true, |hi| cmp.compare(key, hi) == Ordering::Less);
    if !(above_lower && below_upper) {
        return Err(InvalidStructure::Order {
            key: format!("{:?}", key),
        });
    }

    let (left_height, left_size) = check(node.left(), lower, Some(key), cmp)?;
    let (right_height, right_size) = check(node.right(), Some(key), upper, cmp)?;

    let height = left_height.max(right_height) + 1;
    if node.height() != height {
        return Err(InvalidStructure::Height {
            key: format!("{:?}", key),
            cached: node.height(),
            actual: height,
        });
    }

    let size = left_size + right_size + 1;
    if node.size() != size {
        return Err(InvalidStructure::Size {
            key: format!("{:?}", key),
            cached: node.size(),
            actual: size,
        });
    }

    let factor = left_height as isize - right_height as isize;
    if factor.abs() > 1 {
        return Err(InvalidStructure::Balance {
            key: format!("{:?}", key),
            factor,
        });
    }

    Ok((height, size))
}
