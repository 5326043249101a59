use avltree::Tree;

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a set, validating the tree
/// after every step. This way we can ensure that after a random smattering
/// of inserts and deletes we have the same set of keys in both.
fn do_ops<K>(ops: &[Op<K>], mut tree: Tree<K>, set: &mut BTreeSet<K>) -> Tree<K>
where
    K: std::fmt::Debug + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                tree = tree.insert(k.clone());
                set.insert(k.clone());
            }
            Op::Delete(k) => {
                tree = tree.delete(k);
                set.remove(k);
            }
            Op::Iter => {
                assert!(tree.iter().eq(set.iter()));
            }
        }
        tree.validate().expect("invalid tree");
        assert_eq!(tree.size(), set.len());
    }

    tree
}

fn build(xs: &[i8]) -> Tree<i8> {
    xs.iter().fold(Tree::new(), |tree, x| tree.insert(*x))
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let _ = pretty_env_logger::try_init();

    let mut set = BTreeSet::new();
    let tree = do_ops(&ops, Tree::new(), &mut set);

    set.iter().all(|key| tree.contains(key)) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = build(&xs);

    xs.iter().all(|x| tree.get(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = build(&xs);
    let added: BTreeSet<_> = xs.into_iter().collect();

    nots.iter()
        .filter(|x| !added.contains(*x))
        .all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = build(&xs);
    for delete in &deletes {
        tree = tree.delete(delete);
    }

    let deleted: BTreeSet<_> = deletes.iter().collect();
    let mut still_present = xs.iter().filter(|x| !deleted.contains(x));

    tree.validate().is_ok()
        && deletes.iter().all(|x| !tree.contains(x))
        && still_present.all(|x| tree.contains(x))
}

#[quickcheck]
fn insert_grows_size_by_novelty(xs: Vec<i8>, k: i8) -> bool {
    let tree = build(&xs);
    let expected = tree.size() + usize::from(!tree.contains(&k));
    let inserted = tree.insert(k);

    inserted.size() == expected && inserted.contains(&k)
}

#[quickcheck]
fn delete_shrinks_size_by_presence(xs: Vec<i8>, k: i8) -> bool {
    let tree = build(&xs);
    let expected = tree.size() - usize::from(tree.contains(&k));
    let deleted = tree.delete(&k);

    deleted.size() == expected && !deleted.contains(&k)
}

#[quickcheck]
fn insert_and_delete_are_idempotent(xs: Vec<i8>, k: i8) -> bool {
    let tree = build(&xs);

    tree.insert(k).insert(k) == tree.insert(k) && tree.delete(&k).delete(&k) == tree.delete(&k)
}

#[quickcheck]
fn order_independent(xs: Vec<i8>) -> bool {
    let mut sorted = xs.clone();
    sorted.sort_unstable();
    sorted.dedup();

    let mut reversed = xs.clone();
    reversed.reverse();

    let forward = build(&xs);
    let backward = build(&reversed);

    forward.iter().copied().eq(sorted.iter().copied())
        && backward.iter().copied().eq(sorted.iter().copied())
        && forward == backward
}

#[quickcheck]
fn old_handles_are_unchanged(xs: Vec<i8>, k: i8) -> bool {
    let tree = build(&xs);
    let had_k = tree.contains(&k);
    let size = tree.size();
    let before: Vec<i8> = tree.iter().copied().collect();

    let _inserted = tree.insert(k);
    let _deleted = tree.delete(&k);

    tree.contains(&k) == had_k && tree.size() == size && tree.iter().copied().eq(before)
}

#[quickcheck]
fn height_is_logarithmic(xs: Vec<i16>) -> bool {
    let tree = xs.iter().fold(Tree::new(), |tree, x| tree.insert(*x));
    let n = tree.size();

    n == 0 || tree.height() as f64 <= 1.44 * ((n + 2) as f64).log2()
}

#[quickcheck]
fn range_is_inorder_subsequence(xs: Vec<i8>, lo: i8, hi: i8) -> bool {
    let tree = build(&xs);
    let expected = tree.iter().filter(|k| lo <= **k && **k <= hi);

    tree.range(&lo, &hi).eq(expected)
}

/// Inserting keys in ascending order is the classic worst case for an
/// unbalanced BST.
#[test]
fn ascending_inserts_stay_balanced() {
    let tree: Tree<u32> = (0..1 << 12).collect();

    assert_eq!(tree.size(), 1 << 12);
    assert_eq!(tree.height(), 13);
    tree.validate().expect("invalid tree");

    let tree = (0..1 << 11).fold(tree, |tree, k| tree.delete(&(k * 2)));
    assert_eq!(tree.size(), 1 << 11);
    assert!(tree.iter().all(|k| k % 2 == 1));
    tree.validate().expect("invalid tree");
}

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn handles_are_send_and_sync() {
    assert_send_sync::<Tree<i32>>();
    assert_send_sync::<Tree<String>>();
}

#[test]
fn cloned_handles_read_across_threads() {
    let tree: Tree<u32> = (0..1000).collect();
    let readers = (0..4)
        .map(|offset| {
            let tree = tree.clone();
            std::thread::spawn(move || {
                tree.validate().expect("invalid tree");
                (offset..1000).step_by(4).all(|k| tree.contains(&k)) && tree.size() == 1000
            })
        })
        .collect::<Vec<_>>();

    // The original handle stays usable while the clones are read elsewhere.
    let tree = tree.delete(&0);
    for reader in readers {
        assert!(reader.join().expect("reader panicked"));
    }
    assert_eq!(tree.size(), 999);
}
