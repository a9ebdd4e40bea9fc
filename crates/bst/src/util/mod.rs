//! Tree-shape operations over an arena of [`Node`]s.
//!
//! Every mutating function takes the current root and returns the new root,
//! which the caller stores back. Read-only queries take any `&[N]` slice of
//! nodes, so they work on a [`NodePool`]'s backing storage as well as on a
//! hand-built arena.

pub mod stats;
pub mod traversal;

use std::cmp::Ordering;

use crate::pool::NodePool;
use crate::types::{Node, SearchResult, ValueNode};

pub use stats::{count_nodes, find_max_val, find_min_val, height};
pub use traversal::{inorder, postorder, preorder};

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

/// Leftmost node of the subtree rooted at `node`.
///
/// Used to locate the in-order successor during two-child deletion.
pub fn find_min<N: Node>(arena: &[N], mut node: u32) -> u32 {
    while let Some(l) = get_l(arena, node) {
        node = l;
    }
    node
}

/// Rightmost node of the subtree rooted at `node`.
pub fn find_max<N: Node>(arena: &[N], mut node: u32) -> u32 {
    while let Some(r) = get_r(arena, node) {
        node = r;
    }
    node
}

/// Inserts `value` and returns the new root.
///
/// An absent root yields a single-node tree. A value equal to an existing
/// node's value is swallowed: neither comparison branch is taken and the tree
/// is returned unchanged. Callers that need to report duplicates must check
/// with [`contains`] first.
pub fn insert<T: Ord>(pool: &mut NodePool<T>, root: Option<u32>, value: T) -> Option<u32> {
    let Some(root) = root else {
        return Some(pool.alloc(value));
    };
    let mut curr = root;
    loop {
        let (l, r, ord) = {
            let node = &pool[curr];
            (node.l, node.r, value.cmp(&node.v))
        };
        match ord {
            Ordering::Less => match l {
                Some(l) => curr = l,
                None => {
                    let leaf = pool.alloc(value);
                    pool[curr].l = Some(leaf);
                    break;
                }
            },
            Ordering::Greater => match r {
                Some(r) => curr = r,
                None => {
                    let leaf = pool.alloc(value);
                    pool[curr].r = Some(leaf);
                    break;
                }
            },
            Ordering::Equal => break,
        }
    }
    Some(root)
}

/// Deletes `value` and returns the new root.
///
/// Hibbard deletion: a matched node missing its left child is replaced by
/// its right child and vice versa. A node with both children takes the value
/// of its in-order successor, and the successor is spliced out of the right
/// subtree instead. Deleting an absent value returns `root` untouched.
pub fn delete_node<T: Ord + Clone>(
    pool: &mut NodePool<T>,
    root: Option<u32>,
    value: &T,
) -> Option<u32> {
    remove(pool, root, value).0
}

/// Same as [`delete_node`], also reporting whether a node was spliced out.
pub(crate) fn remove<T: Ord + Clone>(
    pool: &mut NodePool<T>,
    root: Option<u32>,
    value: &T,
) -> (Option<u32>, bool) {
    let mut parent: Option<u32> = None;
    let mut curr = root;
    while let Some(idx) = curr {
        match value.cmp(&pool[idx].v) {
            Ordering::Less => {
                parent = Some(idx);
                curr = pool[idx].l;
            }
            Ordering::Greater => {
                parent = Some(idx);
                curr = pool[idx].r;
            }
            Ordering::Equal => break,
        }
    }
    let Some(target) = curr else {
        return (root, false);
    };

    let (l, r) = (pool[target].l, pool[target].r);
    let replacement = match (l, r) {
        (None, r) => r,
        (l, None) => l,
        (Some(_), Some(r)) => {
            // Successor has no left child, so it splices out like case (a).
            let mut succ_parent = target;
            let mut succ = r;
            while let Some(sl) = pool[succ].l {
                succ_parent = succ;
                succ = sl;
            }
            let succ_right = pool[succ].r;
            if succ_parent == target {
                pool[target].r = succ_right;
            } else {
                pool[succ_parent].l = succ_right;
            }
            let promoted = pool[succ].v.clone();
            log::trace!("bst: promoting successor node {succ} into {target}");
            pool[target].v = promoted;
            pool.release(succ);
            return (root, true);
        }
    };

    pool.release(target);
    match parent {
        None => (replacement, true),
        Some(p) => {
            if pool[p].l == Some(target) {
                pool[p].l = replacement;
            } else {
                pool[p].r = replacement;
            }
            (root, true)
        }
    }
}

/// Walks from `root` towards `value`, recording each visited value.
pub fn search<T, N>(arena: &[N], root: Option<u32>, value: &T) -> SearchResult<T>
where
    T: Ord + Clone,
    N: ValueNode<Value = T>,
{
    let mut path = Vec::new();
    let mut curr = root;
    while let Some(idx) = curr {
        let node = &arena[idx as usize];
        path.push(node.value().clone());
        curr = match value.cmp(node.value()) {
            Ordering::Equal => return SearchResult { found: true, path },
            Ordering::Less => node.l(),
            Ordering::Greater => node.r(),
        };
    }
    SearchResult { found: false, path }
}

/// Finds the node holding `value`.
pub fn find<T, N>(arena: &[N], root: Option<u32>, value: &T) -> Option<u32>
where
    T: Ord,
    N: ValueNode<Value = T>,
{
    let mut curr = root;
    while let Some(idx) = curr {
        let node = &arena[idx as usize];
        curr = match value.cmp(node.value()) {
            Ordering::Equal => return Some(idx),
            Ordering::Less => node.l(),
            Ordering::Greater => node.r(),
        };
    }
    None
}

pub fn contains<T, N>(arena: &[N], root: Option<u32>, value: &T) -> bool
where
    T: Ord,
    N: ValueNode<Value = T>,
{
    find(arena, root, value).is_some()
}
