//! Aggregate queries: height, node count, extreme values.

use crate::types::{Node, ValueNode};
use crate::util::{find_max, find_min};

/// Edge count of the longest root-to-leaf path; `-1` for an absent tree.
pub fn height<N: Node>(arena: &[N], root: Option<u32>) -> i32 {
    let mut level: Vec<u32> = root.into_iter().collect();
    let mut h = -1;
    while !level.is_empty() {
        h += 1;
        level = level
            .iter()
            .flat_map(|&idx| {
                let node = &arena[idx as usize];
                node.l().into_iter().chain(node.r())
            })
            .collect();
    }
    h
}

pub fn count_nodes<N: Node>(arena: &[N], root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        count += 1;
        let node = &arena[idx as usize];
        stack.extend(node.l());
        stack.extend(node.r());
    }
    count
}

/// Smallest value, or `None` for an absent tree.
pub fn find_min_val<N>(arena: &[N], root: Option<u32>) -> Option<N::Value>
where
    N: ValueNode,
    N::Value: Clone,
{
    root.map(|r| arena[find_min(arena, r) as usize].value().clone())
}

/// Largest value, or `None` for an absent tree.
pub fn find_max_val<N>(arena: &[N], root: Option<u32>) -> Option<N::Value>
where
    N: ValueNode,
    N::Value: Clone,
{
    root.map(|r| arena[find_max(arena, r) as usize].value().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::NodePool;
    use crate::util::insert;

    #[test]
    fn height_of_shapes() {
        let mut pool = NodePool::new();
        assert_eq!(height(pool.nodes(), None), -1);
        let mut root = insert(&mut pool, None, 1);
        assert_eq!(height(pool.nodes(), root), 0);
        for v in 2..=5 {
            root = insert(&mut pool, root, v);
        }
        assert_eq!(height(pool.nodes(), root), 4);
        assert_eq!(count_nodes(pool.nodes(), root), 5);
        assert_eq!(find_min_val(pool.nodes(), root), Some(1));
        assert_eq!(find_max_val(pool.nodes(), root), Some(5));
    }

    #[test]
    fn empty_tree_sentinels() {
        let pool: NodePool<i32> = NodePool::new();
        assert_eq!(count_nodes(pool.nodes(), None), 0);
        assert_eq!(find_min_val(pool.nodes(), None), None);
        assert_eq!(find_max_val(pool.nodes(), None), None);
    }
}
