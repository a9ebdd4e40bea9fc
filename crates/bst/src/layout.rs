//! Grid placement for renderers.
//!
//! A node's column is its in-order index and its row is its depth, which
//! gives every node a distinct column and keeps left subtrees strictly to the
//! left of their parent.

use crate::types::ValueNode;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement<T> {
    pub value: T,
    pub column: usize,
    pub depth: usize,
}

/// Places every node of the tree, in in-order sequence.
pub fn layout<N>(arena: &[N], root: Option<u32>) -> Vec<Placement<N::Value>>
where
    N: ValueNode,
    N::Value: Clone,
{
    let mut out = Vec::new();
    let mut stack: Vec<(u32, usize)> = Vec::new();
    let mut curr = root.map(|r| (r, 0));
    loop {
        while let Some((idx, depth)) = curr {
            stack.push((idx, depth));
            curr = arena[idx as usize].l().map(|l| (l, depth + 1));
        }
        let Some((idx, depth)) = stack.pop() else {
            break;
        };
        let node = &arena[idx as usize];
        out.push(Placement {
            value: node.value().clone(),
            column: out.len(),
            depth,
        });
        curr = node.r().map(|r| (r, depth + 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::NodePool;
    use crate::util::insert;

    #[test]
    fn columns_follow_inorder_and_rows_follow_depth() {
        let mut pool = NodePool::new();
        let mut root = None;
        for v in [50, 30, 70, 40] {
            root = insert(&mut pool, root, v);
        }
        let placed: Vec<(i32, usize, usize)> = layout(pool.nodes(), root)
            .into_iter()
            .map(|p| (p.value, p.column, p.depth))
            .collect();
        assert_eq!(placed, vec![(30, 0, 1), (40, 1, 2), (50, 2, 0), (70, 3, 1)]);
    }
}
