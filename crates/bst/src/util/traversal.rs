//! Depth-first traversals.
//!
//! Explicit stacks keep degenerate (list-shaped) trees from exhausting the
//! call stack.

use crate::types::ValueNode;

/// Left subtree, node, right subtree. Strictly increasing for a valid tree.
pub fn inorder<N>(arena: &[N], root: Option<u32>) -> Vec<N::Value>
where
    N: ValueNode,
    N::Value: Clone,
{
    let mut out = Vec::new();
    let mut stack = Vec::new();
    let mut curr = root;
    loop {
        while let Some(idx) = curr {
            stack.push(idx);
            curr = arena[idx as usize].l();
        }
        let Some(idx) = stack.pop() else {
            break;
        };
        let node = &arena[idx as usize];
        out.push(node.value().clone());
        curr = node.r();
    }
    out
}

/// Node, left subtree, right subtree.
pub fn preorder<N>(arena: &[N], root: Option<u32>) -> Vec<N::Value>
where
    N: ValueNode,
    N::Value: Clone,
{
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        let node = &arena[idx as usize];
        out.push(node.value().clone());
        if let Some(r) = node.r() {
            stack.push(r);
        }
        if let Some(l) = node.l() {
            stack.push(l);
        }
    }
    out
}

/// Left subtree, right subtree, node.
pub fn postorder<N>(arena: &[N], root: Option<u32>) -> Vec<N::Value>
where
    N: ValueNode,
    N::Value: Clone,
{
    // Reverse of a node-right-left walk.
    let mut out = Vec::new();
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        let node = &arena[idx as usize];
        out.push(node.value().clone());
        if let Some(l) = node.l() {
            stack.push(l);
        }
        if let Some(r) = node.r() {
            stack.push(r);
        }
    }
    out.reverse();
    out
}
