//! Node arena with slot reuse.

use std::ops::{Index, IndexMut};

use crate::bst_node::BstNode;

/// Owns every node of one or more trees.
///
/// Spliced-out nodes are handed back with [`NodePool::release`] and their
/// slots are recycled by the next [`NodePool::alloc`]. A released slot keeps
/// its stale value until reused, so callers must drop every index into it.
#[derive(Clone, Debug)]
pub struct NodePool<T> {
    nodes: Vec<BstNode<T>>,
    free: Vec<u32>,
}

impl<T> Default for NodePool<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> NodePool<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
        }
    }

    pub fn alloc(&mut self, value: T) -> u32 {
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx as usize] = BstNode::new(value);
                idx
            }
            None => {
                self.nodes.push(BstNode::new(value));
                (self.nodes.len() - 1) as u32
            }
        }
    }

    pub fn release(&mut self, idx: u32) {
        let node = &mut self.nodes[idx as usize];
        node.l = None;
        node.r = None;
        self.free.push(idx);
    }

    /// Number of live (not released) slots.
    pub fn live(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
    }

    pub fn nodes(&self) -> &[BstNode<T>] {
        &self.nodes
    }
}

impl<T> Index<u32> for NodePool<T> {
    type Output = BstNode<T>;

    fn index(&self, idx: u32) -> &Self::Output {
        &self.nodes[idx as usize]
    }
}

impl<T> IndexMut<u32> for NodePool<T> {
    fn index_mut(&mut self, idx: u32) -> &mut Self::Output {
        &mut self.nodes[idx as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn released_slots_are_reused() {
        let mut pool = NodePool::new();
        let a = pool.alloc(1);
        let b = pool.alloc(2);
        assert_eq!(pool.live(), 2);
        pool.release(a);
        assert_eq!(pool.live(), 1);
        let c = pool.alloc(3);
        assert_eq!(c, a);
        assert_eq!(pool[c].v, 3);
        assert_eq!(pool[b].v, 2);
        assert_eq!(pool.nodes().len(), 2);
    }
}
