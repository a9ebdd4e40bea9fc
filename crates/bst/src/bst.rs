use std::fmt::Display;

use crate::layout::{layout, Placement};
use crate::pool::NodePool;
use crate::print::print_node;
use crate::types::SearchResult;
use crate::util::{
    contains, count_nodes, find_max_val, find_min_val, height, inorder, insert, postorder,
    preorder, remove, search,
};

/// Binary search tree owning its node arena.
///
/// Thin handle over the free functions in [`crate::util`]: each mutation
/// stores the returned root back into `root`.
#[derive(Clone, Debug)]
pub struct Bst<T> {
    pub root: Option<u32>,
    pub size: usize,
    pool: NodePool<T>,
}

impl<T> Default for Bst<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Bst<T> {
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
            pool: NodePool::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
        self.size = 0;
        self.pool.clear();
    }

    pub fn pool(&self) -> &NodePool<T> {
        &self.pool
    }

    pub fn height(&self) -> i32 {
        height(self.pool.nodes(), self.root)
    }

    pub fn count_nodes(&self) -> usize {
        count_nodes(self.pool.nodes(), self.root)
    }
}

impl<T: Ord + Clone> Bst<T> {
    pub fn from_values<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut tree = Self::new();
        for v in values {
            tree.insert(v);
        }
        tree
    }

    /// Inserts `value`, returning `false` if it was already present.
    pub fn insert(&mut self, value: T) -> bool {
        let before = self.pool.live();
        self.root = insert(&mut self.pool, self.root, value);
        let added = self.pool.live() > before;
        if added {
            self.size += 1;
        }
        added
    }

    /// Deletes `value`, returning `false` if it was absent.
    pub fn delete(&mut self, value: &T) -> bool {
        let (root, removed) = remove(&mut self.pool, self.root, value);
        self.root = root;
        if removed {
            self.size -= 1;
        }
        removed
    }

    pub fn search(&self, value: &T) -> SearchResult<T> {
        search(self.pool.nodes(), self.root, value)
    }

    pub fn contains(&self, value: &T) -> bool {
        contains(self.pool.nodes(), self.root, value)
    }

    pub fn inorder(&self) -> Vec<T> {
        inorder(self.pool.nodes(), self.root)
    }

    pub fn preorder(&self) -> Vec<T> {
        preorder(self.pool.nodes(), self.root)
    }

    pub fn postorder(&self) -> Vec<T> {
        postorder(self.pool.nodes(), self.root)
    }

    pub fn min(&self) -> Option<T> {
        find_min_val(self.pool.nodes(), self.root)
    }

    pub fn max(&self) -> Option<T> {
        find_max_val(self.pool.nodes(), self.root)
    }

    pub fn layout(&self) -> Vec<Placement<T>> {
        layout(self.pool.nodes(), self.root)
    }

    /// Checks the ordering invariant and the cached size.
    pub fn assert_valid(&self) -> Result<(), String> {
        let values = self.inorder();
        if let Some(w) = values.windows(2).position(|w| w[0] >= w[1]) {
            return Err(format!("in-order traversal not increasing at position {w}"));
        }
        if values.len() != self.size {
            return Err(format!(
                "size mismatch: cached {}, counted {}",
                self.size,
                values.len()
            ));
        }
        if self.pool.live() != self.size {
            return Err(format!(
                "{} live arena slots for {} nodes",
                self.pool.live(),
                self.size
            ));
        }
        Ok(())
    }
}

impl<T: Display> Bst<T> {
    pub fn to_string(&self, tab: &str) -> String {
        match self.root {
            Some(root) => format!(
                "Bst\n{tab}└─ {}",
                print_node(self.pool.nodes(), root, &format!("{tab}   "))
            ),
            None => "Bst ∅".to_string(),
        }
    }
}
