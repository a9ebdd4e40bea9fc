//! Binary search tree engine for the algorithm visualizer.
//!
//! Nodes live in a [`NodePool`] arena and link to their children through
//! `Option<u32>` indices; there are no parent links. Every mutating operation
//! takes the current root and returns the new one, so a tree is nothing more
//! than an arena plus a root index.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`ValueNode`] traits, [`SearchResult`] |
//! [`pool`] | [`NodePool`] arena with slot reuse |
//! [`util`] | `insert`, `delete_node`, `search`, traversals, aggregate queries |
//! [`layout`] | in-order column / depth placement for renderers |
//! [`print`] | ASCII tree rendering |
//! [`Bst`] | owning wrapper with method forms of the above |
//!
//! ```
//! use algoviz_bst::Bst;
//!
//! let tree = Bst::from_values([50, 30, 70, 20, 40, 60, 80]);
//! assert_eq!(tree.inorder(), vec![20, 30, 40, 50, 60, 70, 80]);
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.search(&40).path, vec![50, 30, 40]);
//! ```

mod bst;
mod bst_node;

pub mod layout;
pub mod pool;
pub mod print;
pub mod types;
pub mod util;

pub use bst::Bst;
pub use bst_node::BstNode;
pub use layout::{layout, Placement};
pub use pool::NodePool;
pub use print::{print_node, print_tree, PrintChild};
pub use types::{Node, SearchResult, ValueNode};
pub use util::{
    contains, count_nodes, delete_node, find, find_max, find_max_val, find_min, find_min_val,
    height, inorder, insert, postorder, preorder, search,
};
