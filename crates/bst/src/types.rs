//! Node trait definitions.
//!
//! Nodes are stored in a [`Vec`]-backed arena and every child "pointer" is an
//! `Option<u32>` index into that arena. There is no parent link: the tree owns
//! its nodes strictly through parent-to-child edges, and mutation happens by
//! returning the (possibly new) subtree root to the caller.

/// Child links (`l`, `r`).
pub trait Node {
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Node carrying an ordered value.
pub trait ValueNode: Node {
    type Value;

    fn value(&self) -> &Self::Value;
    fn set_value(&mut self, value: Self::Value);
}

/// Outcome of a binary-search walk.
///
/// `path` lists every visited node's value in visit order, including the
/// final node whether or not it matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult<T> {
    pub found: bool,
    pub path: Vec<T>,
}
