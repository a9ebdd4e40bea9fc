//! User-facing BST operations with input validation.
//!
//! The engine in `algoviz_bst` silently ignores duplicate inserts and
//! absent deletes; the session turns those cases into [`Error`]s before the
//! tree is touched, so a rejected operation never mutates state.

use algoviz_bst::{Bst, Placement, SearchResult};
use serde::Serialize;

use crate::config::BstConfig;
use crate::error::{Error, Result};

/// Values inserted by [`BstSession::with_sample`].
pub const SAMPLE_VALUES: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub count: usize,
    /// `-1` for an empty tree.
    pub height: i32,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Traversals {
    pub inorder: Vec<i64>,
    pub preorder: Vec<i64>,
    pub postorder: Vec<i64>,
}

/// How a renderer should draw a node after the last search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeHighlight {
    Normal,
    /// Visited on the way to the found node.
    Path,
    Found,
}

pub struct BstSession {
    tree: Bst<i64>,
    min_value: i64,
    max_value: i64,
    last_search: Option<(i64, SearchResult<i64>)>,
}

impl BstSession {
    pub fn new(config: &BstConfig) -> Self {
        Self {
            tree: Bst::new(),
            min_value: config.min_value,
            max_value: config.max_value,
            last_search: None,
        }
    }

    /// Session pre-filled with [`SAMPLE_VALUES`] when `config.sample` is set.
    /// Sample values outside the configured range are left out, so every
    /// node in the tree stays reachable by delete and search.
    pub fn with_sample(config: &BstConfig) -> Self {
        let mut session = Self::new(config);
        if config.sample {
            for v in SAMPLE_VALUES {
                if session.check_range(v).is_ok() {
                    session.tree.insert(v);
                } else {
                    log::warn!("sample value {v} skipped: outside configured range");
                }
            }
        }
        session
    }

    pub fn tree(&self) -> &Bst<i64> {
        &self.tree
    }

    /// Parses a user-typed integer and checks it against the value range.
    pub fn parse_value(&self, raw: &str) -> Result<i64> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(Error::InvalidInput("enter an integer value".to_string()));
        }
        let value = raw
            .parse::<i64>()
            .map_err(|_| Error::InvalidInput(format!("{raw:?} is not an integer")))?;
        self.check_range(value)
    }

    fn check_range(&self, value: i64) -> Result<i64> {
        if value < self.min_value || value > self.max_value {
            return Err(Error::InvalidInput(format!(
                "{value} is outside {}..={}",
                self.min_value, self.max_value
            )));
        }
        Ok(value)
    }

    pub fn insert(&mut self, value: i64) -> Result<()> {
        self.check_range(value)?;
        if self.tree.contains(&value) {
            log::warn!("bst insert rejected: {value} already present");
            return Err(Error::DuplicateValue(value));
        }
        self.tree.insert(value);
        self.last_search = None;
        log::debug!("bst insert {value}: {} nodes", self.tree.len());
        Ok(())
    }

    pub fn delete(&mut self, value: i64) -> Result<()> {
        self.check_range(value)?;
        if !self.tree.delete(&value) {
            log::warn!("bst delete rejected: {value} not present");
            return Err(Error::NotFound(value));
        }
        self.last_search = None;
        log::debug!("bst delete {value}: {} nodes", self.tree.len());
        Ok(())
    }

    /// Searches for `value`. A miss is not an error: it comes back with
    /// `found: false` and the path walked.
    pub fn search(&mut self, value: i64) -> Result<SearchResult<i64>> {
        self.check_range(value)?;
        if self.tree.is_empty() {
            return Err(Error::EmptyStructure("tree"));
        }
        let result = self.tree.search(&value);
        log::debug!("bst search {value}: found={} path={:?}", result.found, result.path);
        self.last_search = Some((value, result.clone()));
        Ok(result)
    }

    pub fn clear(&mut self) {
        self.tree.clear();
        self.last_search = None;
    }

    pub fn stats(&self) -> TreeStats {
        TreeStats {
            count: self.tree.count_nodes(),
            height: self.tree.height(),
            min: self.tree.min(),
            max: self.tree.max(),
        }
    }

    pub fn traversals(&self) -> Traversals {
        Traversals {
            inorder: self.tree.inorder(),
            preorder: self.tree.preorder(),
            postorder: self.tree.postorder(),
        }
    }

    pub fn layout(&self) -> Vec<Placement<i64>> {
        self.tree.layout()
    }

    /// Highlight for the node holding `value`. Only a successful search
    /// highlights anything.
    pub fn highlight(&self, value: i64) -> NodeHighlight {
        match &self.last_search {
            Some((target, res)) if res.found => {
                if value == *target {
                    NodeHighlight::Found
                } else if res.path.contains(&value) {
                    NodeHighlight::Path
                } else {
                    NodeHighlight::Normal
                }
            }
            _ => NodeHighlight::Normal,
        }
    }

    pub fn render(&self) -> String {
        self.tree.to_string("")
    }
}
