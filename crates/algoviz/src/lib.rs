//! Algorithm visualizer: sorting playback and BST sessions.
//!
//! Builds on the two engines:
//! - [`algoviz_sorting`]: instrumented sorts that emit replayable steps
//! - [`algoviz_bst`]: arena-backed binary search tree
//!
//! and adds what a front end needs on top of them: a [`Controller`] that
//! paces and cancels sorting runs, a [`BstSession`] that validates user input
//! and reports rejected operations as [`Error`]s, a TOML [`Config`], and the
//! command-line tools in [`cli`].

pub mod cli;
pub mod config;
pub mod controller;
pub mod error;
pub mod session;

pub use config::{BstConfig, Config, SortConfig};
pub use controller::{Controller, DisplayState, RunStatus};
pub use error::{Error, Result};
pub use session::{BstSession, NodeHighlight, TreeStats, Traversals};

pub use algoviz_bst as bst;
pub use algoviz_sorting as sorting;
