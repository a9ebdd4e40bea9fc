//! Step events.

use serde::{Deserialize, Serialize};

/// One atomic, visualizable action of a sorting run.
///
/// Steps are emitted in the exact order the algorithm performs them. The
/// mutating kinds ([`Step::Swap`], [`Step::Overwrite`]) carry everything
/// needed to reproduce the mutation, so replaying a step sequence over the
/// initial array reproduces every intermediate state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Step<T> {
    Compare { i: usize, j: usize },
    Swap { i: usize, j: usize },
    Overwrite { index: usize, value: T },
    MarkSorted { index: usize },
}

impl<T: Clone> Step<T> {
    /// Performs this step's mutation, if any, on `arr`.
    pub fn apply(&self, arr: &mut [T]) {
        match self {
            Step::Swap { i, j } => arr.swap(*i, *j),
            Step::Overwrite { index, value } => arr[*index] = value.clone(),
            Step::Compare { .. } | Step::MarkSorted { .. } => {}
        }
    }
}

impl<T> Step<T> {
    pub fn is_compare(&self) -> bool {
        matches!(self, Step::Compare { .. })
    }

    /// Swap or overwrite: the kinds counted as swaps.
    pub fn is_write(&self) -> bool {
        matches!(self, Step::Swap { .. } | Step::Overwrite { .. })
    }

    /// Array indices this step touches.
    pub fn indices(&self) -> (usize, Option<usize>) {
        match self {
            Step::Compare { i, j } | Step::Swap { i, j } => (*i, Some(*j)),
            Step::Overwrite { index, .. } | Step::MarkSorted { index } => (*index, None),
        }
    }
}
