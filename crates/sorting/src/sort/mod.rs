//! Instrumented sorting algorithms.
//!
//! Every algorithm drives a [`Tracer`], which emits a [`Step`] to the sink
//! *before* touching the array. A sink that returns [`Halted`] therefore
//! stops the run between two steps, never in the middle of one.

mod bubble;
mod insertion;
mod merge;
mod quick;
mod selection;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::complexity::Complexity;
use crate::sink::{Halted, StepSink};
use crate::step::Step;

pub use bubble::bubble_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use selection::selection_sort;

/// Serializes as its lowercase id; deserializes through [`FromStr`], so
/// config files accept the same spellings as the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
}

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
    ];

    /// Identifier used in configuration and on the command line.
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble",
            Algorithm::Selection => "Selection",
            Algorithm::Insertion => "Insertion",
            Algorithm::Merge => "Merge",
            Algorithm::Quick => "Quick",
        }
    }

    pub fn complexity(self) -> Complexity {
        Complexity::of(self)
    }

    /// Sorts `arr` in place, emitting every step to `sink`.
    pub fn run<T, S>(self, arr: &mut [T], sink: S) -> Result<(), Halted>
    where
        T: Ord + Clone,
        S: StepSink<T>,
    {
        match self {
            Algorithm::Bubble => bubble_sort(arr, sink),
            Algorithm::Selection => selection_sort(arr, sink),
            Algorithm::Insertion => insertion_sort(arr, sink),
            Algorithm::Merge => merge_sort(arr, sink),
            Algorithm::Quick => quick_sort(arr, sink),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown sorting algorithm: {0}")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| UnknownAlgorithm(s.to_string()))
    }
}

impl TryFrom<String> for Algorithm {
    type Error = UnknownAlgorithm;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Array plus sink: performs operations and reports them in order.
pub(crate) struct Tracer<'a, T, S> {
    arr: &'a mut [T],
    sink: S,
}

impl<'a, T, S> Tracer<'a, T, S>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    pub(crate) fn new(arr: &'a mut [T], sink: S) -> Self {
        Self { arr, sink }
    }

    pub(crate) fn len(&self) -> usize {
        self.arr.len()
    }

    /// Emits `Compare(i, j)` and returns the ordering of `arr[i]` to `arr[j]`.
    pub(crate) fn compare(&mut self, i: usize, j: usize) -> Result<Ordering, Halted> {
        self.sink.emit(Step::Compare { i, j })?;
        Ok(self.arr[i].cmp(&self.arr[j]))
    }

    /// Emits `Compare(i, j)` for values held outside the array.
    pub(crate) fn compare_values(
        &mut self,
        i: usize,
        j: usize,
        a: &T,
        b: &T,
    ) -> Result<Ordering, Halted> {
        self.sink.emit(Step::Compare { i, j })?;
        Ok(a.cmp(b))
    }

    pub(crate) fn swap(&mut self, i: usize, j: usize) -> Result<(), Halted> {
        self.sink.emit(Step::Swap { i, j })?;
        self.arr.swap(i, j);
        Ok(())
    }

    pub(crate) fn overwrite(&mut self, index: usize, value: T) -> Result<(), Halted> {
        self.sink.emit(Step::Overwrite {
            index,
            value: value.clone(),
        })?;
        self.arr[index] = value;
        Ok(())
    }

    pub(crate) fn mark_sorted(&mut self, index: usize) -> Result<(), Halted> {
        self.sink.emit(Step::MarkSorted { index })
    }

    pub(crate) fn slice(&self, from: usize, to_inclusive: usize) -> Vec<T> {
        self.arr[from..=to_inclusive].to_vec()
    }

    /// Writes without emitting; only for restoring a halted merge.
    pub(crate) fn write_silent(&mut self, index: usize, value: T) {
        self.arr[index] = value;
    }
}

/// `true` if `arr` is non-decreasing.
pub fn is_sorted<T: Ord>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

#[cfg(test)]
pub(crate) mod test_util {
    use crate::step::Step;

    pub fn compares<T>(steps: &[Step<T>]) -> Vec<(usize, usize)> {
        steps
            .iter()
            .filter_map(|s| match s {
                Step::Compare { i, j } => Some((*i, *j)),
                _ => None,
            })
            .collect()
    }

    pub fn swaps<T>(steps: &[Step<T>]) -> Vec<(usize, usize)> {
        steps
            .iter()
            .filter_map(|s| match s {
                Step::Swap { i, j } => Some((*i, *j)),
                _ => None,
            })
            .collect()
    }

    pub fn marks<T>(steps: &[Step<T>]) -> Vec<usize> {
        steps
            .iter()
            .filter_map(|s| match s {
                Step::MarkSorted { index } => Some(*index),
                _ => None,
            })
            .collect()
    }
}
