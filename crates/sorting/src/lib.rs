//! Instrumented sorting engine for the algorithm visualizer.
//!
//! Five classic algorithms (bubble, selection, insertion, merge, quick) sort
//! a slice in place while reporting each compare, swap, overwrite and
//! "mark sorted" action as a [`Step`]. Steps go to a [`StepSink`]; the sink
//! can record them, forward them to a renderer, or halt the run.
//!
//! A recorded run is a [`StepTrace`]; a [`Playback`] replays it one step per
//! pull so a consumer can pace or rewind the animation.
//!
//! ```
//! use algoviz_sorting::{Algorithm, RunStats, StepTrace};
//!
//! let trace = StepTrace::record(Algorithm::Bubble, &[5, 3, 8, 1]);
//! assert_eq!(trace.replay_to(trace.len()), vec![1, 3, 5, 8]);
//! assert_eq!(trace.stats(), RunStats { comparisons: 6, swaps: 4 });
//! ```

pub mod complexity;
pub mod fuzzer;
pub mod sink;
pub mod sort;
pub mod stats;
pub mod step;
pub mod trace;

pub use complexity::Complexity;
pub use fuzzer::Fuzzer;
pub use sink::{Cancellable, Halted, Limit, RunFlag, StepSink};
pub use sort::{
    bubble_sort, insertion_sort, is_sorted, merge_sort, quick_sort, selection_sort, Algorithm,
    UnknownAlgorithm,
};
pub use stats::RunStats;
pub use step::Step;
pub use trace::{Playback, StepTrace};
