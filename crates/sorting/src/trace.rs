//! Recorded runs and their step-by-step replay.

use crate::sink::{Cancellable, Limit, RunFlag};
use crate::sort::Algorithm;
use crate::stats::RunStats;
use crate::step::Step;

/// The complete step history of one algorithm over one input.
#[derive(Clone, Debug)]
pub struct StepTrace<T> {
    pub algorithm: Algorithm,
    initial: Vec<T>,
    steps: Vec<Step<T>>,
}

impl<T: Ord + Clone> StepTrace<T> {
    /// Runs `algorithm` over a copy of `input`, recording every step.
    pub fn record(algorithm: Algorithm, input: &[T]) -> Self {
        Self::record_until(algorithm, input, &RunFlag::new(true))
    }

    /// Like [`StepTrace::record`], but the algorithm checks `flag` before
    /// every step and recording ends once it is cleared.
    pub fn record_until(algorithm: Algorithm, input: &[T], flag: &RunFlag) -> Self {
        let mut scratch = input.to_vec();
        let mut sink = Cancellable::new(flag.clone(), Vec::new());
        if algorithm.run(&mut scratch, &mut sink).is_err() {
            log::debug!("recording of {algorithm} sort halted by its run flag");
        }
        let steps = sink.into_inner();
        log::debug!("recorded {} steps of {algorithm} sort over {} elements", steps.len(), input.len());
        Self {
            algorithm,
            initial: input.to_vec(),
            steps,
        }
    }

    pub fn initial(&self) -> &[T] {
        &self.initial
    }

    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Array contents after the first `index` steps.
    pub fn replay_to(&self, index: usize) -> Vec<T> {
        let mut arr = self.initial.clone();
        for step in &self.steps[..index.min(self.steps.len())] {
            step.apply(&mut arr);
        }
        arr
    }

    /// Counters after the first `index` steps.
    pub fn stats_to(&self, index: usize) -> RunStats {
        RunStats::from_steps(&self.steps[..index.min(self.steps.len())])
    }

    pub fn stats(&self) -> RunStats {
        RunStats::from_steps(&self.steps)
    }

    /// Array contents if the run is halted after `index` steps.
    ///
    /// Matches [`StepTrace::replay_to`] except inside a merge, where the
    /// in-flight buffers are written back so the result stays a permutation
    /// of the input.
    pub fn halted_at(&self, index: usize) -> Vec<T> {
        let mut arr = self.initial.clone();
        let _ = self.algorithm.run(&mut arr, Limit::new(index));
        arr
    }

    pub fn into_playback(self) -> Playback<T> {
        Playback::new(self)
    }
}

/// Pull-based replay of a [`StepTrace`].
///
/// Each call to [`Iterator::next`] applies one step to the live array and
/// yields it; callers may pause between pulls for as long as they like.
#[derive(Clone, Debug)]
pub struct Playback<T> {
    trace: StepTrace<T>,
    array: Vec<T>,
    cursor: usize,
}

impl<T: Ord + Clone> Playback<T> {
    pub fn new(trace: StepTrace<T>) -> Self {
        let array = trace.initial.clone();
        Self {
            trace,
            array,
            cursor: 0,
        }
    }

    pub fn trace(&self) -> &StepTrace<T> {
        &self.trace
    }

    pub fn array(&self) -> &[T] {
        &self.array
    }

    /// Number of steps applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.trace.len()
    }

    /// Rewinds or fast-forwards so exactly `index` steps are applied.
    pub fn seek(&mut self, index: usize) {
        let index = index.min(self.trace.len());
        if index < self.cursor {
            self.array = self.trace.initial.clone();
            self.cursor = 0;
        }
        while self.cursor < index {
            self.trace.steps[self.cursor].apply(&mut self.array);
            self.cursor += 1;
        }
    }

    /// Replaces the live array with the halted state at the cursor.
    pub fn settle(&mut self) {
        self.array = self.trace.halted_at(self.cursor);
    }

    pub fn into_array(self) -> Vec<T> {
        self.array
    }
}

impl<T: Ord + Clone> Iterator for Playback<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Step<T>> {
        let step = self.trace.steps.get(self.cursor)?.clone();
        step.apply(&mut self.array);
        self.cursor += 1;
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.trace.len() - self.cursor;
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playback_matches_direct_run() {
        for algo in Algorithm::ALL {
            let input = vec![5, 3, 8, 1, 9, 2, 2, 7];
            let trace = StepTrace::record(algo, &input);
            let mut direct = input.clone();
            let mut steps: Vec<Step<i32>> = Vec::new();
            algo.run(&mut direct, &mut steps).unwrap();
            assert_eq!(trace.steps(), steps.as_slice());

            let mut playback = trace.into_playback();
            let pulled: Vec<Step<i32>> = playback.by_ref().collect();
            assert_eq!(pulled, steps);
            assert_eq!(playback.array(), direct.as_slice());
            assert!(playback.is_finished());
        }
    }

    #[test]
    fn seek_rewinds_and_replays() {
        let trace = StepTrace::record(Algorithm::Bubble, &[5, 3, 8, 1]);
        let mut playback = trace.clone().into_playback();
        playback.seek(trace.len());
        assert_eq!(playback.array(), &[1, 3, 5, 8]);
        playback.seek(2);
        assert_eq!(playback.cursor(), 2);
        assert_eq!(playback.array(), trace.replay_to(2).as_slice());
        assert_eq!(playback.array(), &[3, 5, 8, 1]);
        assert_eq!(trace.stats_to(2).comparisons, 1);
        assert_eq!(trace.stats_to(2).swaps, 1);
    }

    #[test]
    fn cleared_flag_stops_recording() {
        let input = [9, 7, 5, 3, 1];
        let flag = RunFlag::new(false);
        let trace = StepTrace::record_until(Algorithm::Selection, &input, &flag);
        assert!(trace.is_empty());
        assert_eq!(trace.initial(), &input);

        flag.set(true);
        let full = StepTrace::record_until(Algorithm::Selection, &input, &flag);
        assert_eq!(full.steps(), StepTrace::record(Algorithm::Selection, &input).steps());
        assert_eq!(full.replay_to(full.len()), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn halted_merge_is_settled() {
        let input = [4, 3, 2, 1];
        let trace = StepTrace::record(Algorithm::Merge, &input);
        // compare(0,1), overwrite(0,3): index 0 now duplicates the 3.
        assert_eq!(trace.replay_to(2), vec![3, 3, 2, 1]);
        assert_eq!(trace.halted_at(2), vec![3, 4, 2, 1]);
        let mut playback = trace.into_playback();
        playback.seek(2);
        playback.settle();
        assert_eq!(playback.array(), &[3, 4, 2, 1]);
    }
}
