//! Step consumers and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;

use crate::step::Step;

/// A run was halted by its sink before completing.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("sorting run halted")]
pub struct Halted;

/// Receives each step before the algorithm performs it.
///
/// Returning `Err(Halted)` aborts the run; the refused step is not performed.
pub trait StepSink<T> {
    fn emit(&mut self, step: Step<T>) -> Result<(), Halted>;
}

impl<T> StepSink<T> for Vec<Step<T>> {
    fn emit(&mut self, step: Step<T>) -> Result<(), Halted> {
        self.push(step);
        Ok(())
    }
}

impl<T, S: StepSink<T> + ?Sized> StepSink<T> for &mut S {
    fn emit(&mut self, step: Step<T>) -> Result<(), Halted> {
        (**self).emit(step)
    }
}

/// Shared "running" flag. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct RunFlag(Arc<AtomicBool>);

impl RunFlag {
    pub fn new(running: bool) -> Self {
        Self(Arc::new(AtomicBool::new(running)))
    }

    pub fn is_running(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, running: bool) {
        self.0.store(running, Ordering::Release);
    }

    pub fn clear(&self) {
        self.set(false);
    }
}

/// Forwards steps while the flag is set, halts once it is cleared.
pub struct Cancellable<S> {
    flag: RunFlag,
    inner: S,
}

impl<S> Cancellable<S> {
    pub fn new(flag: RunFlag, inner: S) -> Self {
        Self { flag, inner }
    }

    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<T, S: StepSink<T>> StepSink<T> for Cancellable<S> {
    fn emit(&mut self, step: Step<T>) -> Result<(), Halted> {
        if !self.flag.is_running() {
            return Err(Halted);
        }
        self.inner.emit(step)
    }
}

/// Accepts the first `remaining` steps, then halts.
#[derive(Clone, Copy, Debug)]
pub struct Limit {
    remaining: usize,
}

impl Limit {
    pub fn new(steps: usize) -> Self {
        Self { remaining: steps }
    }
}

impl<T> StepSink<T> for Limit {
    fn emit(&mut self, _step: Step<T>) -> Result<(), Halted> {
        if self.remaining == 0 {
            return Err(Halted);
        }
        self.remaining -= 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancellable_stops_after_flag_clears() {
        let flag = RunFlag::new(true);
        let mut sink = Cancellable::new(flag.clone(), Vec::new());
        assert!(sink.emit(Step::<i32>::MarkSorted { index: 0 }).is_ok());
        flag.clear();
        assert_eq!(sink.emit(Step::MarkSorted { index: 1 }), Err(Halted));
        assert_eq!(sink.into_inner().len(), 1);
    }

    #[test]
    fn limit_counts_down() {
        let mut sink = Limit::new(2);
        assert!(StepSink::<i32>::emit(&mut sink, Step::MarkSorted { index: 0 }).is_ok());
        assert!(StepSink::<i32>::emit(&mut sink, Step::MarkSorted { index: 0 }).is_ok());
        assert!(StepSink::<i32>::emit(&mut sink, Step::MarkSorted { index: 0 }).is_err());
    }
}
