//! Playback controller for sorting runs.
//!
//! The controller owns the array being sorted, the selected algorithm, the
//! run counters and the display tags. A run is recorded up front as a
//! [`StepTrace`] and then replayed one step per [`Controller::tick`], so the
//! caller decides the pacing: sleep [`Controller::delay`] between ticks for
//! timed playback, or tick on demand for manual stepping.
//!
//! The run flag is checked twice: by the algorithm before every step while
//! the trace is recorded, and by every tick during playback. Clearing it
//! through [`Controller::flag`] mid-playback stops the run at the next tick.

pub mod display;
pub mod speed;

use std::time::Duration;

use algoviz_sorting::{
    is_sorted, Algorithm, Complexity, Fuzzer, Playback, RunFlag, RunStats, Step, StepTrace,
};
use serde::Serialize;

use crate::config::{validate_size, validate_speed, SortConfig};
use crate::error::{Error, Result};

pub use display::{DisplayState, DisplayTags};
pub use speed::delay_for;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    #[default]
    Ready,
    Running,
    /// The last run played every step.
    Completed,
    /// The last run was cancelled part way.
    Stopped,
}

pub struct Controller<T> {
    algorithm: Algorithm,
    array: Vec<T>,
    tags: DisplayTags,
    stats: RunStats,
    speed: u32,
    status: RunStatus,
    flag: RunFlag,
    playback: Option<Playback<T>>,
}

impl<T: Ord + Clone> Controller<T> {
    pub fn new(array: Vec<T>, algorithm: Algorithm, speed: u32) -> Result<Self> {
        validate_size(array.len())?;
        validate_speed(speed)?;
        Ok(Self {
            algorithm,
            tags: DisplayTags::new(array.len()),
            array,
            stats: RunStats::default(),
            speed,
            status: RunStatus::Ready,
            flag: RunFlag::new(false),
            playback: None,
        })
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn complexity(&self) -> Complexity {
        self.algorithm.complexity()
    }

    pub fn array(&self) -> &[T] {
        &self.array
    }

    pub fn display(&self) -> &[DisplayState] {
        self.tags.states()
    }

    pub fn stats(&self) -> RunStats {
        self.stats
    }

    pub fn status(&self) -> RunStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == RunStatus::Running
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    /// Pause to insert between two ticks at the current speed.
    pub fn delay(&self) -> Duration {
        delay_for(self.speed)
    }

    /// Handle that cancels the active run when cleared.
    pub fn flag(&self) -> RunFlag {
        self.flag.clone()
    }

    /// Steps applied so far and total steps of the recorded run.
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.playback
            .as_ref()
            .map(|p| (p.cursor(), p.trace().len()))
    }

    /// Speed may change mid-run; it only affects [`Controller::delay`].
    pub fn set_speed(&mut self, speed: u32) -> Result<()> {
        self.speed = validate_speed(speed)?;
        Ok(())
    }

    pub fn select(&mut self, algorithm: Algorithm) -> Result<()> {
        self.ensure_idle()?;
        log::debug!("selected {algorithm} sort");
        self.algorithm = algorithm;
        self.reset();
        Ok(())
    }

    /// Replaces the data set.
    pub fn load(&mut self, array: Vec<T>) -> Result<()> {
        self.ensure_idle()?;
        validate_size(array.len())?;
        self.array = array;
        self.reset();
        Ok(())
    }

    /// Begins a run of the selected algorithm. Does nothing while a run is
    /// already active.
    pub fn start(&mut self) -> Result<()> {
        if self.is_running() {
            log::debug!("start ignored: {} sort already running", self.algorithm);
            return Ok(());
        }
        if self.array.is_empty() {
            return Err(Error::EmptyStructure("array"));
        }
        self.flag.set(true);
        let trace = StepTrace::record_until(self.algorithm, &self.array, &self.flag);
        log::info!(
            "starting {} sort over {} elements ({} steps)",
            self.algorithm,
            self.array.len(),
            trace.len()
        );
        self.stats.reset();
        self.tags.reset(self.array.len());
        self.playback = Some(trace.into_playback());
        self.status = RunStatus::Running;
        Ok(())
    }

    /// Applies the next step of the active run.
    ///
    /// Returns `None` when no run is active, when the run has just finished,
    /// or when its flag was cleared since the previous tick. A cleared flag
    /// leaves the array in its partial state.
    pub fn tick(&mut self) -> Option<Step<T>> {
        if !self.is_running() {
            return None;
        }
        if !self.flag.is_running() {
            self.cancel();
            return None;
        }
        let playback = self.playback.as_mut()?;
        match playback.next() {
            Some(step) => {
                step.apply(&mut self.array);
                self.stats.record(&step);
                self.tags.apply(&step);
                Some(step)
            }
            None => {
                self.finish();
                None
            }
        }
    }

    /// Ticks until the run ends, without pausing.
    pub fn run_to_end(&mut self) -> RunStats {
        while self.tick().is_some() {}
        if self.is_running() {
            self.finish();
        }
        self.stats
    }

    /// Moves a finished or stopped run to the state after `index` steps.
    pub fn seek(&mut self, index: usize) -> Result<()> {
        self.ensure_idle()?;
        let playback = self
            .playback
            .as_mut()
            .ok_or(Error::EmptyStructure("step history"))?;
        playback.seek(index);
        let cursor = playback.cursor();
        let trace = playback.trace();
        self.array = playback.array().to_vec();
        self.stats = trace.stats_to(cursor);
        self.tags.reset(self.array.len());
        for step in &trace.steps()[..cursor] {
            self.tags.apply(step);
        }
        if cursor == trace.len() && is_sorted(&self.array) {
            self.tags.mark_all_sorted();
        }
        Ok(())
    }

    /// Cancels any active run and zeroes counters and display tags.
    pub fn stop(&mut self) {
        if self.is_running() {
            self.cancel();
        }
        self.reset_counters();
    }

    /// Zeroes counters and display tags and forgets the step history.
    pub fn reset(&mut self) {
        self.flag.clear();
        self.playback = None;
        self.status = RunStatus::Ready;
        self.reset_counters();
    }

    fn reset_counters(&mut self) {
        self.stats.reset();
        self.tags.reset(self.array.len());
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_running() {
            log::warn!("rejected while {} sort is running", self.algorithm);
            return Err(Error::Busy);
        }
        Ok(())
    }

    fn cancel(&mut self) {
        self.flag.clear();
        if let Some(playback) = self.playback.as_mut() {
            playback.settle();
            self.array = playback.array().to_vec();
            log::info!(
                "{} sort stopped after {} of {} steps",
                self.algorithm,
                playback.cursor(),
                playback.trace().len()
            );
        }
        self.status = RunStatus::Stopped;
    }

    fn finish(&mut self) {
        self.flag.clear();
        self.status = RunStatus::Completed;
        if is_sorted(&self.array) {
            self.tags.mark_all_sorted();
        }
        log::info!(
            "{} sort completed: {} comparisons, {} swaps",
            self.algorithm,
            self.stats.comparisons,
            self.stats.swaps
        );
    }
}

impl Controller<i64> {
    /// Controller over a fresh random array sized per `config`.
    pub fn from_config(config: &SortConfig, fuzzer: &mut Fuzzer) -> Result<Self> {
        let size = validate_size(config.size)?;
        Self::new(fuzzer.array(size), config.algorithm, config.speed)
    }

    /// Fills the array with new random values of the same length.
    pub fn regenerate(&mut self, fuzzer: &mut Fuzzer) -> Result<()> {
        self.ensure_idle()?;
        self.array = fuzzer.array(self.array.len());
        self.reset();
        Ok(())
    }

    /// New random array of `size` elements.
    pub fn resize(&mut self, size: usize, fuzzer: &mut Fuzzer) -> Result<()> {
        self.ensure_idle()?;
        let size = validate_size(size)?;
        self.array = fuzzer.array(size);
        self.reset();
        Ok(())
    }
}
