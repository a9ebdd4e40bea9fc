use serde::Serialize;

use crate::step::Step;

/// Comparison and swap counters for one run.
///
/// Both counters are derived from emitted steps only: a compare step bumps
/// `comparisons`, a swap or overwrite step bumps `swaps`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub comparisons: u64,
    pub swaps: u64,
}

impl RunStats {
    pub fn record<T>(&mut self, step: &Step<T>) {
        if step.is_compare() {
            self.comparisons += 1;
        } else if step.is_write() {
            self.swaps += 1;
        }
    }

    pub fn from_steps<T>(steps: &[Step<T>]) -> Self {
        let mut stats = Self::default();
        for step in steps {
            stats.record(step);
        }
        stats
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
