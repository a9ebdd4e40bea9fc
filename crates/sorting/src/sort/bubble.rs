use std::cmp::Ordering;

use super::Tracer;
use crate::sink::{Halted, StepSink};

/// Bubble sort.
///
/// Pass `i` compares every adjacent pair in `[0, n-1-i]`, swapping
/// out-of-order pairs, then marks `n-1-i` sorted. Index 0 is marked
/// explicitly once the passes finish.
pub fn bubble_sort<T, S>(arr: &mut [T], sink: S) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let mut t = Tracer::new(arr, sink);
    let n = t.len();
    if n == 0 {
        return Ok(());
    }
    for i in 0..n - 1 {
        for j in 0..n - 1 - i {
            if t.compare(j, j + 1)? == Ordering::Greater {
                t.swap(j, j + 1)?;
            }
        }
        t.mark_sorted(n - 1 - i)?;
    }
    t.mark_sorted(0)
}
