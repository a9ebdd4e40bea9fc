use std::cmp::Ordering;

use super::Tracer;
use crate::sink::{Halted, StepSink};

/// Selection sort.
///
/// Pass `i` scans `[i+1, n-1]` comparing each element against the running
/// minimum, swaps the minimum into `i` when it moved, then marks `[0, i]`
/// sorted. The last index is marked after the final pass.
pub fn selection_sort<T, S>(arr: &mut [T], sink: S) -> Result<(), Halted>
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
        let mut min_idx = i;
        for j in i + 1..n {
            if t.compare(j, min_idx)? == Ordering::Less {
                min_idx = j;
            }
        }
        if min_idx != i {
            t.swap(i, min_idx)?;
        }
        for k in 0..=i {
            t.mark_sorted(k)?;
        }
    }
    t.mark_sorted(n - 1)
}
