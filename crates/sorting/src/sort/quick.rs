use std::cmp::Ordering;

use super::Tracer;
use crate::sink::{Halted, StepSink};

/// Quick sort with Lomuto partitioning.
///
/// The pivot is the last element of the range. Each partition compares
/// every other element against the pivot slot, swaps smaller ones into the
/// growing low side, and finally swaps the pivot into place (always emitted,
/// even when it is already there). The pivot's final index is marked
/// sorted; so is each single-element range when the recursion reaches it.
pub fn quick_sort<T, S>(arr: &mut [T], sink: S) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let mut t = Tracer::new(arr, sink);
    let n = t.len();
    if n == 0 {
        return Ok(());
    }
    sort_range(&mut t, 0, n - 1)
}

fn sort_range<T, S>(t: &mut Tracer<'_, T, S>, low: usize, high: usize) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    if low == high {
        return t.mark_sorted(low);
    }
    let pivot = partition(t, low, high)?;
    t.mark_sorted(pivot)?;
    if pivot > low {
        sort_range(t, low, pivot - 1)?;
    }
    if pivot < high {
        sort_range(t, pivot + 1, high)?;
    }
    Ok(())
}

fn partition<T, S>(t: &mut Tracer<'_, T, S>, low: usize, high: usize) -> Result<usize, Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    // `store` is the classic `i + 1`: the next slot of the low side.
    let mut store = low;
    for j in low..high {
        if t.compare(j, high)? == Ordering::Less {
            t.swap(store, j)?;
            store += 1;
        }
    }
    t.swap(store, high)?;
    Ok(store)
}
