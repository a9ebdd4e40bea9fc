use std::cmp::Ordering;

use super::Tracer;
use crate::sink::{Halted, StepSink};

/// Top-down merge sort.
///
/// Splits at `(left + right) / 2`. Each merge emits one compare per pair of
/// buffered heads (left buffer slot `left+i` against right buffer slot
/// `mid+1+j`) and one overwrite per element written back, tails included.
/// Ties take the left element, so the sort is stable. Indices are marked
/// sorted only after the whole array is merged.
pub fn merge_sort<T, S>(arr: &mut [T], sink: S) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let mut t = Tracer::new(arr, sink);
    let n = t.len();
    if n == 0 {
        return Ok(());
    }
    sort_range(&mut t, 0, n - 1)?;
    for k in 0..n {
        t.mark_sorted(k)?;
    }
    Ok(())
}

fn sort_range<T, S>(t: &mut Tracer<'_, T, S>, left: usize, right: usize) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    if left >= right {
        return Ok(());
    }
    let mid = (left + right) / 2;
    sort_range(t, left, mid)?;
    sort_range(t, mid + 1, right)?;
    merge(t, left, mid, right)
}

fn merge<T, S>(t: &mut Tracer<'_, T, S>, left: usize, mid: usize, right: usize) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let lo = t.slice(left, mid);
    let hi = t.slice(mid + 1, right);
    let (mut i, mut j, mut k) = (0, 0, left);
    let res = write_back(t, &lo, &hi, left, mid, (&mut i, &mut j, &mut k));
    if res.is_err() {
        // Halted mid-merge: the unconsumed buffer elements still belong in
        // [k, right], so put them back to keep the array a permutation.
        for v in lo[i..].iter().chain(&hi[j..]) {
            t.write_silent(k, v.clone());
            k += 1;
        }
    }
    res
}

fn write_back<T, S>(
    t: &mut Tracer<'_, T, S>,
    lo: &[T],
    hi: &[T],
    left: usize,
    mid: usize,
    (i, j, k): (&mut usize, &mut usize, &mut usize),
) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    while *i < lo.len() && *j < hi.len() {
        let ord = t.compare_values(left + *i, mid + 1 + *j, &lo[*i], &hi[*j])?;
        if ord != Ordering::Greater {
            t.overwrite(*k, lo[*i].clone())?;
            *i += 1;
        } else {
            t.overwrite(*k, hi[*j].clone())?;
            *j += 1;
        }
        *k += 1;
    }
    while *i < lo.len() {
        t.overwrite(*k, lo[*i].clone())?;
        *i += 1;
        *k += 1;
    }
    while *j < hi.len() {
        t.overwrite(*k, hi[*j].clone())?;
        *j += 1;
        *k += 1;
    }
    Ok(())
}
