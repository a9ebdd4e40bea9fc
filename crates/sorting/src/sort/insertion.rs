use std::cmp::Ordering;

use super::Tracer;
use crate::sink::{Halted, StepSink};

/// Insertion sort.
///
/// Index 0 starts marked. Pass `i` sinks `arr[i]` leftwards: each
/// comparison with its left neighbour is emitted, including the one that
/// ends the pass, and every out-of-order pair is swapped. `[0, i]` is
/// marked sorted after the pass.
///
/// # Complexity
///
/// - Time: O(n²) worst case, O(n) best case (already sorted)
/// - Space: O(1), sorts in place
pub fn insertion_sort<T, S>(arr: &mut [T], sink: S) -> Result<(), Halted>
where
    T: Ord + Clone,
    S: StepSink<T>,
{
    let mut t = Tracer::new(arr, sink);
    let n = t.len();
    if n == 0 {
        return Ok(());
    }
    t.mark_sorted(0)?;
    for i in 1..n {
        let mut j = i;
        while j > 0 && t.compare(j, j - 1)? == Ordering::Less {
            t.swap(j, j - 1)?;
            j -= 1;
        }
        for k in 0..=i {
            t.mark_sorted(k)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::test_util::{compares, swaps};
    use crate::step::Step;

    #[test]
    fn test_insertion_sort_empty() {
        let mut arr: Vec<i32> = vec![];
        let mut steps: Vec<Step<i32>> = Vec::new();
        insertion_sort(&mut arr, &mut steps).unwrap();
        assert!(steps.is_empty());
    }

    #[test]
    fn test_insertion_sort_single() {
        let mut arr = vec![1];
        let mut steps: Vec<Step<i32>> = Vec::new();
        insertion_sort(&mut arr, &mut steps).unwrap();
        assert_eq!(steps, vec![Step::MarkSorted { index: 0 }]);
    }

    #[test]
    fn test_insertion_sort_sorted() {
        let mut arr = vec![1, 2, 3, 4, 5];
        let mut steps: Vec<Step<i32>> = Vec::new();
        insertion_sort(&mut arr, &mut steps).unwrap();
        assert_eq!(arr, vec![1, 2, 3, 4, 5]);
        // One failing comparison per pass.
        assert_eq!(compares(&steps), vec![(1, 0), (2, 1), (3, 2), (4, 3)]);
        assert!(swaps(&steps).is_empty());
    }

    #[test]
    fn test_insertion_sort_reverse() {
        let mut arr = vec![3, 2, 1];
        let mut steps: Vec<Step<i32>> = Vec::new();
        insertion_sort(&mut arr, &mut steps).unwrap();
        assert_eq!(arr, vec![1, 2, 3]);
        assert_eq!(compares(&steps), vec![(1, 0), (2, 1), (1, 0)]);
        assert_eq!(swaps(&steps), vec![(1, 0), (2, 1), (1, 0)]);
    }

    #[test]
    fn test_insertion_sort_strings() {
        let mut arr = vec!["banana", "apple", "cherry"];
        let mut steps: Vec<Step<&str>> = Vec::new();
        insertion_sort(&mut arr, &mut steps).unwrap();
        assert_eq!(arr, vec!["apple", "banana", "cherry"]);
    }
}
