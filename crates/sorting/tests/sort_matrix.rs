use algoviz_sorting::{
    is_sorted, Algorithm, Cancellable, Limit, RunFlag, RunStats, Step, StepSink, StepTrace,
};
use proptest::prelude::*;

fn sorted_copy(v: &[i32]) -> Vec<i32> {
    let mut out = v.to_vec();
    out.sort();
    out
}

#[test]
fn bubble_example_matrix() {
    let trace = StepTrace::record(Algorithm::Bubble, &[5, 3, 8, 1]);
    let first_pass: Vec<Step<i32>> = trace
        .steps()
        .iter()
        .filter(|s| s.is_compare())
        .take(3)
        .cloned()
        .collect();
    assert_eq!(
        first_pass,
        vec![
            Step::Compare { i: 0, j: 1 },
            Step::Compare { i: 1, j: 2 },
            Step::Compare { i: 2, j: 3 },
        ]
    );
    assert_eq!(trace.replay_to(trace.len()), vec![1, 3, 5, 8]);
    // One adjacent swap per inversion: (5,3) (5,1) (3,1) (8,1).
    assert_eq!(trace.stats().swaps, 4);
}

#[test]
fn every_algorithm_sorts_sample() {
    let input = [38, 27, 43, 3, 9, 82, 10, 27];
    for algo in Algorithm::ALL {
        let mut arr = input.to_vec();
        let mut steps: Vec<Step<i32>> = Vec::new();
        algo.run(&mut arr, &mut steps).unwrap();
        assert_eq!(arr, sorted_copy(&input), "{algo}");
        let stats = RunStats::from_steps(&steps);
        assert!(stats.comparisons > 0, "{algo}");
    }
}

#[test]
fn complexity_table_matrix() {
    let c = Algorithm::Quick.complexity();
    assert_eq!((c.best, c.average, c.worst, c.space), ("O(n log n)", "O(n log n)", "O(n²)", "O(log n)"));
    let c = Algorithm::Merge.complexity();
    assert_eq!(c.space, "O(n)");
    for algo in [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion] {
        assert_eq!(algo.complexity().space, "O(1)");
        assert_eq!(algo.complexity().worst, "O(n²)");
    }
}

#[test]
fn cancellable_run_stops_at_flag() {
    let flag = RunFlag::new(true);
    let mut seen = 0usize;
    let mut arr = vec![9, 8, 7, 6, 5, 4, 3, 2, 1];
    struct Counting<'a> {
        seen: &'a mut usize,
        flag: RunFlag,
    }
    impl StepSink<i32> for Counting<'_> {
        fn emit(&mut self, _step: Step<i32>) -> Result<(), algoviz_sorting::Halted> {
            *self.seen += 1;
            if *self.seen == 10 {
                self.flag.clear();
            }
            Ok(())
        }
    }
    let sink = Counting {
        seen: &mut seen,
        flag: flag.clone(),
    };
    let res = Algorithm::Bubble.run(&mut arr, Cancellable::new(flag, sink));
    assert!(res.is_err());
    assert_eq!(seen, 10);
    assert_eq!(sorted_copy(&arr), (1..=9).collect::<Vec<_>>());
    assert!(!is_sorted(&arr));
}

proptest! {
    #[test]
    fn sorts_into_permutation(input in prop::collection::vec(-100i32..100, 0..64)) {
        for algo in Algorithm::ALL {
            let mut arr = input.clone();
            let mut steps: Vec<Step<i32>> = Vec::new();
            prop_assert!(algo.run(&mut arr, &mut steps).is_ok());
            prop_assert!(is_sorted(&arr));
            prop_assert_eq!(sorted_copy(&arr), sorted_copy(&input));
        }
    }

    #[test]
    fn stats_equal_step_counts(input in prop::collection::vec(0i32..50, 0..48)) {
        for algo in Algorithm::ALL {
            let trace = StepTrace::record(algo, &input);
            let compares = trace.steps().iter().filter(|s| s.is_compare()).count() as u64;
            let writes = trace.steps().iter().filter(|s| s.is_write()).count() as u64;
            let stats = trace.stats();
            prop_assert_eq!(stats.comparisons, compares);
            prop_assert_eq!(stats.swaps, writes);
            let n = input.len() as u64;
            if matches!(algo, Algorithm::Bubble | Algorithm::Selection | Algorithm::Insertion) {
                prop_assert!(stats.comparisons <= n * n.saturating_sub(1) / 2);
            }
        }
    }

    #[test]
    fn halting_anywhere_keeps_permutation(
        input in prop::collection::vec(0i32..30, 1..40),
        cut in 0usize..400,
    ) {
        for algo in Algorithm::ALL {
            let mut arr = input.clone();
            let _ = algo.run(&mut arr, Limit::new(cut));
            prop_assert_eq!(sorted_copy(&arr), sorted_copy(&input));
        }
    }

    #[test]
    fn replay_reaches_sorted_state(input in prop::collection::vec(0i32..30, 0..40)) {
        for algo in Algorithm::ALL {
            let trace = StepTrace::record(algo, &input);
            let mut playback = trace.clone().into_playback();
            let pulled = playback.by_ref().count();
            prop_assert_eq!(pulled, trace.len());
            let expected = sorted_copy(&input);
            prop_assert_eq!(playback.array(), expected.as_slice());
        }
    }
}
