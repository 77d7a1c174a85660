// Integration tests for trace construction

use algotty::input::InputError;
use algotty::trace::{Outcome, Trace};
use algotty::tracer::{build_trace, Algorithm};
use rustc_hash::FxHashMap;

fn frequency(values: &[i64]) -> FxHashMap<i64, usize> {
    let mut map = FxHashMap::default();
    for &v in values {
        *map.entry(v).or_insert(0) += 1;
    }
    map
}

fn assert_counters_monotone(trace: &Trace) {
    for pair in trace.frames().windows(2) {
        assert!(
            pair[0].comparisons <= pair[1].comparisons,
            "comparison counter decreased"
        );
        assert!(
            pair[0].mutations <= pair[1].mutations,
            "mutation counter decreased"
        );
    }
}

// === SEARCH TRACES ===

#[test]
fn test_linear_search_matches_reference_scan() {
    let cases: &[(&[i64], i64)] = &[
        (&[4, 2, 7, 2, 9], 7),
        (&[4, 2, 7, 2, 9], 2),
        (&[4, 2, 7, 2, 9], 5),
        (&[1], 1),
        (&[-3, 0, 3], -3),
    ];

    for &(values, target) in cases {
        let trace = build_trace(Algorithm::LinearSearch, values, Some(target))
            .expect("trace construction failed");
        let expected = values.iter().position(|&v| v == target);
        match (trace.outcome(), expected) {
            (Outcome::Found(got), Some(want)) => assert_eq!(got, want),
            (Outcome::NotFound, None) => {}
            (outcome, expected) => {
                panic!("outcome {:?} disagrees with reference {:?}", outcome, expected)
            }
        }
    }
}

#[test]
fn test_binary_search_outcome_matches_membership() {
    let cases: &[(&[i64], i64)] = &[
        (&[9, 1, 5, 3, 7], 5),
        (&[9, 1, 5, 3, 7], 9),
        (&[9, 1, 5, 3, 7], 4),
        (&[2, 2, 2], 2),
        (&[10], 11),
    ];

    for &(values, target) in cases {
        let trace = build_trace(Algorithm::BinarySearch, values, Some(target))
            .expect("trace construction failed");
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        match trace.outcome() {
            Outcome::Found(index) => {
                // The reported index indexes the sorted copy
                assert_eq!(sorted[index], target);
            }
            Outcome::NotFound => assert!(!sorted.contains(&target)),
        }
    }
}

#[test]
fn test_binary_search_scenario_match_at_index_9() {
    let values = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11];
    let trace =
        build_trace(Algorithm::BinarySearch, &values, Some(11)).expect("trace construction failed");

    assert_eq!(trace.outcome(), Outcome::Found(9));
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.match_index, Some(9));
}

#[test]
fn test_linear_search_miss_after_three_comparisons() {
    let trace =
        build_trace(Algorithm::LinearSearch, &[1, 2, 3], Some(9)).expect("trace construction failed");

    // Three probe frames, then the sentinel no-match frame
    assert_eq!(trace.len(), 4);
    for (i, frame) in trace.frames().iter().take(3).enumerate() {
        assert_eq!(frame.comparisons, i + 1);
        assert_eq!(frame.highlighted, vec![i]);
        assert!(frame.match_index.is_none());
    }
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.comparisons, 3);
    assert!(last.highlighted.is_empty());
    assert!(last.match_index.is_none());
    assert_eq!(trace.outcome(), Outcome::NotFound);
}

#[test]
fn test_match_frame_is_always_last() {
    let cases: &[(Algorithm, &[i64], i64)] = &[
        (Algorithm::LinearSearch, &[5, 3, 8, 1], 8),
        (Algorithm::LinearSearch, &[5, 3, 8, 1], 5),
        (Algorithm::BinarySearch, &[5, 3, 8, 1], 3),
        (Algorithm::BinarySearch, &[5, 3, 8, 1], 8),
    ];

    for &(algorithm, values, target) in cases {
        let trace =
            build_trace(algorithm, values, Some(target)).expect("trace construction failed");
        let hit = trace
            .frames()
            .iter()
            .position(|frame| frame.match_index.is_some());
        if let Some(position) = hit {
            assert_eq!(
                position,
                trace.len() - 1,
                "{}: match frame is not terminal",
                algorithm
            );
        }
    }
}

#[test]
fn test_search_traces_never_mutate() {
    for algorithm in Algorithm::SEARCHES {
        let trace =
            build_trace(algorithm, &[6, 2, 9, 4], Some(9)).expect("trace construction failed");
        for frame in trace.frames() {
            assert_eq!(frame.mutations, 0, "{}: search mutated the array", algorithm);
        }
        assert_counters_monotone(&trace);
    }
}

#[test]
fn test_binary_search_frames_show_the_sorted_copy() {
    let values = [9, 1, 5, 3, 7];
    let trace =
        build_trace(Algorithm::BinarySearch, &values, Some(3)).expect("trace construction failed");
    let mut sorted = values.to_vec();
    sorted.sort_unstable();
    for frame in trace.frames() {
        assert_eq!(frame.values, sorted);
    }
}

#[test]
fn test_outcome_is_idempotent() {
    let trace = build_trace(Algorithm::BinarySearch, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 11], Some(11))
        .expect("trace construction failed");
    assert_eq!(trace.outcome(), trace.outcome());
}

// === SORT TRACES ===

#[test]
fn test_every_sort_sorts_a_permutation_of_the_input() {
    let inputs: &[&[i64]] = &[
        &[5, 4, 3, 2, 1],
        &[2, 7, 1, 8, 2, 8, 1],
        &[1, 2, 3, 4],
        &[42],
        &[-5, 10, 0, -5],
    ];

    for algorithm in Algorithm::SORTS {
        for &input in inputs {
            let trace = build_trace(algorithm, input, None).expect("trace construction failed");
            let last = trace.last().expect("non-empty trace");

            assert!(
                last.values.windows(2).all(|pair| pair[0] <= pair[1]),
                "{}: final frame not sorted for {:?}",
                algorithm,
                input
            );
            assert_eq!(
                frequency(&last.values),
                frequency(input),
                "{}: final frame not a permutation of {:?}",
                algorithm,
                input
            );
            assert!(last.highlighted.is_empty());
            assert!(last.match_index.is_none());
            assert_counters_monotone(&trace);
        }
    }
}

#[test]
fn test_bubble_scenario_54321() {
    let trace =
        build_trace(Algorithm::BubbleSort, &[5, 4, 3, 2, 1], None).expect("trace construction failed");
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.values, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_bubble_531_exact_counts() {
    let trace =
        build_trace(Algorithm::BubbleSort, &[5, 3, 1], None).expect("trace construction failed");
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.comparisons, 3);
    assert_eq!(last.mutations, 3);
}

#[test]
fn test_bubble_sorted_input_still_scans() {
    // Full nested passes by design: sorted input costs the same n(n-1)/2
    // comparisons as any other input.
    let trace =
        build_trace(Algorithm::BubbleSort, &[1, 2, 3, 4, 5], None).expect("trace construction failed");
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.comparisons, 10);
    assert_eq!(last.mutations, 0);
}

#[test]
fn test_selection_emits_candidate_frames_on_new_minima() {
    let trace =
        build_trace(Algorithm::SelectionSort, &[3, 1, 2], None).expect("trace construction failed");
    let frames = trace.frames();

    // comparison [0,1], candidate [1], comparison [1,2], swap [0,1],
    // comparison [1,2], candidate [2], swap [1,2], terminal
    assert_eq!(frames.len(), 8);
    let candidate = &frames[1];
    assert_eq!(candidate.highlighted, vec![1]);
    assert_eq!(candidate.comparisons, frames[0].comparisons);
    assert_eq!(candidate.mutations, frames[0].mutations);
}

#[test]
fn test_insertion_always_counts_the_final_placement() {
    let trace =
        build_trace(Algorithm::InsertionSort, &[2, 1], None).expect("trace construction failed");
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.comparisons, 1);
    // One shift plus the placement of the key
    assert_eq!(last.mutations, 2);

    // Even on sorted input the placement is recorded
    let trace =
        build_trace(Algorithm::InsertionSort, &[1, 2], None).expect("trace construction failed");
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.comparisons, 1);
    assert_eq!(last.mutations, 1);
}

#[test]
fn test_quick_counts_the_pivot_swap_per_partition() {
    // [3,2,1]: first partition places pivot 1 with one swap and no
    // below-pivot swaps; the second swaps in place twice. Both in-place
    // pivot swaps are still counted.
    let trace =
        build_trace(Algorithm::QuickSort, &[3, 2, 1], None).expect("trace construction failed");
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.comparisons, 3);
    assert_eq!(last.mutations, 3);
    assert_eq!(last.values, vec![1, 2, 3]);
}

#[test]
fn test_merge_exact_counts_and_flush_frames() {
    let trace =
        build_trace(Algorithm::MergeSort, &[2, 1, 3], None).expect("trace construction failed");
    let last = trace.last().expect("non-empty trace");
    assert_eq!(last.comparisons, 3);
    assert_eq!(last.mutations, 5);

    // Flush placements never add comparisons: the first merge of [2] and
    // [1] ends with a leftover flush, so its second mutation frame repeats
    // the comparison count of the frame before it.
    let frames = trace.frames();
    assert_eq!(frames[2].mutations, frames[1].mutations + 1);
    assert_eq!(frames[2].comparisons, frames[1].comparisons);
}

// === VALIDATION ===

#[test]
fn test_empty_input_builds_no_trace() {
    for algorithm in [
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::BubbleSort,
        Algorithm::QuickSort,
    ] {
        let err = build_trace(algorithm, &[], Some(1)).expect_err("empty input must be rejected");
        assert_eq!(err, InputError::EmptyValues);
    }
}

#[test]
fn test_search_without_target_is_rejected() {
    for algorithm in Algorithm::SEARCHES {
        let err = build_trace(algorithm, &[1, 2, 3], None).expect_err("missing target");
        assert_eq!(err, InputError::MissingTarget);
    }
}

#[test]
fn test_oversized_input_is_rejected() {
    let values = vec![0; algotty::input::MAX_LEN + 1];
    let err = build_trace(Algorithm::BubbleSort, &values, None).expect_err("oversized input");
    assert!(matches!(err, InputError::TooManyValues { .. }));
}

#[test]
fn test_sorts_ignore_a_stray_target() {
    let trace =
        build_trace(Algorithm::BubbleSort, &[2, 1], Some(5)).expect("trace construction failed");
    assert_eq!(trace.target(), None);
}

#[test]
fn test_tracer_does_not_mutate_the_input() {
    let values = vec![3, 1, 2];
    let _ = build_trace(Algorithm::QuickSort, &values, None).expect("trace construction failed");
    assert_eq!(values, vec![3, 1, 2]);
}
