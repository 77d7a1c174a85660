// Elementary sort tracers: bubble, selection, insertion

use crate::trace::{Frame, TraceBuilder};

/// Bubble sort with full nested passes.
///
/// Every pass runs to its end even when no swap occurred, so the comparison
/// count on already-sorted input is the same as on any other input. This
/// mirrors the behavior being taught; an early-exit variant would emit a
/// different trace.
pub(crate) fn bubble(values: &[i64]) -> Vec<Frame> {
    let mut a = values.to_vec();
    let mut rec = TraceBuilder::new();
    let n = a.len();

    for i in 0..n {
        for j in 0..n - i - 1 {
            rec.comparison(&a, &[j, j + 1]);
            if a[j] > a[j + 1] {
                a.swap(j, j + 1);
                rec.mutation(&a, &[j, j + 1]);
            }
        }
    }

    rec.finish(&a)
}

/// Selection sort.
///
/// Each probe of the suffix emits a comparison frame over the current
/// minimum and the probe; finding a new minimum emits a counter-neutral
/// candidate frame on it. The swap into place happens (and is recorded)
/// only when the minimum moved.
pub(crate) fn selection(values: &[i64]) -> Vec<Frame> {
    let mut a = values.to_vec();
    let mut rec = TraceBuilder::new();
    let n = a.len();

    for i in 0..n {
        let mut min_idx = i;
        for j in i + 1..n {
            rec.comparison(&a, &[min_idx, j]);
            if a[j] < a[min_idx] {
                min_idx = j;
                rec.marker(&a, &[min_idx]);
            }
        }
        if min_idx != i {
            a.swap(i, min_idx);
            rec.mutation(&a, &[i, min_idx]);
        }
    }

    rec.finish(&a)
}

/// Insertion sort counting shifts and placements as mutations.
///
/// Each element gets a counter-neutral pickup frame, then a backward scan:
/// one comparison frame per probe, one mutation frame per shift, stopping at
/// the first non-inversion. The final placement of the key is always
/// recorded as a mutation, even when the key did not move.
pub(crate) fn insertion(values: &[i64]) -> Vec<Frame> {
    let mut a = values.to_vec();
    let mut rec = TraceBuilder::new();

    for i in 1..a.len() {
        let key = a[i];
        let mut j = i as isize - 1;
        rec.marker(&a, &[i]);

        while j >= 0 {
            let at = j as usize;
            rec.comparison(&a, &[at, at + 1]);
            if a[at] > key {
                a[at + 1] = a[at];
                rec.mutation(&a, &[at, at + 1]);
                j -= 1;
            } else {
                break;
            }
        }

        let slot = (j + 1) as usize;
        a[slot] = key;
        rec.mutation(&a, &[slot]);
    }

    rec.finish(&a)
}
