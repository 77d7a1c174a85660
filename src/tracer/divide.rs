// Divide-and-conquer sort tracers: quick (Lomuto) and merge
//
// Both thread one TraceBuilder down the recursion, so the counters stay
// single-owner. Recursion depth is bounded by the array length, which the
// input layer caps at `input::MAX_LEN`.

use crate::trace::{Frame, TraceBuilder};

/// Quick sort with the Lomuto partition scheme, last element as pivot.
pub(crate) fn quick(values: &[i64]) -> Vec<Frame> {
    let mut a = values.to_vec();
    let mut rec = TraceBuilder::new();

    let high = a.len() as isize - 1;
    quicksort(&mut a, 0, high, &mut rec);

    rec.finish(&a)
}

fn quicksort(a: &mut [i64], low: isize, high: isize, rec: &mut TraceBuilder) {
    if low < high {
        let p = partition(a, low as usize, high as usize, rec);
        quicksort(a, low, p as isize - 1, rec);
        quicksort(a, p as isize + 1, high, rec);
    }
}

/// Partition `a[low..=high]` around `a[high]`.
///
/// One comparison frame per probe against the pivot, one mutation frame per
/// below-pivot swap, and one unconditional mutation frame for the
/// pivot-placing swap, even when the pivot already sits in place.
fn partition(a: &mut [i64], low: usize, high: usize, rec: &mut TraceBuilder) -> usize {
    let pivot = a[high];
    let mut i = low as isize - 1;

    for j in low..high {
        rec.comparison(a, &[j, high]);
        if a[j] < pivot {
            i += 1;
            a.swap(i as usize, j);
            rec.mutation(a, &[i as usize, j]);
        }
    }

    let p = (i + 1) as usize;
    a.swap(p, high);
    rec.mutation(a, &[p, high]);
    p
}

/// Merge sort: recursive halving, then two-pointer merges of copied runs.
pub(crate) fn merge(values: &[i64]) -> Vec<Frame> {
    let mut a = values.to_vec();
    let mut rec = TraceBuilder::new();

    let high = a.len() - 1;
    mergesort(&mut a, 0, high, &mut rec);

    rec.finish(&a)
}

fn mergesort(a: &mut [i64], low: usize, high: usize, rec: &mut TraceBuilder) {
    if low < high {
        let mid = (low + high) / 2;
        mergesort(a, low, mid, rec);
        mergesort(a, mid + 1, high, rec);
        merge_runs(a, low, mid, high, rec);
    }
}

/// Merge the sorted runs `a[low..=mid]` and `a[mid+1..=high]` in place.
///
/// While both runs are live: a comparison frame before each placement and a
/// mutation frame after it. `left[i] <= right[j]` takes the left element,
/// keeping equal elements stable. Flushing the leftover run emits mutation
/// frames only — there is nothing left to compare against.
fn merge_runs(a: &mut [i64], low: usize, mid: usize, high: usize, rec: &mut TraceBuilder) {
    let left: Vec<i64> = a[low..=mid].to_vec();
    let right: Vec<i64> = a[mid + 1..=high].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = low;

    while i < left.len() && j < right.len() {
        rec.comparison(a, &[k]);
        if left[i] <= right[j] {
            a[k] = left[i];
            i += 1;
        } else {
            a[k] = right[j];
            j += 1;
        }
        rec.mutation(a, &[k]);
        k += 1;
    }

    while i < left.len() {
        a[k] = left[i];
        i += 1;
        k += 1;
        rec.mutation(a, &[k - 1]);
    }

    while j < right.len() {
        a[k] = right[j];
        j += 1;
        k += 1;
        rec.mutation(a, &[k - 1]);
    }
}
