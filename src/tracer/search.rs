// Search tracers: one frame per probe, then a terminal hit or miss frame

use crate::trace::{Frame, TraceBuilder};

/// Linear search, strictly left to right over the caller's order.
///
/// Emits one comparison frame per index examined. A hit adds exactly one
/// more frame carrying the match index and ends the trace there; an
/// exhausted scan adds one trailing frame with no highlight instead.
pub(crate) fn linear(values: &[i64], target: i64) -> Vec<Frame> {
    let mut rec = TraceBuilder::new();

    for (i, &value) in values.iter().enumerate() {
        rec.comparison(values, &[i]);
        if value == target {
            rec.matched(values, i);
            return rec.into_frames();
        }
    }

    rec.finish(values)
}

/// Binary search over a sorted copy of the input.
///
/// The copy is sorted here, regardless of the caller's order, and every
/// frame shows that sorted copy; a reported match index therefore indexes
/// the sorted array. Closed `low..=high` bounds, `mid = (low + high) / 2`,
/// terminating when `low > high`.
pub(crate) fn binary(values: &[i64], target: i64) -> Vec<Frame> {
    let mut sorted = values.to_vec();
    sorted.sort_unstable();

    let mut rec = TraceBuilder::new();
    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;

    while low <= high {
        let mid = ((low + high) / 2) as usize;
        rec.comparison(&sorted, &[mid]);

        if sorted[mid] == target {
            rec.matched(&sorted, mid);
            return rec.into_frames();
        } else if sorted[mid] < target {
            low = mid as isize + 1;
        } else {
            high = mid as isize - 1;
        }
    }

    rec.finish(&sorted)
}
