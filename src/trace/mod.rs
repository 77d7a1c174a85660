// Trace data model: the recorded frames of one algorithm run

use crate::tracer::Algorithm;

/// Immutable snapshot of algorithm state at one micro-step.
///
/// Every frame owns a complete copy of the working array rather than a diff,
/// so playback can display any frame without replaying the ones before it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Full array contents as of this step.
    pub values: Vec<i64>,
    /// Indices relevant to this step: a compared pair, the current probe,
    /// the pivot, or a new-minimum candidate. Empty on terminal frames.
    pub highlighted: Vec<usize>,
    /// Set only on the frame that signals a search hit.
    pub match_index: Option<usize>,
    /// Comparisons performed up to and including this step.
    pub comparisons: usize,
    /// Swaps/assignments performed up to and including this step.
    pub mutations: usize,
}

/// Final result of a search, derived from a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found(usize),
    NotFound,
}

/// Complete, pre-computed frame sequence for one algorithm run.
///
/// A trace is built eagerly before playback starts and never mutated
/// afterwards. The last frame always holds the terminal state: the fully
/// sorted array, or the exhausted search.
#[derive(Debug, Clone)]
pub struct Trace {
    algorithm: Algorithm,
    target: Option<i64>,
    frames: Vec<Frame>,
}

impl Trace {
    pub(crate) fn new(algorithm: Algorithm, target: Option<i64>, frames: Vec<Frame>) -> Self {
        Trace {
            algorithm,
            target,
            frames,
        }
    }

    /// The algorithm that produced this trace.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The search target, if the producing algorithm was a search.
    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// The terminal frame.
    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Derive the final search outcome from the recorded frames.
    ///
    /// Scans for the first frame carrying a match index. Pure: calling this
    /// any number of times on the same trace yields the same result.
    pub fn outcome(&self) -> Outcome {
        self.frames
            .iter()
            .find_map(|frame| frame.match_index)
            .map(Outcome::Found)
            .unwrap_or(Outcome::NotFound)
    }
}

/// Accumulates frames and running counters while an algorithm executes.
///
/// The recursive tracers (quick sort, merge sort) thread one builder down
/// the call tree, so the counters have a single owner instead of living in
/// shared state. Each `comparison`/`mutation` call bumps the matching
/// counter and records a frame carrying the counter totals so far.
#[derive(Debug, Default)]
pub(crate) struct TraceBuilder {
    frames: Vec<Frame>,
    comparisons: usize,
    mutations: usize,
}

impl TraceBuilder {
    pub(crate) fn new() -> Self {
        TraceBuilder::default()
    }

    /// Record a comparison step over `highlighted`.
    pub(crate) fn comparison(&mut self, values: &[i64], highlighted: &[usize]) {
        self.comparisons += 1;
        self.push(values, highlighted, None);
    }

    /// Record a swap or assignment that just happened at `highlighted`.
    pub(crate) fn mutation(&mut self, values: &[i64], highlighted: &[usize]) {
        self.mutations += 1;
        self.push(values, highlighted, None);
    }

    /// Record a step that changes no counter: a key pickup or a new-minimum
    /// candidate.
    pub(crate) fn marker(&mut self, values: &[i64], highlighted: &[usize]) {
        self.push(values, highlighted, None);
    }

    /// Record the search-hit frame. Must be the last frame recorded.
    pub(crate) fn matched(&mut self, values: &[i64], index: usize) {
        self.push(values, &[index], Some(index));
    }

    /// Frames recorded so far, without a terminal frame. Used by the search
    /// tracers after `matched`, where the hit frame is itself terminal.
    pub(crate) fn into_frames(self) -> Vec<Frame> {
        self.frames
    }

    /// Append the terminal frame (no highlight, final counters) and return
    /// the full sequence.
    pub(crate) fn finish(mut self, values: &[i64]) -> Vec<Frame> {
        self.push(values, &[], None);
        self.frames
    }

    fn push(&mut self, values: &[i64], highlighted: &[usize], match_index: Option<usize>) {
        self.frames.push(Frame {
            values: values.to_vec(),
            highlighted: highlighted.to_vec(),
            match_index,
            comparisons: self.comparisons,
            mutations: self.mutations,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace(frames: Vec<Frame>) -> Trace {
        Trace::new(Algorithm::LinearSearch, Some(7), frames)
    }

    #[test]
    fn test_builder_counters_are_monotone() {
        let mut builder = TraceBuilder::new();
        let values = [3, 1, 2];
        builder.comparison(&values, &[0, 1]);
        builder.mutation(&values, &[0, 1]);
        builder.marker(&values, &[2]);
        builder.comparison(&values, &[1, 2]);
        let frames = builder.finish(&values);

        assert_eq!(frames.len(), 5);
        for pair in frames.windows(2) {
            assert!(pair[0].comparisons <= pair[1].comparisons);
            assert!(pair[0].mutations <= pair[1].mutations);
        }
        let last = frames.last().unwrap();
        assert_eq!(last.comparisons, 2);
        assert_eq!(last.mutations, 1);
        assert!(last.highlighted.is_empty());
        assert!(last.match_index.is_none());
    }

    #[test]
    fn test_marker_changes_no_counter() {
        let mut builder = TraceBuilder::new();
        let values = [5, 4];
        builder.comparison(&values, &[0, 1]);
        builder.marker(&values, &[1]);
        let frames = builder.into_frames();

        assert_eq!(frames[0].comparisons, frames[1].comparisons);
        assert_eq!(frames[0].mutations, frames[1].mutations);
        assert_eq!(frames[1].highlighted, vec![1]);
    }

    #[test]
    fn test_each_frame_owns_its_own_copy() {
        let mut builder = TraceBuilder::new();
        let mut values = vec![2, 1];
        builder.comparison(&values, &[0, 1]);
        values.swap(0, 1);
        builder.mutation(&values, &[0, 1]);
        let frames = builder.finish(&values);

        assert_eq!(frames[0].values, vec![2, 1]);
        assert_eq!(frames[1].values, vec![1, 2]);
    }

    #[test]
    fn test_outcome_found() {
        let mut builder = TraceBuilder::new();
        let values = [4, 7];
        builder.comparison(&values, &[0]);
        builder.comparison(&values, &[1]);
        builder.matched(&values, 1);
        let trace = sample_trace(builder.into_frames());

        assert_eq!(trace.outcome(), Outcome::Found(1));
    }

    #[test]
    fn test_outcome_not_found() {
        let mut builder = TraceBuilder::new();
        let values = [4, 5];
        builder.comparison(&values, &[0]);
        builder.comparison(&values, &[1]);
        let trace = sample_trace(builder.finish(&values));

        assert_eq!(trace.outcome(), Outcome::NotFound);
    }

    #[test]
    fn test_outcome_is_idempotent() {
        let mut builder = TraceBuilder::new();
        let values = [9];
        builder.comparison(&values, &[0]);
        builder.matched(&values, 0);
        let trace = sample_trace(builder.into_frames());

        assert_eq!(trace.outcome(), trace.outcome());
    }

    #[test]
    fn test_match_frame_highlights_the_hit() {
        let mut builder = TraceBuilder::new();
        let values = [8, 6];
        builder.comparison(&values, &[0]);
        builder.matched(&values, 0);
        let frames = builder.into_frames();

        let hit = frames.last().unwrap();
        assert_eq!(hit.match_index, Some(0));
        assert_eq!(hit.highlighted, vec![0]);
    }
}
