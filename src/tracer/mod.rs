//! Algorithm tracers: the instrumented implementations that record traces
//!
//! This module provides trace construction:
//! - [`build_trace`]: validation then dispatch to one algorithm
//! - [`search`]: linear and binary search
//! - [`sort`]: bubble, selection, and insertion sort
//! - [`divide`]: quick sort and merge sort
//!
//! # Emission model
//!
//! Each tracer copies its input, then emits one [`Frame`] per externally
//! observable micro-step — every comparison, every swap or assignment, plus
//! the occasional counter-neutral marker (a key pickup, a new-minimum
//! candidate) — and closes with a terminal frame. The caller's slice is
//! never mutated.
//!
//! [`Frame`]: crate::trace::Frame

pub mod divide;
pub mod search;
pub mod sort;

use crate::input::{self, InputError};
use crate::trace::Trace;
use std::fmt;

/// Which algorithm a run visualizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    LinearSearch,
    BinarySearch,
    BubbleSort,
    SelectionSort,
    InsertionSort,
    QuickSort,
    MergeSort,
}

/// Complexity cases for one algorithm, as shown in the summary pane.
#[derive(Debug, Clone, Copy)]
pub struct Complexity {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    /// One-line reason behind the dominant case.
    pub note: &'static str,
}

impl Algorithm {
    /// Selection order on the sorting screen.
    pub const SORTS: [Algorithm; 5] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::QuickSort,
        Algorithm::MergeSort,
    ];

    /// Selection order on the searching screen.
    pub const SEARCHES: [Algorithm; 2] = [Algorithm::LinearSearch, Algorithm::BinarySearch];

    pub fn is_search(self) -> bool {
        matches!(self, Algorithm::LinearSearch | Algorithm::BinarySearch)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::MergeSort => "Merge Sort",
        }
    }

    /// Short description shown in the info pane when the algorithm is
    /// selected.
    pub fn description(self) -> &'static str {
        match self {
            Algorithm::LinearSearch => {
                "Checks each element sequentially until the target is found or the list ends."
            }
            Algorithm::BinarySearch => {
                "Works on a sorted array by repeatedly halving the search interval."
            }
            Algorithm::BubbleSort => {
                "Repeatedly compares adjacent items and swaps them when out of order."
            }
            Algorithm::SelectionSort => {
                "Finds the minimum of the remaining elements and places it at the current index."
            }
            Algorithm::InsertionSort => {
                "Builds a sorted prefix by inserting each new element at its correct position."
            }
            Algorithm::QuickSort => {
                "Picks a pivot, partitions the array around it, then recurses on both sides."
            }
            Algorithm::MergeSort => "Recursively splits the array and merges the sorted halves.",
        }
    }

    pub fn complexity(self) -> Complexity {
        match self {
            Algorithm::LinearSearch => Complexity {
                best: "O(1)",
                average: "O(n/2)",
                worst: "O(n)",
                note: "Every element may have to be examined before the target turns up.",
            },
            Algorithm::BinarySearch => Complexity {
                best: "O(1)",
                average: "O(log n)",
                worst: "O(log n)",
                note: "Each probe halves the remaining interval, so log n probes suffice.",
            },
            Algorithm::BubbleSort => Complexity {
                best: "O(n) — already sorted, a single pass with no swaps",
                average: "O(n²)",
                worst: "O(n²) — nested passes over the array",
                note: "Out-of-place elements travel one adjacent swap at a time.",
            },
            Algorithm::SelectionSort => Complexity {
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                note: "Every pass scans the whole remaining suffix for its minimum; swaps stay few but comparisons stay ~n².",
            },
            Algorithm::InsertionSort => Complexity {
                best: "O(n) — already sorted, one comparison per element",
                average: "O(n²)",
                worst: "O(n²) — each element shifts far to the left",
                note: "The cost is the shifting: scrambled input moves elements many places.",
            },
            Algorithm::QuickSort => Complexity {
                best: "O(n log n) — balanced partitions",
                average: "O(n log n)",
                worst: "O(n²) — degenerate pivots on pre-sorted input",
                note: "Good pivots split evenly for log n depth; poor pivots make the recursion O(n) deep.",
            },
            Algorithm::MergeSort => Complexity {
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                note: "Always splits in half; every level merges in O(n) across log n levels.",
            },
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Build the complete trace for one run.
///
/// Copies `values` before any mutation; the caller's slice is untouched.
/// Validation happens up front — construction itself cannot fail. Searches
/// require a target; sorts ignore one.
pub fn build_trace(
    algorithm: Algorithm,
    values: &[i64],
    target: Option<i64>,
) -> Result<Trace, InputError> {
    if values.is_empty() {
        return Err(InputError::EmptyValues);
    }
    if values.len() > input::MAX_LEN {
        return Err(InputError::TooManyValues {
            len: values.len(),
            max: input::MAX_LEN,
        });
    }

    let frames = match algorithm {
        Algorithm::LinearSearch => {
            let target = target.ok_or(InputError::MissingTarget)?;
            search::linear(values, target)
        }
        Algorithm::BinarySearch => {
            let target = target.ok_or(InputError::MissingTarget)?;
            search::binary(values, target)
        }
        Algorithm::BubbleSort => sort::bubble(values),
        Algorithm::SelectionSort => sort::selection(values),
        Algorithm::InsertionSort => sort::insertion(values),
        Algorithm::QuickSort => divide::quick(values),
        Algorithm::MergeSort => divide::merge(values),
    };

    // Sorts ignore any stray target; only searches record one.
    let target = if algorithm.is_search() { target } else { None };
    Ok(Trace::new(algorithm, target, frames))
}
