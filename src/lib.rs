//! # Introduction
//!
//! algotty animates classic sorting and searching algorithms in the terminal.
//! Each run is recorded up front: the chosen algorithm executes once over a
//! copy of the input and emits a [`trace::Frame`] for every comparison and
//! every swap or assignment. The resulting [`trace::Trace`] is then played
//! back one frame per tick through a ratatui bar chart, with pause, resume,
//! reset, and speed control.
//!
//! ## Execution pipeline
//!
//! ```text
//! Input → Tracer → Trace → PlaybackSession → TUI
//! ```
//!
//! 1. [`input`] — parses and validates the array and target fields, generates
//!    random arrays for the sorting screen.
//! 2. [`tracer`] — the instrumented algorithm implementations; entry point is
//!    [`tracer::build_trace`].
//! 3. [`trace`] — the recorded data model: frames with full array copies,
//!    running counters, and the [`trace::Outcome`] derivation.
//! 4. [`player`] — forward-only playback: the [`player::PlaybackSession`]
//!    state machine and the [`player::TickClock`] cooperative scheduler.
//! 5. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Searching: linear, binary (over a sorted copy).
//! Sorting: bubble, selection, insertion, quick (Lomuto), merge.

pub mod input;
pub mod player;
pub mod trace;
pub mod tracer;
pub mod ui;
