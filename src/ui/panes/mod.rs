//! TUI pane rendering modules
//!
//! Stateless render functions for everything visible on screen, organized by
//! responsibility:
//!
//! - [`home`]: title banner and visualizer menu
//! - [`bars`]: the array as a bar chart with per-step highlights
//! - [`controls`]: header rows (algorithm, size, speed, input fields) and the
//!   search result line
//! - [`info`]: algorithm description, complexity cases, run metrics, and the
//!   post-run summary
//! - [`status`]: status bar with step progress, keybind hints, and the
//!   playback state chip
//!
//! Each function takes the ratatui `Frame`, a target `Rect`, and the data it
//! draws; none of them holds state between renders.

pub mod bars;
pub mod controls;
pub mod home;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use bars::render_bars_pane;
pub use controls::{render_result_line, render_search_controls, render_sort_controls};
pub use home::{render_home, MENU};
pub use info::{render_explain_pane, render_info_pane, render_run_pane};
pub use status::render_status_bar;
