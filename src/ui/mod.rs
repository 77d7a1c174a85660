//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, keyboard event loop, screen switching,
//!   and the playback-driving loop
//! - **[`panes`]** — stateless render functions for each visible pane (home
//!   menu, bar chart, controls, info/summary, status bar)
//! - **[`theme`]** — centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Screen`] and call [`App::run`] to start the event loop.
//!
//! [`Screen`]: app::Screen
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::{App, Screen};
