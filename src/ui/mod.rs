//! Terminal inspector built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]**: editable input, per-keystroke re-analysis, pane focus
//! - **[`panes`]**: stateless render functions for each visible pane (source,
//!   tokens, syntax tree, diagnostics, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! Construct an [`App`] with the initial source and call [`App::run`] to start
//! the event loop.
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
