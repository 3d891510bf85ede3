//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: The editable input line with syntax highlighting and cursor
//! - [`tokens`]: The token stream, one row per token
//! - [`tree`]: Rendered statements plus an indented outline of the AST
//! - [`diagnostics`]: Parse diagnostics for the current input
//! - [`status`]: Status bar with counts and keybindings
//! - `utils`: Shared block styling and scroll clamping
//!
//! Each pane module exports a `render_*` function that draws into a [`Rect`]
//! and clamps its own scroll offset.
//!
//! [`Rect`]: ratatui::layout::Rect

mod utils;

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tokens;
pub mod tree;

pub use diagnostics::render_diagnostics_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;
pub use tokens::render_tokens_pane;
pub use tree::render_tree_pane;
