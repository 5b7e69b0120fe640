//! State inspection view built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The view is organized into three layers:
//!
//! - **[`inspect`]**: lays the panes out and draws them into an inline
//!   viewport below the session prompt
//! - **[`panes`]**: stateless render functions for each pane (tape, input,
//!   output, status bar)
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`inspect::draw_inline`]; tests render
//! through [`inspect::render_dashboard`] with a `TestBackend`.

pub mod inspect;
pub mod panes;
pub mod theme;

pub use inspect::{draw_inline, render_dashboard};
