//! Pane rendering modules for the state view
//!
//! # Pane Modules
//!
//! - [`tape`]: tape cells with the cursor cell highlighted
//! - [`input`]: program text fed but not yet executed
//! - [`output`]: raw numeric and decoded character views of the output
//! - [`status`]: status bar with the active syntax and recording state
//!
//! Each pane module exports a `render_*` function taking a `Frame`, the
//! `Rect` to draw into and the data to show. Panes keep no state between
//! draws.

pub mod input;
pub mod output;
pub mod status;
pub mod tape;

pub use input::render_input_pane;
pub use output::render_output_pane;
pub use status::{render_status_bar, StatusRenderData};
pub use tape::render_tape_pane;
