//! Top-level rendering coordinator.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render_layout → Frame → ANSI
//! ```
//!
//! # Example
//!
//! ```rust
//! use product_manager::app::AppState;
//! use product_manager::ui::{render_frame, Theme};
//!
//! let state = AppState::new(Theme::default());
//! let frame = render_frame(&state, 24, 80);
//! assert!(frame.plain_text().contains("No products found"));
//! ```

use crate::app::AppState;
use crate::ui::components;
use crate::ui::helpers::Frame;

/// Builds the screen for a terminal of `rows` x `cols`.
#[must_use]
pub fn render_frame(state: &AppState, rows: usize, cols: usize) -> Frame {
    let viewmodel = state.compute_viewmodel(rows, cols);
    let mut frame = Frame::new(rows, cols);
    components::render_layout(&mut frame, &viewmodel, &state.theme);
    frame
}

/// Renders the UI to a string of ANSI output ready to be written to the
/// terminal in one go.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    render_frame(state, rows, cols).into_output()
}
