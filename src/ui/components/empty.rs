//! Empty state component renderer.

use crate::ui::helpers::{centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the centered empty-list message, one blank row below `row`.
///
/// ```text
/// [blank]
///            No products found
///    Add a new product to get started
/// ```
pub fn render_empty_state(frame: &mut Frame, row: usize, empty: &EmptyState, theme: &Theme) -> usize {
    let cols = frame.cols();

    frame.put(
        row + 1,
        format!("{}{}{}", Theme::fg(&theme.colors.empty_state_fg), centered(&empty.message, cols), Theme::reset()),
    );
    frame.put(
        row + 2,
        format!(
            "{}{}{}{}",
            Theme::dim(),
            Theme::fg(&theme.colors.text_dim),
            centered(&empty.subtitle, cols),
            Theme::reset()
        ),
    );

    row + 3
}
