//! Footer component renderer.

use crate::ui::helpers::{centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the keybinding hints centered and dimmed at `row`.
///
/// Hints wider than the terminal are cut so the line never wraps.
pub fn render_footer(frame: &mut Frame, row: usize, footer: &FooterInfo, theme: &Theme) -> usize {
    let line = centered(&footer.keybindings, frame.cols());
    frame.put(row, format!("{}{line}{}", Theme::fg(&theme.colors.text_dim), Theme::reset()));
    row + 1
}
