//! Title block renderer.

use crate::ui::helpers::{centered, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered title and tagline on two rows starting at `row`.
///
/// The title is bold in `header_fg`, over `header_bg` when the theme sets
/// one. Returns the next free row.
pub fn render_header(frame: &mut Frame, row: usize, header: &HeaderInfo, theme: &Theme) -> usize {
    let cols = frame.cols();

    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();
    frame.put(
        row,
        format!(
            "{}{}{background}{}{}",
            Theme::bold(),
            Theme::fg(&theme.colors.header_fg),
            centered(&header.title, cols),
            Theme::reset()
        ),
    );

    frame.put(
        row + 1,
        format!("{}{}{}", Theme::fg(&theme.colors.text_dim), centered(&header.subtitle, cols), Theme::reset()),
    );

    row + 2
}
