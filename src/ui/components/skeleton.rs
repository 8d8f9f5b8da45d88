//! Loading placeholder renderer.

use crate::ui::helpers::Frame;
use crate::ui::theme::Theme;

const BLOCK: char = '░';

/// A run of placeholder blocks in the skeleton color.
#[must_use]
pub fn placeholder_bar(len: usize, theme: &Theme) -> String {
    format!("{}{}{}", Theme::fg(&theme.colors.skeleton_fg), BLOCK.to_string().repeat(len), Theme::reset())
}

/// Renders `count` two-row placeholders starting at `row`, mimicking the
/// shape of a product item. Stops at `last_row`. Returns the next free row.
pub fn render_placeholders(frame: &mut Frame, row: usize, last_row: usize, count: usize, theme: &Theme) -> usize {
    let cols = frame.cols();
    let name_len = (cols / 3).clamp(4, 24);
    let price_len = 6;
    let gap = cols.saturating_sub(2 + name_len + price_len + 2).max(1);

    let mut current = row;
    for _ in 0..count {
        if current + 1 > last_row {
            break;
        }
        frame.put(
            current,
            format!("  {}{}{}", placeholder_bar(name_len, theme), " ".repeat(gap), placeholder_bar(price_len, theme)),
        );
        frame.put(current + 1, format!("  {}", placeholder_bar(name_len / 2, theme)));
        current += 2;
    }
    current
}
