//! Shared rendering utilities.
//!
//! Components draw into a [`Frame`]: one ANSI string per terminal row,
//! flushed to the terminal in a single write once the whole screen is built.
//! Widths are counted in `char`s.

use crate::ui::theme::Theme;

/// Screen buffer addressed by 1-indexed terminal rows.
#[derive(Debug, Clone)]
pub struct Frame {
    rows: Vec<String>,
    cols: usize,
}

impl Frame {
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: vec![String::new(); rows],
            cols,
        }
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Mutable access to a row. Rows outside the terminal are discarded.
    pub fn row(&mut self, row: usize) -> Option<&mut String> {
        row.checked_sub(1).and_then(|index| self.rows.get_mut(index))
    }

    /// Replaces a row with `content`.
    pub fn put(&mut self, row: usize, content: String) {
        if let Some(line) = self.row(row) {
            *line = content;
        }
    }

    /// Row text without escape sequences.
    #[must_use]
    pub fn plain_row(&self, row: usize) -> String {
        row.checked_sub(1)
            .and_then(|index| self.rows.get(index))
            .map(|line| strip_ansi(line))
            .unwrap_or_default()
    }

    /// Whole screen as plain text, one line per row.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.rows.iter().map(|line| strip_ansi(line)).collect::<Vec<_>>().join("\n")
    }

    /// Terminal output: clears each row, positions the cursor and writes it.
    #[must_use]
    pub fn into_output(self) -> String {
        let mut out = String::new();
        for (index, line) in self.rows.into_iter().enumerate() {
            out.push_str(&position_cursor(index + 1, 1));
            out.push_str("\u{1b}[2K");
            out.push_str(&line);
        }
        out
    }
}

/// ANSI sequence moving the cursor to `row`, `col` (both 1-indexed).
#[must_use]
pub fn position_cursor(row: usize, col: usize) -> String {
    format!("\u{1b}[{row};{col}H")
}

/// Removes CSI escape sequences (`ESC [ ... final`).
#[must_use]
pub fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c != '\u{1b}' {
            out.push(c);
            continue;
        }
        if chars.next() != Some('[') {
            continue;
        }
        // parameters and intermediates run until the final byte in @..=~
        for c in chars.by_ref() {
            if ('@'..='~').contains(&c) {
                break;
            }
        }
    }
    out
}

/// Visible width of plain text.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Cuts `text` to at most `max` visible characters, ending in `…` if cut.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if width(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut cut: String = text.chars().take(max - 1).collect();
    cut.push('…');
    cut
}

/// `text` centered in `cols` columns and padded to the full width.
#[must_use]
pub fn centered(text: &str, cols: usize) -> String {
    let text = truncate(text, cols);
    let len = width(&text);
    let padding = cols.saturating_sub(len) / 2;
    format!("{}{text}{}", " ".repeat(padding), " ".repeat(cols.saturating_sub(padding + len)))
}

/// Horizontal separator line in the border color.
#[must_use]
pub fn border_line(theme: &Theme, cols: usize) -> String {
    format!("{}{}{}", Theme::fg(&theme.colors.border), "─".repeat(cols), Theme::reset())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_ansi_keeps_only_visible_text() {
        let styled = format!("{}{}Widget{} $9.99", Theme::bold(), Theme::fg("#ffffff"), Theme::reset());
        assert_eq!(strip_ansi(&styled), "Widget $9.99");
        assert_eq!(strip_ansi(&position_cursor(3, 1)), "");
    }

    #[test]
    fn truncate_and_center_respect_width() {
        assert_eq!(truncate("Product Manager", 7), "Produc…");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(centered("ab", 6), "  ab  ");
        assert_eq!(width(&centered("Product", 3)), 3);
    }

    #[test]
    fn frame_ignores_rows_outside_the_screen() {
        let mut frame = Frame::new(2, 10);
        frame.put(0, "zero".to_string());
        frame.put(3, "three".to_string());
        frame.put(2, "two".to_string());

        assert_eq!(frame.plain_text(), "\ntwo");
        assert!(frame.into_output().starts_with("\u{1b}[1;1H\u{1b}[2K"));
    }
}
