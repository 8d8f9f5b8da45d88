//! Product list renderer: section header and body.
//!
//! ```text
//!   Products                                   ↻ Refresh
//!   2 products available
//!   [notice]
//!   Widget                                         $9.99
//!   Product ID: 1
//!   Gadget                                        $12.50
//!   Product ID: 2
//! ```

use super::empty::render_empty_state;
use super::skeleton::{placeholder_bar, render_placeholders};
use crate::ui::helpers::{truncate, width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ListBody, ListHeader, ProductRow, RefreshControl};

const INDENT: usize = 2;

/// Renders the three header rows (title with refresh control, summary,
/// notice) and returns the next free row.
pub fn render_list_header(frame: &mut Frame, row: usize, header: &ListHeader, theme: &Theme) -> usize {
    let cols = frame.cols();
    let refresh = refresh_label(&header.refresh);
    let refresh_width = width(&refresh);

    let (title, title_width) = header.title.as_ref().map_or_else(
        || (placeholder_bar(12, theme), 12),
        |title| {
            let title = truncate(title, cols.saturating_sub(INDENT + refresh_width + 3));
            let title_width = width(&title);
            (format!("{}{}{title}{}", Theme::bold(), Theme::fg(&theme.colors.accent), Theme::reset()), title_width)
        },
    );
    let gap = cols.saturating_sub(INDENT + title_width + refresh_width + INDENT).max(1);
    let refresh_style = if header.refresh.enabled {
        Theme::fg(&theme.colors.accent)
    } else {
        format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim))
    };
    frame.put(
        row,
        format!("  {title}{}{refresh_style}{refresh}{}", " ".repeat(gap), Theme::reset()),
    );

    let summary = header.summary.as_ref().map_or_else(
        || placeholder_bar(20, theme),
        |summary| format!("{}{summary}{}", Theme::fg(&theme.colors.text_dim), Theme::reset()),
    );
    frame.put(row + 1, format!("  {summary}"));

    if let Some(notice) = &header.notice {
        let notice = truncate(notice, cols.saturating_sub(INDENT));
        frame.put(row + 2, format!("  {}{notice}{}", Theme::fg(&theme.colors.error_fg), Theme::reset()));
    }

    row + 3
}

fn refresh_label(refresh: &RefreshControl) -> String {
    let glyph = if refresh.spinning { '⟳' } else { '↻' };
    format!("{glyph} {}", refresh.label)
}

/// Renders the list body between `row` and `last_row` inclusive.
pub fn render_list_body(frame: &mut Frame, row: usize, last_row: usize, body: &ListBody, theme: &Theme) -> usize {
    match body {
        ListBody::Loading { placeholders } => render_placeholders(frame, row, last_row, *placeholders, theme),
        ListBody::Empty(empty) => render_empty_state(frame, row, empty, theme),
        ListBody::Items { rows, hidden, overlay_placeholders, dimmed } => {
            let mut current = render_placeholders(frame, row, last_row, *overlay_placeholders, theme);
            for product in rows {
                if current + 1 > last_row {
                    break;
                }
                current = render_product(frame, current, product, *dimmed, theme);
            }
            if *hidden > 0 && current <= last_row {
                frame.put(
                    current,
                    format!("  {}… and {hidden} more{}", Theme::fg(&theme.colors.text_dim), Theme::reset()),
                );
                current += 2;
            }
            current
        }
    }
}

/// Two rows: name with right-aligned price, then the id label.
fn render_product(frame: &mut Frame, row: usize, product: &ProductRow, dimmed: bool, theme: &Theme) -> usize {
    let cols = frame.cols();
    let dim = if dimmed { Theme::dim() } else { "" };

    let price_width = width(&product.price);
    let name = truncate(&product.name, cols.saturating_sub(INDENT + price_width + INDENT + 1));
    let gap = cols.saturating_sub(INDENT + width(&name) + price_width + INDENT).max(1);

    frame.put(
        row,
        format!(
            "  {dim}{}{name}{}{dim}{}{}{}{}",
            Theme::fg(&theme.colors.text_normal),
            " ".repeat(gap),
            Theme::bold(),
            Theme::fg(&theme.colors.price_fg),
            product.price,
            Theme::reset()
        ),
    );
    frame.put(
        row + 1,
        format!("  {dim}{}{}{}", Theme::fg(&theme.colors.text_dim), product.id_label, Theme::reset()),
    );

    row + 2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(title: Option<&str>, enabled: bool, spinning: bool) -> ListHeader {
        ListHeader {
            title: title.map(String::from),
            summary: title.map(|_| "1 product available".to_string()),
            refresh: RefreshControl {
                label: if spinning { "Refreshing..." } else { "Refresh" }.to_string(),
                enabled,
                spinning,
            },
            notice: None,
        }
    }

    fn widget_row() -> ProductRow {
        ProductRow {
            name: "Widget".to_string(),
            id_label: "Product ID: 1".to_string(),
            price: "$9.99".to_string(),
        }
    }

    #[test]
    fn header_puts_refresh_control_on_the_right() {
        let mut frame = Frame::new(3, 40);
        render_list_header(&mut frame, 1, &header(Some("Products"), true, false), &Theme::default());

        let title_row = frame.plain_row(1);
        assert!(title_row.starts_with("  Products"));
        assert!(title_row.ends_with("↻ Refresh"));
        assert_eq!(width(&title_row), 38);
        assert_eq!(frame.plain_row(2), "  1 product available");
    }

    #[test]
    fn loading_header_shows_placeholder_bars() {
        let mut frame = Frame::new(3, 40);
        render_list_header(&mut frame, 1, &header(None, false, false), &Theme::default());

        assert!(frame.plain_row(1).starts_with("  ░░░░"));
        assert!(frame.plain_row(2).starts_with("  ░░░░"));
    }

    #[test]
    fn item_shows_name_price_and_id() {
        let body = ListBody::Items { rows: vec![widget_row()], hidden: 0, overlay_placeholders: 0, dimmed: false };
        let mut frame = Frame::new(4, 40);
        let next = render_list_body(&mut frame, 1, 4, &body, &Theme::default());

        assert_eq!(next, 3);
        let first = frame.plain_row(1);
        assert!(first.starts_with("  Widget"));
        assert!(first.ends_with("$9.99"));
        assert_eq!(frame.plain_row(2), "  Product ID: 1");
    }

    #[test]
    fn refresh_overlay_draws_placeholders_above_dimmed_items() {
        let body = ListBody::Items { rows: vec![widget_row()], hidden: 0, overlay_placeholders: 1, dimmed: true };
        let mut frame = Frame::new(6, 40);
        render_list_body(&mut frame, 1, 6, &body, &Theme::default());

        assert!(frame.plain_row(1).contains('░'));
        assert!(frame.plain_row(3).starts_with("  Widget"));
    }

    #[test]
    fn hidden_products_are_counted() {
        let body = ListBody::Items { rows: vec![widget_row()], hidden: 7, overlay_placeholders: 0, dimmed: false };
        let mut frame = Frame::new(4, 40);
        render_list_body(&mut frame, 1, 4, &body, &Theme::default());

        assert_eq!(frame.plain_row(3), "  … and 7 more");
    }
}
