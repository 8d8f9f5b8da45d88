//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: title and tagline
//! - [`form`]: add-product inputs, inline error and submit button
//! - [`product_list`]: list header with refresh control, items
//! - [`skeleton`]: loading placeholders
//! - [`empty`]: empty list message
//! - [`footer`]: keybinding hints
//!
//! # Layout
//!
//! ```text
//! row 1       [blank]
//! rows 2-3    [Header]
//! row 4       [Border]
//! rows 5-9    [Form]
//! row 10      [Border]
//! rows 11-13  [List header]
//! rows 14..   [List body, two rows per item]
//! rows-1      [Border]
//! rows        [Footer]
//! ```

pub mod empty;
pub mod footer;
pub mod form;
pub mod header;
pub mod product_list;
pub mod skeleton;

use crate::ui::helpers::{border_line, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use footer::render_footer;
use form::render_form;
use header::render_header;
use product_list::{render_list_body, render_list_header};

fn render_border(frame: &mut Frame, row: usize, theme: &Theme) -> usize {
    let line = border_line(theme, frame.cols());
    frame.put(row, line);
    row + 1
}

/// Renders the full screen layout into `frame`.
pub fn render_layout(frame: &mut Frame, vm: &UIViewModel, theme: &Theme) {
    let rows = frame.height();
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(frame, current_row, &vm.header, theme);
    current_row = render_border(frame, current_row, theme);
    current_row = render_form(frame, current_row, &vm.form, theme);
    current_row = render_border(frame, current_row, theme);
    current_row = render_list_header(frame, current_row, &vm.list.header, theme);

    let footer_row = rows;
    let border_row = footer_row.saturating_sub(1);
    render_list_body(frame, current_row, border_row.saturating_sub(1), &vm.list.body, theme);

    render_border(frame, border_row, theme);
    render_footer(frame, footer_row, &vm.footer, theme);
}
