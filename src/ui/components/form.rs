//! Add-product form renderer.
//!
//! ```text
//!   Add New Product
//!   Please enter a valid price
//!   Product Name  Gadget▏
//!   Price ($)     0.00
//!   [ Add Product ]
//! ```

use crate::ui::helpers::{truncate, width, Frame};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormView, InputView};

const INDENT: &str = "  ";
const LABEL_WIDTH: usize = 14;

/// Renders the form on five rows starting at `row` and returns the next
/// free row. The error row stays blank when there is no error.
pub fn render_form(frame: &mut Frame, row: usize, form: &FormView, theme: &Theme) -> usize {
    frame.put(
        row,
        format!("{INDENT}{}{}{}{}", Theme::bold(), Theme::fg(&theme.colors.accent), form.title, Theme::reset()),
    );

    if let Some(error) = &form.error {
        let error = truncate(error, frame.cols().saturating_sub(INDENT.len()));
        frame.put(row + 1, format!("{INDENT}{}{error}{}", Theme::fg(&theme.colors.error_fg), Theme::reset()));
    }

    let input_width = frame.cols().saturating_sub(INDENT.len() + LABEL_WIDTH + 1);
    frame.put(row + 2, render_input(&form.name, form.disabled, input_width, theme));
    frame.put(row + 3, render_input(&form.price, form.disabled, input_width, theme));
    frame.put(row + 4, render_button(&form.submit_label, form.disabled, theme));

    row + 5
}

fn render_input(input: &InputView, disabled: bool, max: usize, theme: &Theme) -> String {
    let label_color = if input.focused {
        &theme.colors.input_focus_fg
    } else {
        &theme.colors.text_dim
    };
    let label = format!("{:<width$}", input.label, width = LABEL_WIDTH);

    let value = if input.value.is_empty() {
        format!("{}{}", Theme::fg(&theme.colors.text_dim), truncate(&input.placeholder, max))
    } else {
        // keep the end of long input visible, where typing happens
        let skip = width(&input.value).saturating_sub(max.saturating_sub(1));
        let tail: String = input.value.chars().skip(skip).collect();
        format!("{}{tail}", Theme::fg(&theme.colors.input_fg))
    };

    let cursor = if input.focused {
        format!("{}▏", Theme::fg(&theme.colors.input_focus_fg))
    } else {
        String::new()
    };
    let dim = if disabled { Theme::dim() } else { "" };

    format!("{INDENT}{dim}{}{label}{}{dim}{value}{cursor}{}", Theme::fg(label_color), Theme::reset(), Theme::reset())
}

fn render_button(label: &str, disabled: bool, theme: &Theme) -> String {
    let background = if disabled {
        &theme.colors.button_disabled_bg
    } else {
        &theme.colors.button_bg
    };
    format!(
        "{INDENT}{}{}{}[ {label} ]{}",
        Theme::bold(),
        Theme::fg(&theme.colors.button_fg),
        Theme::bg(background),
        Theme::reset()
    )
}
