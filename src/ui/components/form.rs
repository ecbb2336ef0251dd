//! Search form fields, one per row.

use crate::ui::helpers::{pad_to, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FieldItem;

const LABEL_WIDTH: usize = 16;
const INDENT: usize = 3;

/// Renders the fields starting at `row` and returns the next free row.
///
/// ```text
///  ▸ From            Delhi_
///    To              Enter destination city
/// ```
///
/// The focused field gets a marker and a trailing cursor; empty fields show their
/// placeholder dimmed.
pub fn render_form(row: usize, fields: &[FieldItem], theme: &Theme, cols: usize) -> usize {
    let value_width = cols.saturating_sub(INDENT + LABEL_WIDTH + 1);
    let mut current_row = row;

    for field in fields {
        position_cursor(current_row, 1);

        if field.is_focused {
            print!("{} ▸ {}", Theme::fg(&theme.colors.focus_border), Theme::bold());
        } else {
            print!("{}   ", Theme::fg(&theme.colors.text_normal));
        }
        print!("{}{}", pad_to(field.label, LABEL_WIDTH), Theme::reset());

        let shown = if field.value.is_empty() {
            print!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
            truncate(field.placeholder, value_width)
        } else {
            print!("{}", Theme::fg(&theme.colors.text_normal));
            truncate(&field.value, value_width)
        };
        print!("{shown}{}", Theme::reset());

        if field.is_focused {
            print!("{}_{}", Theme::fg(&theme.colors.focus_border), Theme::reset());
        }

        current_row += 1;
    }

    current_row
}
