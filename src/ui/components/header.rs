//! Title bar.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the centered, bold page title across the full width at `row`.
///
/// Returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title_len = display_width(&header.title).min(cols);
    let left = cols.saturating_sub(title_len) / 2;

    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!(
        "{}{}{}",
        " ".repeat(left),
        header.title,
        " ".repeat(cols.saturating_sub(left + title_len))
    );
    print!("{}", Theme::reset());
    row + 1
}
