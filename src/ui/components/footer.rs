//! Keybinding hints at the bottom of the pane.

use crate::ui::helpers::{display_width, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the hints centered and dimmed at `row`, cut to fit narrow panes.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let hints = truncate(&footer.keybindings, cols);
    let hints_len = display_width(&hints);
    let left = cols.saturating_sub(hints_len) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(
        "{}{hints}{}",
        " ".repeat(left),
        " ".repeat(cols.saturating_sub(left + hints_len))
    );
    print!("{}", Theme::reset());
}
