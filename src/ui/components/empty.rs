//! Message shown in place of the results table when a search matched nothing.

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the two-line empty state centered horizontally, starting at `row`.
///
/// ```text
/// [padding] No flights available [padding]
/// [padding]  Try a different city pair  [padding]
/// ```
///
/// Returns the next free row.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let centered = |text: &str| {
        let len = display_width(text);
        let left = cols.saturating_sub(len) / 2;
        format!(
            "{}{text}{}",
            " ".repeat(left),
            " ".repeat(cols.saturating_sub(left + len))
        )
    };

    position_cursor(row, 1);
    print!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.empty_state_fg),
        centered(&empty.message),
        Theme::reset()
    );

    position_cursor(row + 1, 1);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        centered(&empty.subtitle),
        Theme::reset()
    );

    row + 2
}
