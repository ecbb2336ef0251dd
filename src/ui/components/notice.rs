//! Modal validation notice drawn on top of the current page.

use crate::ui::helpers::{display_width, pad_to, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::NoticeInfo;

/// Renders the notice in a bordered box centered in the pane.
///
/// ```text
/// ┌──────────────────────────────────────┐
/// │ Please fix the following errors:     │
/// │ Please enter departure city          │
/// │                                      │
/// │ Press any key to continue            │
/// └──────────────────────────────────────┘
/// ```
pub fn render_notice(notice: &NoticeInfo, theme: &Theme, rows: usize, cols: usize) {
    let longest = notice
        .lines
        .iter()
        .map(|line| display_width(line))
        .chain(std::iter::once(display_width(&notice.hint)))
        .max()
        .unwrap_or(0);

    let inner_width = (longest + 2).min(cols.saturating_sub(4));
    let box_height = notice.lines.len() + 4;
    let top = rows.saturating_sub(box_height) / 2 + 1;
    let left = cols.saturating_sub(inner_width + 2) / 2 + 1;

    let border = Theme::fg(&theme.colors.notice_border);
    let text_width = inner_width.saturating_sub(2);

    position_cursor(top, left);
    print!("{border}┌{}┐", "─".repeat(inner_width));

    let mut row = top + 1;
    for (i, line) in notice.lines.iter().enumerate() {
        position_cursor(row, left);
        let style = if i == 0 {
            format!("{}{}", Theme::bold(), Theme::fg(&theme.colors.notice_fg))
        } else {
            Theme::fg(&theme.colors.notice_fg)
        };
        print!(
            "{border}│ {style}{}{} {border}│",
            pad_to(line, text_width),
            Theme::reset()
        );
        row += 1;
    }

    position_cursor(row, left);
    print!("{border}│{}│", " ".repeat(inner_width));
    row += 1;

    position_cursor(row, left);
    print!(
        "{border}│ {}{}{}{} {border}│",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        pad_to(&notice.hint, text_width),
        Theme::reset()
    );
    row += 1;

    position_cursor(row, left);
    print!("{border}└{}┘{}", "─".repeat(inner_width), Theme::reset());
}
