//! Landing text and the label/value panels used by the booking and confirmation pages.

use crate::ui::helpers::{display_width, pad_to, position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DetailPanel, LandingInfo};

const LABEL_WIDTH: usize = 16;

/// Renders the welcome title and lines centered in the body area.
pub fn render_landing(row: usize, landing: &LandingInfo, theme: &Theme, cols: usize) -> usize {
    let centered_col = |text: &str| cols.saturating_sub(display_width(text)) / 2 + 1;

    position_cursor(row, centered_col(&landing.title));
    print!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        landing.title,
        Theme::reset()
    );

    let mut current_row = row + 2;
    for line in &landing.lines {
        position_cursor(current_row, centered_col(line));
        print!("{}{line}{}", Theme::fg(&theme.colors.text_normal), Theme::reset());
        current_row += 1;
    }
    current_row
}

/// Renders a bold title followed by aligned `label  value` lines.
pub fn render_detail_panel(row: usize, panel: &DetailPanel, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 3);
    print!(
        "{}{}{}{}",
        Theme::bold(),
        Theme::fg(&theme.colors.header_fg),
        truncate(&panel.title, cols.saturating_sub(4)),
        Theme::reset()
    );

    let value_width = cols.saturating_sub(LABEL_WIDTH + 5);
    let mut current_row = row + 2;
    for (label, value) in &panel.lines {
        position_cursor(current_row, 3);
        let value_color = if label == "Price" {
            &theme.colors.price_fg
        } else {
            &theme.colors.text_normal
        };
        print!(
            "{}{}{}{}{}",
            Theme::fg(&theme.colors.text_dim),
            pad_to(label, LABEL_WIDTH),
            Theme::fg(value_color),
            truncate(value, value_width),
            Theme::reset()
        );
        current_row += 1;
    }
    current_row
}
