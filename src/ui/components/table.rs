//! Flight results table.
//!
//! Columns are fixed-width so rows line up; the route column is left out when the
//! view model leaves it blank for narrow panes.

use crate::ui::helpers::{pad_to, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::DisplayItem;

const AIRLINE_WIDTH: usize = 12;
const ROUTE_WIDTH: usize = 24;
const TIME_WIDTH: usize = 10;
const DURATION_WIDTH: usize = 9;

fn show_route(items: &[DisplayItem]) -> bool {
    items.iter().any(|item| !item.route.is_empty())
}

/// Renders the column headings and returns the next free row.
pub fn render_table_headers(row: usize, items: &[DisplayItem], theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}{}", Theme::bold(), Theme::fg(&theme.colors.header_fg));
    print!(" {}", pad_to("AIRLINE", AIRLINE_WIDTH));
    if show_route(items) {
        print!("{}", pad_to("ROUTE", ROUTE_WIDTH));
    }
    print!(
        "{}{}{}PRICE",
        pad_to("DEPARTS", TIME_WIDTH),
        pad_to("ARRIVES", TIME_WIDTH),
        pad_to("DURATION", DURATION_WIDTH)
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders one row per item starting at `row` and returns the next free row.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let with_route = show_route(items);
    let mut current_row = row;
    for item in items {
        render_table_row(current_row, item, with_route, theme, cols);
        current_row += 1;
    }
    current_row
}

/// Selected rows are filled across the whole width so the highlight reads as a bar.
fn render_table_row(row: usize, item: &DisplayItem, with_route: bool, theme: &Theme, cols: usize) {
    position_cursor(row, 1);

    let base = if item.is_selected {
        format!(
            "{}{}",
            Theme::fg(&theme.colors.selection_fg),
            Theme::bg(&theme.colors.selection_bg)
        )
    } else {
        Theme::fg(&theme.colors.text_normal)
    };

    let mut line = format!(" {}", pad_to(&item.airline, AIRLINE_WIDTH));
    if with_route {
        line.push_str(&pad_to(&item.route, ROUTE_WIDTH));
    }
    line.push_str(&pad_to(&item.departs, TIME_WIDTH));
    line.push_str(&pad_to(&item.arrives, TIME_WIDTH));
    line.push_str(&pad_to(&item.duration, DURATION_WIDTH));

    print!("{base}{line}");
    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.price_fg));
    }
    print!("{}", item.price);

    let used = line.chars().count() + item.price.chars().count();
    print!("{base}{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
}
