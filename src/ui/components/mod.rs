//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar
//! - `footer`: Keybinding hints
//! - `form`: Search form fields
//! - `table`: Flight results
//! - `empty`: "No flights available" message
//! - `panel`: Landing text and booking/confirmation details
//! - `notice`: Modal validation notice
//!
//! Every page shares the same frame:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Page body]
//! [Blank padding to fill screen]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod form;
mod header;
mod notice;
mod panel;
mod table;

use crate::ui::helpers::{display_width, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{SearchViewModel, StatusLine, UIViewModel, ViewBody};

use empty::render_empty_state;
use footer::render_footer;
use form::render_form;
use header::render_header;
use notice::render_notice;
use panel::{render_detail_panel, render_landing};
use table::{render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next free row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}{}{}", Theme::fg(color), "─".repeat(cols), Theme::reset());
    row + 1
}

/// Renders the shared frame, the page body, and the notice if one is showing.
pub fn render_page(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row += 1;

    match &vm.body {
        ViewBody::Landing(landing) => {
            let top = current_row.max(rows.saturating_sub(landing.lines.len() + 2) / 2);
            render_landing(top, landing, theme, cols);
        }
        ViewBody::Search(search) => render_search(current_row, search, theme, cols),
        ViewBody::Booking(panel) | ViewBody::Confirmation(panel) => {
            render_detail_panel(current_row, panel, theme, cols);
        }
    }

    let footer_row = rows.saturating_sub(1);
    let border_row = footer_row.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);

    if let Some(notice) = &vm.notice {
        render_notice(notice, theme, rows, cols);
    }
}

fn render_search(row: usize, search: &SearchViewModel, theme: &Theme, cols: usize) {
    let mut current_row = render_form(row, &search.fields, theme, cols) + 1;

    if let Some(status) = &search.status {
        let (color, text) = match status {
            StatusLine::Loading(text) => (&theme.colors.text_dim, text),
            StatusLine::Error(text) => (&theme.colors.notice_fg, text),
        };
        position_cursor(current_row, 2);
        print!("{}{text}{}", Theme::fg(color), Theme::reset());
    }
    current_row += 1;

    if let Some(empty) = &search.empty_state {
        render_empty_state(current_row, empty, theme, cols);
        return;
    }

    if search.display_items.is_empty() {
        return;
    }

    current_row = render_table_headers(current_row, &search.display_items, theme);
    render_table_rows(current_row, &search.display_items, theme, cols);

    if !search.results_focused {
        let hint = "Tab to the results to choose a flight";
        position_cursor(current_row + search.display_items.len(), cols.saturating_sub(display_width(hint)));
        print!("{}{}{hint}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim), Theme::reset());
    }
}
