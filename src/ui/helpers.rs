//! Shared rendering utilities.
//!
//! Widths here are counted in `char`s, which is what the terminal shows for the
//! text this plugin renders (city names, the `→` arrow, prices).

/// Positions the cursor at a 1-indexed row and column.
///
/// ```rust
/// use skybook::ui::helpers::position_cursor;
///
/// position_cursor(5, 1);
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of terminal columns `text` occupies.
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `max` columns, ending in `...` when cut.
///
/// ```rust
/// use skybook::ui::helpers::truncate;
///
/// assert_eq!(truncate("Bengaluru → Mumbai", 12), "Bengaluru...");
/// assert_eq!(truncate("Goa", 12), "Goa");
/// ```
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if display_width(text) <= max {
        return text.to_string();
    }
    if max <= 3 {
        return text.chars().take(max).collect();
    }
    let kept: String = text.chars().take(max - 3).collect();
    format!("{kept}...")
}

/// Pads `text` with spaces on the right to exactly `width` columns, truncating
/// if it is longer.
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let padding = width.saturating_sub(display_width(&text));
    format!("{text}{}", " ".repeat(padding))
}
