//! View model types representing renderable UI state.
//!
//! View models are computed by `AppState::compute_viewmodel()` and consumed by the
//! renderer. They hold display-ready strings and flags only; no booking logic
//! runs while drawing.
//!
//! # Example
//!
//! ```rust
//! use skybook::ui::viewmodel::{DetailPanel, FooterInfo, HeaderInfo, UIViewModel, ViewBody};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Booking Confirmed ".to_string() },
//!     footer: FooterInfo { keybindings: "Enter: home".to_string() },
//!     body: ViewBody::Confirmation(DetailPanel {
//!         title: "Thank you for booking".to_string(),
//!         lines: vec![("Reference".to_string(), "SB-1-20250301".to_string())],
//!     }),
//!     notice: None,
//! };
//! assert!(vm.notice.is_none());
//! ```

/// Complete UI view model for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Keybinding hints for the current view and focus.
    pub footer: FooterInfo,

    /// Page-specific content.
    pub body: ViewBody,

    /// Modal notice drawn over the body, if one is showing.
    pub notice: Option<NoticeInfo>,
}

/// Page-specific part of the view model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewBody {
    Landing(LandingInfo),
    Search(SearchViewModel),
    Booking(DetailPanel),
    Confirmation(DetailPanel),
}

/// Welcome text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingInfo {
    pub title: String,
    pub lines: Vec<String>,
}

/// Search form plus results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchViewModel {
    /// Visible form fields in display order.
    pub fields: Vec<FieldItem>,

    /// Result rows inside the visible window.
    pub display_items: Vec<DisplayItem>,

    /// Index of the highlighted row within `display_items`.
    pub selected_index: usize,

    /// Whether keyboard focus is on the results table.
    pub results_focused: bool,

    /// Shown instead of the table when a completed search matched nothing.
    pub empty_state: Option<EmptyState>,

    /// Loading or error text shown above the table.
    pub status: Option<StatusLine>,
}

/// One labelled input on the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldItem {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub is_focused: bool,
}

/// One flight row in the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub airline: String,
    pub route: String,
    pub departs: String,
    pub arrives: String,
    pub duration: String,
    pub price: String,
    pub is_selected: bool,
}

/// Status text above the results table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusLine {
    Loading(String),
    Error(String),
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message, e.g. "No flights available".
    pub message: String,

    /// Secondary hint.
    pub subtitle: String,
}

/// Modal notice content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeInfo {
    /// Message lines, first line is the heading.
    pub lines: Vec<String>,

    /// Dismiss hint shown at the bottom of the box.
    pub hint: String,
}

/// Titled list of label/value pairs used by the booking and confirmation pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailPanel {
    pub title: String,
    pub lines: Vec<(String, String)>,
}
