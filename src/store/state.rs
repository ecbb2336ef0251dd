//! Search results and flight selection as read by the views.

use crate::domain::FlightRecord;
use crate::search::SearchForm;

/// Results/selection state held by the [`Store`](super::Store).
///
/// Starts empty and only changes through [`reduce`](super::reduce).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResultState {
    /// Flights matching the last successful search, in catalog order.
    pub results: Vec<FlightRecord>,

    /// Set when a search is requested, cleared when its results arrive.
    ///
    /// Searches complete synchronously, so views never observe `true` between
    /// events in practice.
    pub is_loading: bool,

    /// Human-readable failure message.
    ///
    /// No event sets this; it is cleared on every search and rendered if present.
    pub error: Option<String>,

    /// Flight chosen for booking.
    pub selected_flight: Option<FlightRecord>,

    /// Form contents of the last requested search.
    pub last_query: Option<SearchForm>,
}

impl SearchResultState {
    /// Returns `true` once at least one search has completed.
    #[must_use]
    pub fn has_searched(&self) -> bool {
        self.last_query.is_some() && !self.is_loading
    }
}
