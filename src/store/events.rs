//! Named events accepted by the store.

use crate::domain::FlightRecord;
use crate::search::SearchForm;

/// The only ways [`SearchResultState`](super::SearchResultState) can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    /// A search was requested with this form. Sets the loading flag and clears
    /// any previous error. Does not run the search.
    SearchFlights(SearchForm),

    /// A search finished with these flights (possibly none).
    SearchFlightsSuccess(Vec<FlightRecord>),

    /// The user picked a flight to book.
    SelectFlight(FlightRecord),
}

impl StoreEvent {
    /// Stable event name used in traces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SearchFlights(_) => "SEARCH_FLIGHTS",
            Self::SearchFlightsSuccess(_) => "SEARCH_FLIGHTS_SUCCESS",
            Self::SelectFlight(_) => "SELECT_FLIGHT",
        }
    }
}
