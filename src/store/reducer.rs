//! Pure reducer and the store that owns its state.
//!
//! [`reduce`] maps `(state, event)` to a new state and cannot fail. [`Store`] holds
//! the current state inside [`AppState`](crate::app::AppState) and applies events in
//! the order they are dispatched. There is no global instance.

use super::events::StoreEvent;
use super::state::SearchResultState;
use crate::domain::FlightRecord;
use crate::search::SearchForm;

/// Computes the state that follows `event`.
///
/// # Example
///
/// ```rust
/// use skybook::store::{reduce, SearchResultState, StoreEvent};
///
/// let state = SearchResultState::default();
/// let next = reduce(&state, &StoreEvent::SearchFlightsSuccess(vec![]));
/// assert!(next.results.is_empty());
/// assert!(!next.is_loading);
/// ```
#[must_use]
pub fn reduce(state: &SearchResultState, event: &StoreEvent) -> SearchResultState {
    match event {
        StoreEvent::SearchFlights(form) => SearchResultState {
            is_loading: true,
            error: None,
            last_query: Some(form.clone()),
            ..state.clone()
        },
        StoreEvent::SearchFlightsSuccess(results) => SearchResultState {
            results: results.clone(),
            is_loading: false,
            error: None,
            ..state.clone()
        },
        StoreEvent::SelectFlight(flight) => SearchResultState {
            selected_flight: Some(flight.clone()),
            ..state.clone()
        },
    }
}

/// Owner of the current [`SearchResultState`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    state: SearchResultState,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> &SearchResultState {
        &self.state
    }

    /// Applies a single event.
    pub fn dispatch(&mut self, event: StoreEvent) {
        let _span = tracing::debug_span!("dispatch", event = event.name()).entered();
        self.state = reduce(&self.state, &event);
        tracing::debug!(
            result_count = self.state.results.len(),
            is_loading = self.state.is_loading,
            has_selection = self.state.selected_flight.is_some(),
            "store updated"
        );
    }

    /// Records a completed search.
    ///
    /// Dispatches `SearchFlights` immediately followed by `SearchFlightsSuccess`, so
    /// a search request is never left without its results.
    pub fn record_search(&mut self, form: SearchForm, results: Vec<FlightRecord>) {
        self.dispatch(StoreEvent::SearchFlights(form));
        self.dispatch(StoreEvent::SearchFlightsSuccess(results));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::search::FormField;

    fn flight(id: u32) -> FlightRecord {
        Catalog::builtin().unwrap().get(id).unwrap().clone()
    }

    #[test]
    fn search_requested_sets_loading_and_clears_error() {
        let state = SearchResultState {
            error: Some("stale".into()),
            ..SearchResultState::default()
        };
        let form = SearchForm::default().update_field(FormField::Source, "Delhi").unwrap();
        let next = reduce(&state, &StoreEvent::SearchFlights(form.clone()));

        assert!(next.is_loading);
        assert_eq!(next.error, None);
        assert_eq!(next.last_query, Some(form));
        assert!(!next.has_searched());
    }

    #[test]
    fn empty_success_leaves_results_empty_and_not_loading() {
        let loading = SearchResultState {
            is_loading: true,
            results: vec![flight(1)],
            ..SearchResultState::default()
        };
        let next = reduce(&loading, &StoreEvent::SearchFlightsSuccess(vec![]));
        assert!(next.results.is_empty());
        assert!(!next.is_loading);
    }

    #[test]
    fn success_replaces_results_and_keeps_selection() {
        let state = SearchResultState {
            selected_flight: Some(flight(3)),
            results: vec![flight(3)],
            ..SearchResultState::default()
        };
        let next = reduce(&state, &StoreEvent::SearchFlightsSuccess(vec![flight(1), flight(2)]));
        assert_eq!(next.results, vec![flight(1), flight(2)]);
        assert_eq!(next.selected_flight, Some(flight(3)));
    }

    #[test]
    fn select_flight_sets_selection_without_touching_results() {
        let state = SearchResultState {
            results: vec![flight(1), flight(2)],
            ..SearchResultState::default()
        };
        let next = reduce(&state, &StoreEvent::SelectFlight(flight(2)));
        assert_eq!(next.selected_flight, Some(flight(2)));
        assert_eq!(next.results, state.results);
    }

    #[test]
    fn select_flight_is_idempotent() {
        let state = SearchResultState::default();
        let event = StoreEvent::SelectFlight(flight(1));
        let once = reduce(&state, &event);
        let twice = reduce(&once, &event);
        assert_eq!(once, twice);
    }

    #[test]
    fn record_search_leaves_store_settled() {
        let mut store = Store::new();
        store.record_search(SearchForm::default(), vec![flight(1)]);
        assert!(!store.state().is_loading);
        assert_eq!(store.state().results, vec![flight(1)]);
        assert!(store.state().has_searched());
    }
}
