//! Application state store for search results and flight selection.
//!
//! The store is an ordinary value owned by [`AppState`](crate::app::AppState).
//! Every change goes through [`reduce`], driven by one of three [`StoreEvent`]s.
//!
//! ```text
//! SearchFlights(form) ──► is_loading = true, error cleared
//! SearchFlightsSuccess(results) ──► results replaced, is_loading = false
//! SelectFlight(flight) ──► selected_flight set
//! ```

pub mod events;
pub mod reducer;
pub mod state;

pub use events::StoreEvent;
pub use reducer::{reduce, Store};
pub use state::SearchResultState;
