//! View transitions.
//!
//! Selecting a flight records the selection in the store and then moves to the
//! booking view. The booking view is handed the flight directly, together with
//! the validated search that produced it.

use super::modes::View;
use super::pages::BookingPage;
use crate::domain::FlightRecord;
use crate::store::{Store, StoreEvent};

/// Dispatches `SelectFlight` and returns the booking view for `flight`.
///
/// Trip type and dates come from the store's last search, not from the form as
/// currently edited. Returns `None`, leaving the store untouched, when no search
/// has been recorded.
///
/// # Example
///
/// ```rust
/// use skybook::app::navigation::select_flight;
/// use skybook::app::View;
/// use skybook::domain::Catalog;
/// use skybook::search::{FormField, SearchForm};
/// use skybook::store::Store;
///
/// let catalog = Catalog::builtin()?;
/// let flight = catalog.get(1).cloned().unwrap();
/// let mut store = Store::new();
/// assert!(select_flight(&mut store, flight.clone()).is_none());
///
/// let form = SearchForm::default().update_field(FormField::DepartureDate, "2025-03-01")?;
/// store.record_search(form, vec![flight.clone()]);
///
/// let view = select_flight(&mut store, flight.clone());
/// assert_eq!(store.state().selected_flight.as_ref(), Some(&flight));
/// assert!(matches!(view, Some(View::FlightBooking(ref page)) if page.departure_date == "2025-03-01"));
/// # Ok::<(), skybook::SkybookError>(())
/// ```
pub fn select_flight(store: &mut Store, flight: FlightRecord) -> Option<View> {
    let Some(query) = store.state().last_query.clone() else {
        tracing::debug!(flight_id = flight.id, "no recorded search, selection ignored");
        return None;
    };
    tracing::debug!(flight_id = flight.id, airline = %flight.airline, "flight selected");
    store.dispatch(StoreEvent::SelectFlight(flight.clone()));
    Some(View::FlightBooking(BookingPage::new(flight, &query)))
}

/// Returns the view reached by going back from `view`, or `None` on the landing page.
#[must_use]
pub fn back(view: &View) -> Option<View> {
    match view {
        View::Landing => None,
        View::FlightSearch | View::Confirmation(_) => Some(View::Landing),
        View::FlightBooking(_) => Some(View::FlightSearch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::search::{FormField, SearchForm, TripType};

    #[test]
    fn selecting_twice_keeps_same_store_state() {
        let flight = Catalog::builtin().unwrap().get(2).unwrap().clone();
        let form = SearchForm::default();

        let mut store = Store::new();
        store.record_search(form.clone(), vec![flight.clone()]);
        select_flight(&mut store, flight.clone());
        let once = store.clone();
        let view = select_flight(&mut store, flight.clone());

        assert_eq!(store, once);
        assert_eq!(view, Some(View::FlightBooking(BookingPage::new(flight, &form))));
    }

    #[test]
    fn booking_uses_recorded_search_not_later_edits() {
        let flight = Catalog::builtin().unwrap().get(3).unwrap().clone();
        let searched = SearchForm::new(TripType::OneWay)
            .update_field(FormField::DepartureDate, "2025-03-01")
            .unwrap();

        let mut store = Store::new();
        store.record_search(searched, vec![flight.clone()]);

        let Some(View::FlightBooking(page)) = select_flight(&mut store, flight) else {
            panic!("expected booking view");
        };
        assert_eq!(page.trip_type, TripType::OneWay);
        assert_eq!(page.departure_date, "2025-03-01");
        assert_eq!(page.return_date, None);
    }

    #[test]
    fn selection_without_search_is_refused() {
        let flight = Catalog::builtin().unwrap().get(1).unwrap().clone();
        let mut store = Store::new();

        assert_eq!(select_flight(&mut store, flight), None);
        assert_eq!(store, Store::new());
    }

    #[test]
    fn back_walks_towards_landing() {
        let flight = Catalog::builtin().unwrap().get(1).unwrap().clone();
        let booking = BookingPage::new(flight, &SearchForm::default());

        assert_eq!(back(&View::Landing), None);
        assert_eq!(back(&View::FlightSearch), Some(View::Landing));
        assert_eq!(back(&View::FlightBooking(booking.clone())), Some(View::FlightSearch));
        assert_eq!(back(&View::Confirmation(booking.confirm())), Some(View::Landing));
    }
}
