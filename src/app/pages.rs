//! Booking and confirmation page models.
//!
//! Both pages are built from explicit values: the chosen flight and the search
//! that found it. Nothing is stored once the plugin closes.

use super::date_input::parse_date;
use crate::domain::FlightRecord;
use crate::search::{SearchForm, TripType};

/// The booking page for one selected flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingPage {
    pub flight: FlightRecord,
    pub trip_type: TripType,
    pub departure_date: String,
    pub return_date: Option<String>,
}

impl BookingPage {
    /// Builds the page for `flight`, taking the travel dates from the search `form`.
    #[must_use]
    pub fn new(flight: FlightRecord, form: &SearchForm) -> Self {
        let return_date = (form.trip_type() == TripType::RoundTrip)
            .then(|| form.return_date().to_string());
        Self {
            flight,
            trip_type: form.trip_type(),
            departure_date: form.departure_date().to_string(),
            return_date,
        }
    }

    /// Confirms the booking.
    #[must_use]
    pub fn confirm(&self) -> ConfirmationPage {
        let reference = booking_reference(self.flight.id, &self.departure_date);
        tracing::debug!(flight_id = self.flight.id, reference = %reference, "booking confirmed");
        ConfirmationPage {
            booking: self.clone(),
            reference,
        }
    }
}

/// The confirmation page shown after a booking is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPage {
    pub booking: BookingPage,
    pub reference: String,
}

/// Derives a display reference such as `SB-1-20250301`.
///
/// The date part is dropped when the departure date is not a complete date.
#[must_use]
pub fn booking_reference(flight_id: u32, departure_date: &str) -> String {
    parse_date(departure_date).map_or_else(
        || format!("SB-{flight_id}"),
        |date| format!("SB-{flight_id}-{}", date.format("%Y%m%d")),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::search::FormField;

    #[test]
    fn one_way_booking_has_no_return_date() {
        let flight = Catalog::builtin().unwrap().get(1).unwrap().clone();
        let form = SearchForm::new(TripType::OneWay)
            .update_field(FormField::DepartureDate, "2025-03-01")
            .and_then(|f| f.update_field(FormField::ReturnDate, "2025-03-09"))
            .unwrap();

        let page = BookingPage::new(flight.clone(), &form);
        assert_eq!(page.flight, flight);
        assert_eq!(page.return_date, None);
        assert_eq!(page.departure_date, "2025-03-01");
    }

    #[test]
    fn confirmation_keeps_booking_and_builds_reference() {
        let flight = Catalog::builtin().unwrap().get(3).unwrap().clone();
        let form = SearchForm::new(TripType::RoundTrip)
            .update_field(FormField::DepartureDate, "2025-12-24")
            .and_then(|f| f.update_field(FormField::ReturnDate, "2025-12-31"))
            .unwrap();

        let confirmation = BookingPage::new(flight, &form).confirm();
        assert_eq!(confirmation.reference, "SB-3-20251224");
        assert_eq!(confirmation.booking.return_date.as_deref(), Some("2025-12-31"));
    }

    #[test]
    fn reference_without_complete_date() {
        assert_eq!(booking_reference(2, "2025-1"), "SB-2");
    }
}
