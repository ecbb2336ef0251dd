//! Flight record domain model.
//!
//! A [`FlightRecord`] is one row of the mock catalog. Cities keep the casing they
//! were entered with for display; matching against them is case-insensitive and
//! lives in [`crate::search::matcher`].

use serde::{Deserialize, Serialize};

/// One bookable flight from the catalog.
///
/// Times and duration are display strings only. There is no timezone or date
/// arithmetic anywhere in the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightRecord {
    pub id: u32,
    pub airline: String,
    pub source: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration: String,
    pub price: u32,
}

impl FlightRecord {
    /// Returns the city pair as shown in result rows, e.g. `Delhi → Goa`.
    ///
    /// # Examples
    ///
    /// ```
    /// use skybook::domain::FlightRecord;
    ///
    /// let flight = FlightRecord {
    ///     id: 3,
    ///     airline: "SpiceJet".into(),
    ///     source: "Delhi".into(),
    ///     destination: "Goa".into(),
    ///     departure_time: "09:00 AM".into(),
    ///     arrival_time: "12:00 PM".into(),
    ///     duration: "3h".into(),
    ///     price: 3800,
    /// };
    /// assert_eq!(flight.route(), "Delhi → Goa");
    /// assert_eq!(flight.display_price(), "$3800");
    /// ```
    #[must_use]
    pub fn route(&self) -> String {
        format!("{} → {}", self.source, self.destination)
    }

    #[must_use]
    pub fn display_price(&self) -> String {
        format!("${}", self.price)
    }
}
