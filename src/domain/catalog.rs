//! The compiled-in flight catalog.
//!
//! The catalog is a TOML document embedded with `include_str!` and parsed once when
//! the plugin starts. After construction it only hands out shared references, so
//! entries cannot change for the lifetime of the plugin.
//!
//! # TOML Format
//!
//! ```toml
//! [[flights]]
//! id = 1
//! airline = "IndiGo"
//! source = "Bengaluru"
//! destination = "Mumbai"
//! departure_time = "08:00 AM"
//! arrival_time = "10:30 AM"
//! duration = "2h 30m"
//! price = 4200
//! ```

use super::error::{Result, SkybookError};
use super::flight::FlightRecord;
use serde::Deserialize;
use std::collections::HashSet;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    flights: Vec<FlightRecord>,
}

/// Immutable, ordered list of flights available for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    flights: Vec<FlightRecord>,
}

impl Catalog {
    /// Parses the catalog shipped with the plugin.
    ///
    /// # Errors
    ///
    /// Returns [`SkybookError::Catalog`] if the embedded document is malformed or
    /// contains duplicate ids.
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CATALOG)
    }

    /// Parses a catalog from TOML text, keeping document order.
    ///
    /// # Errors
    ///
    /// Returns [`SkybookError::Catalog`] if the text is not valid TOML for the
    /// catalog format or if two flights share an id.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skybook::domain::Catalog;
    ///
    /// let catalog = Catalog::from_toml_str(r#"
    ///     [[flights]]
    ///     id = 7
    ///     airline = "Vistara"
    ///     source = "Pune"
    ///     destination = "Delhi"
    ///     departure_time = "06:10 AM"
    ///     arrival_time = "08:20 AM"
    ///     duration = "2h 10m"
    ///     price = 5100
    /// "#)?;
    /// assert_eq!(catalog.len(), 1);
    /// # Ok::<(), skybook::SkybookError>(())
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let document: CatalogDocument = toml::from_str(text)
            .map_err(|e| SkybookError::Catalog(format!("failed to parse catalog: {e}")))?;

        let mut seen = HashSet::new();
        for flight in &document.flights {
            if !seen.insert(flight.id) {
                return Err(SkybookError::Catalog(format!(
                    "duplicate flight id {}",
                    flight.id
                )));
            }
        }

        tracing::debug!(flight_count = document.flights.len(), "catalog loaded");
        Ok(Self {
            flights: document.flights,
        })
    }

    /// A catalog with no flights. Used when the built-in catalog cannot be loaded.
    #[must_use]
    pub const fn empty() -> Self {
        Self { flights: Vec::new() }
    }

    #[must_use]
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Looks up a flight by id.
    #[must_use]
    pub fn get(&self, id: u32) -> Option<&FlightRecord> {
        self.flights.iter().find(|f| f.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_flights_in_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<u32> = catalog.flights().iter().map(|f| f.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(catalog.get(3).unwrap().airline, "SpiceJet");
        assert_eq!(catalog.get(2).unwrap().price, 4600);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let text = r#"
            [[flights]]
            id = 1
            airline = "A"
            source = "X"
            destination = "Y"
            departure_time = "t"
            arrival_time = "t"
            duration = "d"
            price = 1

            [[flights]]
            id = 1
            airline = "B"
            source = "Y"
            destination = "X"
            departure_time = "t"
            arrival_time = "t"
            duration = "d"
            price = 2
        "#;
        let err = Catalog::from_toml_str(text).unwrap_err();
        assert!(matches!(err, SkybookError::Catalog(ref msg) if msg.contains("duplicate flight id 1")));
    }

    #[test]
    fn negative_price_does_not_parse() {
        let text = r#"
            [[flights]]
            id = 1
            airline = "A"
            source = "X"
            destination = "Y"
            departure_time = "t"
            arrival_time = "t"
            duration = "d"
            price = -5
        "#;
        assert!(Catalog::from_toml_str(text).is_err());
    }

    #[test]
    fn empty_document_is_an_empty_catalog() {
        let catalog = Catalog::from_toml_str("").unwrap();
        assert!(catalog.is_empty());
    }
}
