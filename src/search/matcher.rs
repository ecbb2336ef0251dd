//! Exact city-pair matching over the catalog.

use crate::domain::{Catalog, FlightRecord};

/// Returns the catalog flights flying `source` → `destination`.
///
/// Both cities are compared case-insensitively and must match exactly. Matches keep
/// catalog order. No match is an empty vector, not an error.
///
/// # Example
///
/// ```rust
/// use skybook::domain::Catalog;
/// use skybook::search::search;
///
/// let catalog = Catalog::builtin()?;
/// let found = search(&catalog, "bengaluru", "MUMBAI");
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].id, 1);
/// # Ok::<(), skybook::SkybookError>(())
/// ```
#[must_use]
pub fn search(catalog: &Catalog, source: &str, destination: &str) -> Vec<FlightRecord> {
    let _span = tracing::debug_span!("search",
        source = %source,
        destination = %destination,
        catalog_size = catalog.len()
    ).entered();

    let source = source.to_lowercase();
    let destination = destination.to_lowercase();

    let matches: Vec<FlightRecord> = catalog
        .flights()
        .iter()
        .filter(|f| f.source.to_lowercase() == source && f.destination.to_lowercase() == destination)
        .cloned()
        .collect();

    tracing::debug!(match_count = matches.len(), "catalog scanned");
    matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(flights: &[FlightRecord]) -> Vec<u32> {
        flights.iter().map(|f| f.id).collect()
    }

    #[test]
    fn finds_each_direction_separately() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(ids(&search(&catalog, "Bengaluru", "Mumbai")), vec![1]);
        assert_eq!(ids(&search(&catalog, "Mumbai", "Bengaluru")), vec![2]);
        assert_eq!(ids(&search(&catalog, "Delhi", "Goa")), vec![3]);
    }

    #[test]
    fn reversed_route_is_not_a_match() {
        let catalog = Catalog::builtin().unwrap();
        assert!(search(&catalog, "Goa", "Delhi").is_empty());
    }

    #[test]
    fn matching_ignores_case() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            search(&catalog, "bengaluru", "MUMBAI"),
            search(&catalog, "Bengaluru", "Mumbai")
        );
    }

    #[test]
    fn partial_city_names_do_not_match() {
        let catalog = Catalog::builtin().unwrap();
        assert!(search(&catalog, "Bengal", "Mumbai").is_empty());
        assert!(search(&catalog, "", "").is_empty());
    }

    #[test]
    fn keeps_catalog_order_for_multiple_matches() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[flights]]
            id = 9
            airline = "Late"
            source = "Pune"
            destination = "Goa"
            departure_time = "t"
            arrival_time = "t"
            duration = "d"
            price = 10

            [[flights]]
            id = 4
            airline = "Early"
            source = "pune"
            destination = "GOA"
            departure_time = "t"
            arrival_time = "t"
            duration = "d"
            price = 20
            "#,
        )
        .unwrap();
        assert_eq!(ids(&search(&catalog, "Pune", "Goa")), vec![9, 4]);
    }
}
