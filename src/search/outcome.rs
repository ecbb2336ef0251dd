//! Validate-then-match as a single operation.

use super::form::{validate, SearchForm, ValidationErrors};
use super::matcher::search;
use crate::domain::{Catalog, FlightRecord};

/// Result of [`perform_search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The form was valid; these flights matched (possibly none).
    Found(Vec<FlightRecord>),
    /// The form was rejected. No matching was attempted.
    Invalid(ValidationErrors),
}

/// Validates `form` and, when it passes, matches its city pair against `catalog`.
///
/// Cities are trimmed before matching so a stray trailing space typed into the form
/// does not hide an otherwise exact match.
///
/// # Example
///
/// ```rust
/// use skybook::domain::Catalog;
/// use skybook::search::{perform_search, FormField, SearchForm, SearchOutcome};
///
/// let catalog = Catalog::builtin()?;
/// let form = SearchForm::default()
///     .update_field(FormField::Source, "Delhi")?
///     .update_field(FormField::Destination, "Goa")?
///     .update_field(FormField::DepartureDate, "2025-05-01")?;
///
/// match perform_search(&catalog, &form) {
///     SearchOutcome::Found(flights) => assert_eq!(flights[0].airline, "SpiceJet"),
///     SearchOutcome::Invalid(errors) => panic!("{}", errors.notice()),
/// }
/// # Ok::<(), skybook::SkybookError>(())
/// ```
#[must_use]
pub fn perform_search(catalog: &Catalog, form: &SearchForm) -> SearchOutcome {
    let errors = validate(form);
    if !errors.is_empty() {
        tracing::debug!(error_count = errors.len(), "search rejected by validation");
        return SearchOutcome::Invalid(errors);
    }

    SearchOutcome::Found(search(
        catalog,
        form.source().trim(),
        form.destination().trim(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::FormField;

    fn filled(source: &str, destination: &str) -> SearchForm {
        SearchForm::default()
            .update_field(FormField::Source, source)
            .and_then(|f| f.update_field(FormField::Destination, destination))
            .and_then(|f| f.update_field(FormField::DepartureDate, "2025-05-01"))
            .unwrap()
    }

    #[test]
    fn invalid_form_never_reaches_matching() {
        let catalog = Catalog::builtin().unwrap();
        let outcome = perform_search(&catalog, &filled("Mumbai", "mumbai"));
        let SearchOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure");
        };
        assert!(errors.get(FormField::Destination).is_some());
    }

    #[test]
    fn valid_form_without_matches_is_found_and_empty() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            perform_search(&catalog, &filled("Goa", "Delhi")),
            SearchOutcome::Found(vec![])
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored_for_matching() {
        let catalog = Catalog::builtin().unwrap();
        let SearchOutcome::Found(flights) = perform_search(&catalog, &filled(" Mumbai ", "Bengaluru ")) else {
            panic!("expected a search");
        };
        assert_eq!(flights.len(), 1);
        assert_eq!(flights[0].id, 2);
    }
}
