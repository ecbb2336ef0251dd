//! Search form model and validation.
//!
//! [`SearchForm`] holds what the user typed into the search view. It is only ever
//! changed through [`SearchForm::update_field`], which returns a fresh copy with
//! exactly one field replaced, so a render never observes a half-applied edit.
//!
//! [`validate`] is a pure check run on submit. Its result is a value, not an error:
//! an empty [`ValidationErrors`] means the form may be searched.

use crate::domain::error::{Result, SkybookError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const SOURCE_REQUIRED: &str = "Please enter departure city";
const DESTINATION_REQUIRED: &str = "Please enter destination city";
const DEPARTURE_REQUIRED: &str = "Please select departure date";
const RETURN_REQUIRED: &str = "Please select return date";
const SAME_CITY: &str = "Source and destination must be different";

/// Whether the trip needs a return date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    /// Returns the other trip type.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::OneWay => Self::RoundTrip,
            Self::RoundTrip => Self::OneWay,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::OneWay => "one-way",
            Self::RoundTrip => "round-trip",
        }
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = SkybookError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "one-way" => Ok(Self::OneWay),
            "round-trip" => Ok(Self::RoundTrip),
            other => Err(SkybookError::UnknownTripType(other.to_string())),
        }
    }
}

/// Names of the editable fields, in on-screen order.
///
/// The ordering is also the order in which validation messages are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    TripType,
    Source,
    Destination,
    DepartureDate,
    ReturnDate,
}

impl FormField {
    /// All fields, in display order.
    pub const ALL: [Self; 5] = [
        Self::TripType,
        Self::Source,
        Self::Destination,
        Self::DepartureDate,
        Self::ReturnDate,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::TripType => "Trip Type",
            Self::Source => "From",
            Self::Destination => "To",
            Self::DepartureDate => "Departure Date",
            Self::ReturnDate => "Return Date",
        }
    }

    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::TripType => "",
            Self::Source => "Enter departure city",
            Self::Destination => "Enter destination city",
            Self::DepartureDate | Self::ReturnDate => "YYYY-MM-DD",
        }
    }

    #[must_use]
    pub const fn is_date(self) -> bool {
        matches!(self, Self::DepartureDate | Self::ReturnDate)
    }
}

/// Trip parameters entered by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchForm {
    trip_type: TripType,
    source: String,
    destination: String,
    departure_date: String,
    return_date: String,
}

impl SearchForm {
    /// Creates an empty form with the given trip type.
    #[must_use]
    pub fn new(trip_type: TripType) -> Self {
        Self {
            trip_type,
            ..Self::default()
        }
    }

    /// Returns a copy of the form with `field` set to `value`.
    ///
    /// Every other field is carried over unchanged. For [`FormField::TripType`] the
    /// value must be `one-way` or `round-trip`.
    ///
    /// # Errors
    ///
    /// Returns [`SkybookError::UnknownTripType`] for an unrecognised trip type.
    ///
    /// # Example
    ///
    /// ```rust
    /// use skybook::search::{FormField, SearchForm, TripType};
    ///
    /// let form = SearchForm::default();
    /// let next = form.update_field(FormField::Source, "Delhi")?;
    /// assert_eq!(next.source(), "Delhi");
    /// assert_eq!(form.source(), "");
    ///
    /// let round = next.update_field(FormField::TripType, "round-trip")?;
    /// assert_eq!(round.trip_type(), TripType::RoundTrip);
    /// # Ok::<(), skybook::SkybookError>(())
    /// ```
    pub fn update_field(&self, field: FormField, value: &str) -> Result<Self> {
        let mut next = self.clone();
        match field {
            FormField::TripType => next.trip_type = value.parse()?,
            FormField::Source => next.source = value.to_string(),
            FormField::Destination => next.destination = value.to_string(),
            FormField::DepartureDate => next.departure_date = value.to_string(),
            FormField::ReturnDate => next.return_date = value.to_string(),
        }
        Ok(next)
    }

    /// Returns the current text of a field.
    #[must_use]
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::TripType => self.trip_type.as_str(),
            FormField::Source => &self.source,
            FormField::Destination => &self.destination,
            FormField::DepartureDate => &self.departure_date,
            FormField::ReturnDate => &self.return_date,
        }
    }

    /// Fields that are shown (and can take focus) for the current trip type.
    #[must_use]
    pub fn visible_fields(&self) -> Vec<FormField> {
        FormField::ALL
            .into_iter()
            .filter(|f| *f != FormField::ReturnDate || self.trip_type == TripType::RoundTrip)
            .collect()
    }

    #[must_use]
    pub const fn trip_type(&self) -> TripType {
        self.trip_type
    }

    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    #[must_use]
    pub fn departure_date(&self) -> &str {
        &self.departure_date
    }

    #[must_use]
    pub fn return_date(&self) -> &str {
        &self.return_date
    }

    /// Shorthand for [`validate`].
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        validate(self)
    }
}

/// Field-to-message map produced by [`validate`].
///
/// Iteration follows [`FormField`] order, which is also the order the messages are
/// listed in the combined notice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors {
    errors: BTreeMap<FormField, &'static str>,
}

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    #[must_use]
    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, *msg))
    }

    /// All messages joined into the single notice shown to the user.
    ///
    /// ```rust
    /// use skybook::search::{validate, SearchForm};
    ///
    /// let notice = validate(&SearchForm::default()).notice();
    /// assert!(notice.starts_with("Please fix the following errors:\n"));
    /// assert!(notice.contains("Please enter departure city"));
    /// ```
    #[must_use]
    pub fn notice(&self) -> String {
        let lines: Vec<&str> = self.errors.values().copied().collect();
        format!("Please fix the following errors:\n{}", lines.join("\n"))
    }

    fn insert(&mut self, field: FormField, message: &'static str) {
        self.errors.insert(field, message);
    }
}

/// Checks a form before a search is issued.
///
/// Rules:
/// - source and destination must be non-empty after trimming
/// - departure date must be non-empty
/// - a round trip needs a return date
/// - source and destination must differ ignoring case; this replaces the
///   destination message and only applies once both cities are filled in
///
/// The return date lower bound is owned by the date widget and is not checked here.
#[must_use]
pub fn validate(form: &SearchForm) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    let source = form.source.trim();
    let destination = form.destination.trim();

    if source.is_empty() {
        errors.insert(FormField::Source, SOURCE_REQUIRED);
    }
    if destination.is_empty() {
        errors.insert(FormField::Destination, DESTINATION_REQUIRED);
    }
    if form.departure_date.is_empty() {
        errors.insert(FormField::DepartureDate, DEPARTURE_REQUIRED);
    }
    if form.trip_type == TripType::RoundTrip && form.return_date.is_empty() {
        errors.insert(FormField::ReturnDate, RETURN_REQUIRED);
    }
    if !source.is_empty() && !destination.is_empty() && source.to_lowercase() == destination.to_lowercase() {
        errors.insert(FormField::Destination, SAME_CITY);
    }

    tracing::debug!(error_count = errors.len(), "search form validated");
    errors
}
