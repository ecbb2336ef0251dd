//! Error types for the Skybook plugin.
//!
//! This module defines the centralized error type [`SkybookError`] and a type alias
//! [`Result`] for the fallible edges of the plugin: embedded resources, theme files,
//! configuration values and trip type strings.
//!
//! Form validation is not part of this taxonomy. A failed validation is
//! an ordinary value ([`ValidationErrors`](crate::search::ValidationErrors)) that the
//! caller inspects and shows to the user.

use thiserror::Error;

/// The main error type for Skybook operations.
///
/// # Examples
///
/// ```
/// use skybook::SkybookError;
///
/// let err = SkybookError::UnknownTripType("multi-city".to_string());
/// assert_eq!(err.to_string(), "Unknown trip type: multi-city");
/// ```
#[derive(Debug, Error)]
pub enum SkybookError {
    /// The flight catalog could not be parsed or violates its invariants.
    ///
    /// Only reachable if the embedded catalog document is edited incorrectly, or
    /// when a caller builds a catalog from its own TOML text.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A trip type string was neither `one-way` nor `round-trip`.
    #[error("Unknown trip type: {0}")]
    UnknownTripType(String),
}

/// A specialized `Result` type for Skybook operations.
pub type Result<T> = std::result::Result<T, SkybookError>;
