//! Search workflow: form model, validation and catalog matching.
//!
//! # Modules
//!
//! - [`form`]: The search form, its fields and [`validate`]
//! - [`matcher`]: Exact, case-insensitive city-pair filtering
//! - [`outcome`]: [`perform_search`], which validates and matches in one step
//!
//! # Example
//!
//! ```rust
//! use skybook::domain::Catalog;
//! use skybook::search::{perform_search, SearchForm, SearchOutcome};
//!
//! let catalog = Catalog::builtin()?;
//! let outcome = perform_search(&catalog, &SearchForm::default());
//! assert!(matches!(outcome, SearchOutcome::Invalid(_)));
//! # Ok::<(), skybook::SkybookError>(())
//! ```

pub mod form;
pub mod matcher;
pub mod outcome;

pub use form::{validate, FormField, SearchForm, TripType, ValidationErrors};
pub use matcher::search;
pub use outcome::{perform_search, SearchOutcome};
