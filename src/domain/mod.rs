//! Domain layer for the Skybook plugin.
//!
//! Core types independent of Zellij and of the terminal UI.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`flight`]: The flight record model
//! - [`catalog`]: The compiled-in, immutable flight catalog
//!
//! # Examples
//!
//! ```
//! use skybook::domain::{Catalog, Result};
//!
//! fn cheapest_price() -> Result<Option<u32>> {
//!     let catalog = Catalog::builtin()?;
//!     Ok(catalog.flights().iter().map(|f| f.price).min())
//! }
//! # assert_eq!(cheapest_price().unwrap(), Some(3800));
//! ```

pub mod catalog;
pub mod error;
pub mod flight;

pub use catalog::Catalog;
pub use error::{Result, SkybookError};
pub use flight::FlightRecord;
