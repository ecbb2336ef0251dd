//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (main.rs) and the search and store
//! modules. It owns the page flow of the booking demo.
//!
//! ```text
//! Key → Event → handle_event → AppState / Store mutations → (render?, Actions)
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`date_input`]: Date entry rules and the return date lower bound
//! - [`handler`]: Event processing logic
//! - [`modes`]: Page and focus state types
//! - [`navigation`]: Flight selection and back navigation
//! - [`pages`]: Booking and confirmation page models
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod date_input;
pub mod handler;
pub mod modes;
pub mod navigation;
pub mod pages;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Focus, View};
pub use pages::{BookingPage, ConfirmationPage};
pub use state::AppState;
