//! View and focus state types for the application.
//!
//! [`View`] is the page currently on screen. The booking and confirmation pages
//! carry the flight they are about, so neither needs to look it up elsewhere.
//! [`Focus`] tracks which part of the search page receives keystrokes.
//!
//! # State Machine
//!
//! ```text
//! Landing ──Enter──► FlightSearch ──Enter on result──► FlightBooking ──Enter──► Confirmation
//!    ▲                   │  ▲                                │                     │
//!    └──────Esc──────────┘  └─────────────Esc────────────────┘                     │
//!    ▲                                                                             │
//!    └────────────────────────────Enter / Esc──────────────────────────────────────┘
//! ```

use super::pages::{BookingPage, ConfirmationPage};
use crate::search::FormField;

/// Keyboard focus on the search page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// A form field receives input.
    ///
    /// Text and date fields take typed characters; the trip type field toggles on
    /// space.
    Field(FormField),

    /// The results list receives j/k navigation and Enter books the highlighted flight.
    Results,
}

impl Focus {
    /// Returns `true` if typed characters go into a text or date field.
    #[must_use]
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::Field(field) if field != FormField::TripType)
    }
}

/// Page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Welcome page.
    Landing,

    /// Search form and results.
    FlightSearch,

    /// Summary of the chosen flight, awaiting confirmation.
    FlightBooking(BookingPage),

    /// Booking confirmed.
    Confirmation(ConfirmationPage),
}

impl View {
    /// Route-like name used in traces.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::FlightSearch => "/flight-search",
            Self::FlightBooking(_) => "/flight-booking",
            Self::Confirmation(_) => "/confirmation",
        }
    }
}
