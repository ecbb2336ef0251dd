//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Key presses arrive from the plugin runtime, already mapped to an [`Event`]
//! 2. [`handle_event`] pattern-matches the event against the current view and focus
//! 3. State mutations occur via `AppState` methods and the store
//! 4. The caller learns whether to re-render and which actions to execute
//!
//! While a validation notice is showing, any event other than [`Event::CloseFocus`]
//! only dismisses it.
//!
//! # Example
//!
//! ```rust
//! use skybook::app::{handle_event, AppState, Event, View};
//! use skybook::domain::Catalog;
//! use skybook::search::TripType;
//! use skybook::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default(), TripType::OneWay);
//! let (render, actions) = handle_event(&mut state, &Event::Confirm)?;
//! assert!(render && actions.is_empty());
//! assert_eq!(state.view, View::FlightSearch);
//! # Ok::<(), skybook::SkybookError>(())
//! ```

use super::date_input;
use super::modes::{Focus, View};
use super::navigation;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::search::{perform_search, FormField, SearchOutcome};

/// Events triggered by user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Moves the result cursor down by one position (wraps to top).
    KeyDown,
    /// Moves the result cursor up by one position (wraps to bottom).
    KeyUp,
    /// Moves focus to the next form field or the results table.
    FocusNext,
    /// Moves focus to the previous form field or the results table.
    FocusPrev,
    /// Types a character into the focused field.
    ///
    /// A space on the trip type field toggles it.
    Char(char),
    /// Removes the last character from the focused field.
    Backspace,
    /// Switches between one-way and round-trip from any field.
    ToggleTripType,
    /// Enter: start a search, submit the form, book the highlighted flight, or
    /// confirm the booking, depending on the page.
    Confirm,
    /// Esc: returns to the previous page.
    Back,
    /// Hides the plugin UI.
    CloseFocus,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns `(should_render, actions)`.
///
/// # Errors
///
/// Returns errors from form updates. With the events above this only happens if a
/// trip type string fails to parse, which the handler never produces.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event, view = state.view.name()).entered();

    if *event == Event::CloseFocus {
        return Ok((false, vec![Action::CloseFocus]));
    }

    if state.notice.take().is_some() {
        tracing::debug!("notice dismissed");
        return Ok((true, vec![]));
    }

    match event {
        Event::KeyDown => {
            if state.focus != Focus::Results {
                return Ok((false, vec![]));
            }
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::KeyUp => {
            if state.focus != Focus::Results {
                return Ok((false, vec![]));
            }
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::FocusNext | Event::FocusPrev => {
            if state.view != View::FlightSearch {
                return Ok((false, vec![]));
            }
            if *event == Event::FocusNext {
                state.focus_next();
            } else {
                state.focus_prev();
            }
            tracing::trace!(focus = ?state.focus, "focus moved");
            Ok((true, vec![]))
        }
        Event::Char(c) => handle_char(state, *c),
        Event::Backspace => {
            let Some(field) = editable_field(state) else {
                return Ok((false, vec![]));
            };
            let mut value = state.form.value(field).to_string();
            if value.pop().is_none() {
                return Ok((false, vec![]));
            }
            state.set_field(field, &value)?;
            Ok((true, vec![]))
        }
        Event::ToggleTripType => {
            if state.view != View::FlightSearch {
                return Ok((false, vec![]));
            }
            state.toggle_trip_type()?;
            tracing::debug!(trip_type = %state.form.trip_type(), "trip type toggled");
            Ok((true, vec![]))
        }
        Event::Confirm => handle_confirm(state),
        Event::Back => {
            let Some(previous) = navigation::back(&state.view) else {
                return Ok((false, vec![]));
            };
            if previous == View::FlightSearch {
                state.focus = if state.results().is_empty() {
                    Focus::Field(FormField::Source)
                } else {
                    Focus::Results
                };
            }
            tracing::debug!(from = state.view.name(), to = previous.name(), "navigating back");
            state.view = previous;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
    }
}

/// Returns the text or date field that currently takes typed input, if any.
fn editable_field(state: &AppState) -> Option<FormField> {
    if state.view != View::FlightSearch || !state.focus.is_text_entry() {
        return None;
    }
    match state.focus {
        Focus::Field(field) => Some(field),
        Focus::Results => None,
    }
}

fn handle_char(state: &mut AppState, c: char) -> Result<(bool, Vec<Action>)> {
    if state.view != View::FlightSearch {
        return Ok((false, vec![]));
    }

    if state.focus == Focus::Field(FormField::TripType) {
        if c == ' ' {
            state.toggle_trip_type()?;
            return Ok((true, vec![]));
        }
        return Ok((false, vec![]));
    }

    let Some(field) = editable_field(state) else {
        return Ok((false, vec![]));
    };

    let current = state.form.value(field);
    if field.is_date() && !date_input::accepts(current, c) {
        tracing::trace!(field = field.label(), char = %c, "rejected date input");
        return Ok((false, vec![]));
    }

    let mut value = current.to_string();
    value.push(c);
    state.set_field(field, &value)?;

    tracing::trace!(field = field.label(), value = %value, "field updated");
    Ok((true, vec![]))
}

fn handle_confirm(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    match &state.view {
        View::Landing => {
            state.start_search();
            tracing::debug!("search page opened");
            Ok((true, vec![]))
        }
        View::FlightSearch if state.focus == Focus::Results => {
            let Some(flight) = state.selected_flight().cloned() else {
                tracing::debug!("no flight selected");
                return Ok((false, vec![]));
            };
            match navigation::select_flight(&mut state.store, flight) {
                Some(view) => {
                    state.view = view;
                    Ok((true, vec![]))
                }
                None => Ok((false, vec![])),
            }
        }
        View::FlightSearch => {
            submit_search(state);
            Ok((true, vec![]))
        }
        View::FlightBooking(page) => {
            state.view = View::Confirmation(page.confirm());
            Ok((true, vec![]))
        }
        View::Confirmation(_) => {
            state.view = View::Landing;
            Ok((true, vec![]))
        }
    }
}

fn submit_search(state: &mut AppState) {
    match perform_search(&state.catalog, &state.form) {
        SearchOutcome::Found(flights) => {
            tracing::info!(
                source = %state.form.source(),
                destination = %state.form.destination(),
                trip_type = %state.form.trip_type(),
                result_count = flights.len(),
                "search completed"
            );
            let has_results = !flights.is_empty();
            state.store.record_search(state.form.clone(), flights);
            state.selected_index = 0;
            if has_results {
                state.focus = Focus::Results;
            }
        }
        SearchOutcome::Invalid(errors) => {
            state.notice = Some(errors.notice());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Catalog;
    use crate::search::TripType;
    use crate::ui::Theme;

    fn searching() -> AppState {
        let mut state = AppState::new(Catalog::builtin().unwrap(), Theme::default(), TripType::OneWay);
        handle_event(&mut state, &Event::Confirm).unwrap();
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn typing_goes_into_focused_field() {
        let mut state = searching();
        type_text(&mut state, "Delhi");
        handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.form.source(), "Delh");
    }

    #[test]
    fn date_field_rejects_letters_and_overflow() {
        let mut state = searching();
        state.focus = Focus::Field(FormField::DepartureDate);
        type_text(&mut state, "2025-0x3-01-9");
        assert_eq!(state.form.departure_date(), "2025-03-01");
    }

    #[test]
    fn space_on_trip_type_toggles() {
        let mut state = searching();
        state.focus = Focus::Field(FormField::TripType);
        handle_event(&mut state, &Event::Char(' ')).unwrap();
        assert_eq!(state.form.trip_type(), TripType::RoundTrip);
    }

    #[test]
    fn invalid_submit_shows_notice_until_next_key() {
        let mut state = searching();
        handle_event(&mut state, &Event::Confirm).unwrap();

        let notice = state.notice.clone().unwrap();
        assert!(notice.starts_with("Please fix the following errors:"));
        assert!(!state.store.state().has_searched());

        let (render, _) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(render);
        assert!(state.notice.is_none());
        assert_eq!(state.form.source(), "");
    }

    #[test]
    fn close_focus_is_not_swallowed_by_notice() {
        let mut state = searching();
        state.notice = Some("Please fix the following errors:\nx".to_string());
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn back_from_booking_returns_to_results() {
        let mut state = searching();
        type_text(&mut state, "Bengaluru");
        handle_event(&mut state, &Event::FocusNext).unwrap();
        type_text(&mut state, "Mumbai");
        handle_event(&mut state, &Event::FocusNext).unwrap();
        type_text(&mut state, "2025-03-01");
        handle_event(&mut state, &Event::Confirm).unwrap();
        handle_event(&mut state, &Event::Confirm).unwrap();
        assert!(matches!(state.view, View::FlightBooking(_)));

        handle_event(&mut state, &Event::Back).unwrap();
        assert_eq!(state.view, View::FlightSearch);
        assert_eq!(state.focus, Focus::Results);
        assert_eq!(state.form.source(), "Bengaluru");
    }

    #[test]
    fn back_on_landing_does_nothing() {
        let mut state = AppState::new(Catalog::empty(), Theme::default(), TripType::OneWay);
        let (render, actions) = handle_event(&mut state, &Event::Back).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }
}
