//! Application state management and view model computation.
//!
//! [`AppState`] is the single owner of everything the booking flow needs between
//! keystrokes: the current page, the search form, keyboard focus, the result
//! cursor, and the [`Store`] holding results and the selected flight. The event
//! handler mutates it; the renderer only reads the [`UIViewModel`] computed from it.
//!
//! # Example
//!
//! ```rust
//! use skybook::app::AppState;
//! use skybook::domain::Catalog;
//! use skybook::search::TripType;
//! use skybook::ui::Theme;
//!
//! let mut state = AppState::new(Catalog::builtin()?, Theme::default(), TripType::OneWay);
//! state.start_search();
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert_eq!(viewmodel.header.title, " Search Flights ");
//! # Ok::<(), skybook::SkybookError>(())
//! ```

use super::date_input::clamp_return_date;
use super::modes::{Focus, View};
use crate::domain::error::Result;
use crate::domain::{Catalog, FlightRecord};
use crate::search::{FormField, SearchForm, TripType};
use crate::store::Store;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailPanel, DisplayItem, EmptyState, FieldItem, FooterInfo, HeaderInfo, LandingInfo,
    NoticeInfo, SearchViewModel, StatusLine, UIViewModel, ViewBody,
};

/// Rows used by everything on the search page except form fields and result rows:
/// top blank, header, border, gap above and below the form, status, column
/// headings, hint, footer border, footer.
const SEARCH_CHROME_ROWS: usize = 10;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page currently on screen.
    pub view: View,

    /// Contents of the search form.
    ///
    /// Kept when returning from the booking page so the user sees the same search.
    pub form: SearchForm,

    /// Where keystrokes go on the search page.
    pub focus: Focus,

    /// Zero-based cursor into the store's results.
    ///
    /// Wraps around during navigation via `move_selection_up/down()`.
    pub selected_index: usize,

    /// Search results and selected flight.
    pub store: Store,

    /// Flights available for matching.
    pub catalog: Catalog,

    /// Validation notice currently shown as a modal.
    pub notice: Option<String>,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Trip type a fresh search form starts with.
    pub default_trip_type: TripType,
}

impl AppState {
    /// Creates the state shown when the plugin first opens: the landing page with an
    /// empty form and an empty store.
    #[must_use]
    pub fn new(catalog: Catalog, theme: Theme, default_trip_type: TripType) -> Self {
        Self {
            view: View::Landing,
            form: SearchForm::new(default_trip_type),
            focus: Focus::Field(FormField::Source),
            selected_index: 0,
            store: Store::new(),
            catalog,
            notice: None,
            theme,
            default_trip_type,
        }
    }

    /// Opens the search page with a fresh form.
    ///
    /// Results from an earlier search stay in the store until the next search
    /// replaces them.
    pub fn start_search(&mut self) {
        self.form = SearchForm::new(self.default_trip_type);
        self.focus = Focus::Field(FormField::Source);
        self.selected_index = 0;
        self.view = View::FlightSearch;
    }

    /// Flights from the last search.
    #[must_use]
    pub fn results(&self) -> &[FlightRecord] {
        &self.store.state().results
    }

    /// Focus targets in Tab order. The results table is only reachable when it
    /// has rows.
    fn focus_order(&self) -> Vec<Focus> {
        let mut order: Vec<Focus> = self
            .form
            .visible_fields()
            .into_iter()
            .map(Focus::Field)
            .collect();
        if !self.results().is_empty() {
            order.push(Focus::Results);
        }
        order
    }

    /// Moves focus to the next field, wrapping to the first.
    pub fn focus_next(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus);
        self.focus = match current {
            Some(i) => order[(i + 1) % order.len()],
            None => order.first().copied().unwrap_or(Focus::Field(FormField::Source)),
        };
    }

    /// Moves focus to the previous field, wrapping to the last.
    pub fn focus_prev(&mut self) {
        let order = self.focus_order();
        let current = order.iter().position(|f| *f == self.focus);
        self.focus = match current {
            Some(0) | None => order.last().copied().unwrap_or(Focus::Field(FormField::Source)),
            Some(i) => order[i - 1],
        };
    }

    /// Moves the result cursor down by one position, wrapping to the top.
    ///
    /// No-op if there are no results.
    pub fn move_selection_down(&mut self) {
        let len = self.results().len();
        if len == 0 {
            return;
        }
        self.selected_index = (self.selected_index + 1) % len;
    }

    /// Moves the result cursor up by one position, wrapping to the bottom.
    ///
    /// No-op if there are no results.
    pub fn move_selection_up(&mut self) {
        let len = self.results().len();
        if len == 0 {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = len - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Returns the highlighted result, if any.
    #[must_use]
    pub fn selected_flight(&self) -> Option<&FlightRecord> {
        self.results().get(self.selected_index)
    }

    /// Replaces one form field.
    ///
    /// Editing either date of a round trip re-applies the return date lower bound.
    ///
    /// # Errors
    ///
    /// Returns [`SkybookError::UnknownTripType`](crate::SkybookError::UnknownTripType)
    /// if `field` is the trip type and `value` is not a known trip type.
    pub fn set_field(&mut self, field: FormField, value: &str) -> Result<()> {
        let mut next = self.form.update_field(field, value)?;

        if field.is_date() && next.trip_type() == TripType::RoundTrip {
            if let Some(raised) = clamp_return_date(next.return_date(), next.departure_date()) {
                tracing::debug!(return_date = %raised, "return date raised to departure date");
                next = next.update_field(FormField::ReturnDate, &raised)?;
            }
        }

        self.form = next;
        Ok(())
    }

    /// Switches between one-way and round-trip.
    ///
    /// If focus was on the return date and it disappears, focus moves to the
    /// departure date.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`AppState::set_field`].
    pub fn toggle_trip_type(&mut self) -> Result<()> {
        let next = self.form.trip_type().toggled();
        self.set_field(FormField::TripType, next.as_str())?;
        if next == TripType::RoundTrip {
            let return_date = self.form.return_date().to_string();
            self.set_field(FormField::ReturnDate, &return_date)?;
        } else if self.focus == Focus::Field(FormField::ReturnDate) {
            self.focus = Focus::Field(FormField::DepartureDate);
        }
        Ok(())
    }

    /// Computes a renderable UI view model from current state and terminal dimensions.
    ///
    /// # Windowing Algorithm
    ///
    /// 1. Calculate rows left for results after the form and the page chrome
    /// 2. Center the window on the selected row
    /// 3. Shift the window back if it runs past the end, to keep it full
    /// 4. Report the selection relative to the window
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.view {
            View::Landing => ViewBody::Landing(Self::compute_landing()),
            View::FlightSearch => ViewBody::Search(self.compute_search(rows, cols)),
            View::FlightBooking(page) => {
                let mut lines = flight_lines(&page.flight);
                lines.push(("Trip".to_string(), trip_label(page.trip_type).to_string()));
                lines.push(("Departure Date".to_string(), page.departure_date.clone()));
                if let Some(ret) = &page.return_date {
                    lines.push(("Return Date".to_string(), ret.clone()));
                }
                ViewBody::Booking(DetailPanel {
                    title: format!("{} · {}", page.flight.airline, page.flight.route()),
                    lines,
                })
            }
            View::Confirmation(page) => {
                let mut lines = vec![("Reference".to_string(), page.reference.clone())];
                lines.extend(flight_lines(&page.booking.flight));
                lines.push(("Departure Date".to_string(), page.booking.departure_date.clone()));
                if let Some(ret) = &page.booking.return_date {
                    lines.push(("Return Date".to_string(), ret.clone()));
                }
                ViewBody::Confirmation(DetailPanel {
                    title: "Your flight is booked".to_string(),
                    lines,
                })
            }
        };

        UIViewModel {
            header: self.compute_header(),
            footer: self.compute_footer(),
            body,
            notice: self.notice.as_ref().map(|text| NoticeInfo {
                lines: text.lines().map(str::to_string).collect(),
                hint: "Press any key to continue".to_string(),
            }),
        }
    }

    fn compute_landing() -> LandingInfo {
        LandingInfo {
            title: "Welcome to Skybook".to_string(),
            lines: vec![
                "Find and book domestic flights in a few keystrokes.".to_string(),
                String::new(),
                "Press Enter to search for flights".to_string(),
            ],
        }
    }

    fn compute_search(&self, rows: usize, cols: usize) -> SearchViewModel {
        let visible_fields = self.form.visible_fields();
        let fields: Vec<FieldItem> = visible_fields
            .iter()
            .map(|&field| FieldItem {
                label: field.label(),
                value: match field {
                    FormField::TripType => trip_label(self.form.trip_type()).to_string(),
                    other => self.form.value(other).to_string(),
                },
                placeholder: field.placeholder(),
                is_focused: self.focus == Focus::Field(field),
            })
            .collect();

        let state = self.store.state();
        let status = if state.is_loading {
            Some(StatusLine::Loading("Searching...".to_string()))
        } else {
            state.error.clone().map(StatusLine::Error)
        };

        let empty_state = state.results.is_empty().then(|| EmptyState {
            message: "No flights available".to_string(),
            subtitle: if state.has_searched() {
                "Try a different city pair".to_string()
            } else {
                "Fill in the form and press Enter".to_string()
            },
        });

        let results = &state.results;
        if results.is_empty() {
            return SearchViewModel {
                fields,
                display_items: vec![],
                selected_index: 0,
                results_focused: false,
                empty_state,
                status,
            };
        }

        let available_rows = rows
            .saturating_sub(SEARCH_CHROME_ROWS + visible_fields.len())
            .max(1);

        let mut visible_start = self.selected_index.saturating_sub(available_rows / 2);
        let visible_end = (visible_start + available_rows).min(results.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available_rows && results.len() >= available_rows {
            visible_start = visible_end.saturating_sub(available_rows);
        }

        let results_focused = self.focus == Focus::Results;
        let display_items = results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, flight)| {
                let is_selected = results_focused && visible_start + relative_idx == self.selected_index;
                compute_display_item(flight, is_selected, cols)
            })
            .collect();

        SearchViewModel {
            fields,
            display_items,
            selected_index: self.selected_index.saturating_sub(visible_start),
            results_focused,
            empty_state,
            status,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match &self.view {
            View::Landing => " Skybook ".to_string(),
            View::FlightSearch if self.store.state().has_searched() => {
                format!(" Search Flights ({}) ", self.results().len())
            }
            View::FlightSearch => " Search Flights ".to_string(),
            View::FlightBooking(_) => " Book Flight ".to_string(),
            View::Confirmation(_) => " Booking Confirmed ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match (&self.view, self.focus) {
            (View::Landing, _) => "Enter: search flights  q: quit",
            (View::FlightSearch, Focus::Results) => {
                "j/k: navigate  Enter: book  Tab: form  Esc: back  q: quit"
            }
            (View::FlightSearch, Focus::Field(FormField::TripType)) => {
                "Space: toggle trip  Tab/Shift+Tab: fields  Enter: search  Esc: back  q: quit"
            }
            (View::FlightSearch, Focus::Field(_)) => {
                "Type to edit  Ctrl+t: trip type  Tab/Shift+Tab: fields  Enter: search  Esc: back"
            }
            (View::FlightBooking(_), _) => "Enter: confirm booking  Esc: back to results  q: quit",
            (View::Confirmation(_), _) => "Enter/Esc: home  q: quit",
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

const fn trip_label(trip_type: TripType) -> &'static str {
    match trip_type {
        TripType::OneWay => "One Way",
        TripType::RoundTrip => "Round Trip",
    }
}

fn flight_lines(flight: &FlightRecord) -> Vec<(String, String)> {
    vec![
        ("Airline".to_string(), flight.airline.clone()),
        ("Route".to_string(), flight.route()),
        ("Departure".to_string(), flight.departure_time.clone()),
        ("Arrival".to_string(), flight.arrival_time.clone()),
        ("Duration".to_string(), flight.duration.clone()),
        ("Price".to_string(), flight.display_price()),
    ]
}

fn compute_display_item(flight: &FlightRecord, is_selected: bool, cols: usize) -> DisplayItem {
    // Narrow panes drop the route column; the form already shows the city pair.
    let route = if cols < 72 { String::new() } else { flight.route() };
    DisplayItem {
        airline: flight.airline.clone(),
        route,
        departs: flight.departure_time.clone(),
        arrives: flight.arrival_time.clone(),
        duration: flight.duration.clone(),
        price: flight.display_price(),
        is_selected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> AppState {
        let mut state = AppState::new(Catalog::builtin().unwrap(), Theme::default(), TripType::OneWay);
        state.start_search();
        state
    }

    #[test]
    fn focus_cycles_through_visible_fields() {
        let mut state = state();
        assert_eq!(state.focus, Focus::Field(FormField::Source));

        state.focus_next();
        state.focus_next();
        assert_eq!(state.focus, Focus::Field(FormField::DepartureDate));

        state.focus_next();
        assert_eq!(state.focus, Focus::Field(FormField::TripType));

        state.focus_prev();
        assert_eq!(state.focus, Focus::Field(FormField::DepartureDate));
    }

    #[test]
    fn results_join_focus_order_once_present() {
        let mut state = state();
        let flights = vec![state.catalog.get(1).unwrap().clone()];
        state.store.record_search(state.form.clone(), flights);

        state.focus = Focus::Field(FormField::DepartureDate);
        state.focus_next();
        assert_eq!(state.focus, Focus::Results);
    }

    #[test]
    fn selection_wraps_both_ways() {
        let mut state = state();
        let flights = state.catalog.flights().to_vec();
        state.store.record_search(state.form.clone(), flights);

        state.move_selection_up();
        assert_eq!(state.selected_index, 2);
        state.move_selection_down();
        assert_eq!(state.selected_index, 0);
        assert_eq!(state.selected_flight().map(|f| f.id), Some(1));
    }

    #[test]
    fn earlier_return_date_is_raised_on_edit() {
        let mut state = state();
        state.toggle_trip_type().unwrap();
        state.set_field(FormField::DepartureDate, "2025-04-10").unwrap();
        state.set_field(FormField::ReturnDate, "2025-04-02").unwrap();
        assert_eq!(state.form.return_date(), "2025-04-10");

        state.set_field(FormField::DepartureDate, "2025-04-12").unwrap();
        assert_eq!(state.form.return_date(), "2025-04-12");
    }

    #[test]
    fn switching_to_one_way_moves_focus_off_return_date() {
        let mut state = state();
        state.toggle_trip_type().unwrap();
        state.focus = Focus::Field(FormField::ReturnDate);
        state.toggle_trip_type().unwrap();
        assert_eq!(state.form.trip_type(), TripType::OneWay);
        assert_eq!(state.focus, Focus::Field(FormField::DepartureDate));
    }

    #[test]
    fn empty_search_shows_empty_state() {
        let mut state = state();
        state.store.record_search(state.form.clone(), vec![]);
        let vm = state.compute_viewmodel(24, 80);
        let ViewBody::Search(search) = vm.body else {
            panic!("expected search body");
        };
        assert_eq!(
            search.empty_state.map(|e| e.message),
            Some("No flights available".to_string())
        );
        assert!(search.display_items.is_empty());
    }

    #[test]
    fn empty_state_shows_before_first_search() {
        let state = state();
        let ViewBody::Search(search) = state.compute_viewmodel(24, 80).body else {
            panic!("expected search body");
        };
        let empty = search.empty_state.unwrap();
        assert_eq!(empty.message, "No flights available");
        assert_eq!(empty.subtitle, "Fill in the form and press Enter");
    }

    #[test]
    fn window_keeps_selection_visible() {
        let mut state = state();
        let mut flights = Vec::new();
        for id in 0..20 {
            let mut flight = state.catalog.get(1).unwrap().clone();
            flight.id = id;
            flights.push(flight);
        }
        state.store.record_search(state.form.clone(), flights);
        state.focus = Focus::Results;
        state.selected_index = 19;

        let vm = state.compute_viewmodel(20, 80);
        let ViewBody::Search(search) = vm.body else {
            panic!("expected search body");
        };
        assert!(search.display_items.len() < 20);
        assert!(search.display_items[search.selected_index].is_selected);
        assert_eq!(search.selected_index, search.display_items.len() - 1);
    }
}
