//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the Skybook library and Zellij: it parses the
//! configuration, installs tracing, maps key presses to library events, and
//! carries out the returned actions. All booking logic lives in the library.
//!
//! # Keybindings
//!
//! Everywhere:
//! - `Enter`: continue (search, submit, book, confirm)
//! - `Esc`: back
//! - `q`: close the pane (outside text fields)
//!
//! On the search page:
//! - `Tab` / `Shift+Tab`: next / previous field
//! - `Ctrl+t`: toggle one-way / round-trip
//! - `Space` on the trip type field: toggle
//! - `j`/`k`, `Down`/`Up`, `Ctrl+n`/`Ctrl+p`: move through results

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use skybook::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

struct State {
    app: skybook::AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: skybook::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, and subscribes to
    /// key events. No permissions are needed.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        skybook::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();
        self.app = skybook::initialize(&config);

        subscribe(&[EventType::Key]);
        tracing::debug!("plugin load complete");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let zellij_tile::prelude::Event::Key(key) = event else {
            return false;
        };
        let Some(our_event) = self.map_key_event(&key) else {
            return false;
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::warn!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        skybook::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Maps keyboard input to library events. Letters that double as commands
    /// (`j`, `k`, `q`) are typed as text while a text field has focus.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        let typing = self.app.focus.is_text_entry() && self.app.view == skybook::View::FlightSearch;
        let on_results = self.app.focus == Focus::Results;

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::KeyDown),
                BareKey::Char('p') => Some(Event::KeyUp),
                BareKey::Char('t') => Some(Event::ToggleTripType),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Tab if key.has_modifiers(&[KeyModifier::Shift]) => Event::FocusPrev,
            BareKey::Tab => Event::FocusNext,
            BareKey::Enter => Event::Confirm,
            BareKey::Esc => Event::Back,
            BareKey::Backspace => Event::Backspace,
            BareKey::Down => Event::KeyDown,
            BareKey::Up => Event::KeyUp,
            BareKey::Char('j') if on_results => Event::KeyDown,
            BareKey::Char('k') if on_results => Event::KeyUp,
            BareKey::Char('q') if !typing => Event::CloseFocus,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("hiding plugin pane");
                hide_self();
            }
        }
    }
}
