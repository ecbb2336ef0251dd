//! Skybook: a flight search and booking demo as a Zellij plugin.
//!
//! The plugin walks through four pages: a landing page, a search page where a
//! trip is described and matched against a fixed catalog, a booking page for the
//! chosen flight, and a confirmation page. Nothing leaves the plugin: there is no
//! payment, persistence, or network access.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs, feature "plugin")     │  ← Key mapping
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Page flow
//! │  - Event handling, focus, navigation                │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search        │   │ Store         │
//! │ (ui/)         │   │ (search/)     │   │ (store/)      │
//! │ - Rendering   │   │ - Form model  │   │ - Events      │
//! │ - Theming     │   │ - Validation  │   │ - Reducer     │
//! │ - Components  │   │ - Matching    │   │ - Results     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Infrastructure                            │
//! │  - Flight record, catalog, errors (domain/)         │
//! │  - Sandbox paths (infrastructure/)                  │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing + OpenTelemetry, OTLP/JSON file export   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/skybook.wasm" {
//!         theme "catppuccin-latte"
//!         trip_type "round-trip"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! # Library Usage
//!
//! ```rust
//! use skybook::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! for event in [Event::Confirm, Event::Char('G'), Event::Char('o'), Event::Char('a')] {
//!     let (_render, _actions) = handle_event(&mut state, &event)?;
//! }
//! assert_eq!(state.form.source(), "Goa");
//! # Ok::<(), skybook::SkybookError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod search;
pub mod store;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus, View};
pub use domain::{Catalog, FlightRecord, Result, SkybookError};
pub use search::TripType;
pub use ui::Theme;

use std::collections::BTreeMap;

/// Plugin configuration parsed from Zellij's configuration map.
///
/// ```kdl
/// plugin location="file:/path/to/skybook.wasm" {
///     theme "catppuccin-mocha"
///     theme_file "~/.config/skybook/theme.toml"
///     trip_type "one-way"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file. `~` refers to the host home directory.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`.
    pub trace_level: Option<String>,

    /// Trip type a new search starts with: `one-way` (default) or `round-trip`.
    pub trip_type: Option<String>,
}

impl Config {
    /// Reads the known keys from Zellij's map; blank values count as unset and
    /// unknown keys are ignored.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use skybook::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "catppuccin-frappe".to_string());
    /// map.insert("trace_level".to_string(), "  ".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme_name.as_deref(), Some("catppuccin-frappe"));
    /// assert_eq!(config.trace_level, None);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            theme_name: get("theme"),
            theme_file: get("theme_file"),
            trace_level: get("trace_level"),
            trip_type: get("trip_type"),
        }
    }

    /// The configured default trip type.
    ///
    /// # Errors
    ///
    /// Returns [`SkybookError::Config`] if `trip_type` is set to something other
    /// than `one-way` or `round-trip`.
    pub fn default_trip_type(&self) -> Result<TripType> {
        self.trip_type.as_deref().map_or(Ok(TripType::default()), |value| {
            value
                .parse()
                .map_err(|e| SkybookError::Config(format!("trip_type: {e}")))
        })
    }

    /// Resolves the theme: `theme_file`, then `theme`, then Catppuccin Mocha.
    ///
    /// # Errors
    ///
    /// Returns the theme file's I/O or parse error, or [`SkybookError::Config`] for
    /// an unknown built-in theme name.
    pub fn theme(&self) -> Result<Theme> {
        if let Some(file) = &self.theme_file {
            return Theme::from_file(infrastructure::resolve_host_path(file));
        }
        match &self.theme_name {
            Some(name) => Theme::from_name(name)
                .ok_or_else(|| SkybookError::Config(format!("unknown theme '{name}'"))),
            None => Ok(Theme::default()),
        }
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// Every configuration problem falls back to a default and is logged, so the
/// plugin always opens. If the embedded catalog fails to parse the plugin runs
/// with no flights and every search finds nothing.
///
/// Call [`observability::init_tracing`] first for the fallbacks to be recorded.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing skybook plugin");

    let theme = config.theme().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "failed to load theme, using default");
        Theme::default()
    });

    let trip_type = config.default_trip_type().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid trip type setting, using one-way");
        TripType::default()
    });

    let catalog = Catalog::builtin().unwrap_or_else(|e| {
        tracing::error!(error = %e, "failed to load flight catalog");
        Catalog::empty()
    });

    tracing::info!(
        theme = %theme.name,
        trip_type = %trip_type,
        flight_count = catalog.len(),
        "skybook initialized"
    );

    AppState::new(catalog, theme, trip_type)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_is_default_config() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn round_trip_default_is_honoured() {
        let config = Config::from_zellij(&map(&[("trip_type", "round-trip")]));
        assert_eq!(config.default_trip_type().unwrap(), TripType::RoundTrip);

        let state = initialize(&config);
        assert_eq!(state.form.trip_type(), TripType::RoundTrip);
    }

    #[test]
    fn bad_trip_type_is_a_config_error_and_falls_back() {
        let config = Config::from_zellij(&map(&[("trip_type", "multi-city")]));
        assert!(matches!(config.default_trip_type(), Err(SkybookError::Config(_))));
        assert_eq!(initialize(&config).default_trip_type, TripType::OneWay);
    }

    #[test]
    fn unknown_theme_name_falls_back_to_mocha() {
        let config = Config::from_zellij(&map(&[("theme", "solarized")]));
        assert!(config.theme().is_err());
        assert_eq!(initialize(&config).theme.name, "catppuccin-mocha");
    }

    #[test]
    fn theme_file_wins_over_theme_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let latte = Theme::from_name("catppuccin-latte").unwrap();
        file.write_all(toml::to_string(&latte).unwrap().as_bytes()).unwrap();

        let config = Config {
            theme_name: Some("catppuccin-frappe".to_string()),
            theme_file: Some(file.path().display().to_string()),
            ..Config::default()
        };
        assert_eq!(config.theme().unwrap(), latte);
    }

    #[test]
    fn initialize_loads_builtin_catalog_on_landing() {
        let state = initialize(&Config::default());
        assert_eq!(state.catalog.len(), 3);
        assert_eq!(state.view, View::Landing);
    }
}
