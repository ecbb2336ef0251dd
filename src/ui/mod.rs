//! User interface rendering layer.
//!
//! Application state is turned into a [`UIViewModel`] and drawn with ANSI escape
//! sequences by small components that each own a strip of rows.
//!
//! # Modules
//!
//! - [`viewmodel`]: Renderable UI state
//! - [`renderer`]: Top-level rendering entry point
//! - [`components`]: Header, footer, form, table, panels and notice
//! - [`helpers`]: Cursor positioning and width-aware text fitting
//! - [`theme`]: Color schemes and escape sequence generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailPanel, DisplayItem, EmptyState, FieldItem, FooterInfo, HeaderInfo, LandingInfo,
    NoticeInfo, SearchViewModel, StatusLine, UIViewModel, ViewBody,
};
