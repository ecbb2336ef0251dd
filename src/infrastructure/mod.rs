//! Sandbox path handling.
//!
//! Zellij mounts the host filesystem under `/host` inside the plugin sandbox, so
//! user-supplied paths and the plugin's own data directory are resolved here.

pub mod paths;

pub use paths::{get_data_dir, resolve_host_path};
