//! Path helpers for the Zellij plugin sandbox.

use std::path::PathBuf;

/// Directory holding the trace file: `/host/.local/share/zellij/skybook`.
///
/// `/host` is the cwd of the last focused terminal (usually the user's home), so
/// this normally ends up as `~/.local/share/zellij/skybook` on the host.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("skybook")
}

/// Maps a user-supplied path (e.g. the `theme_file` setting) into the sandbox.
///
/// A leading `~` becomes `/host`; anything else is used as given.
///
/// ```
/// use skybook::infrastructure::resolve_host_path;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_host_path("~/themes/dark.toml"), PathBuf::from("/host/themes/dark.toml"));
/// assert_eq!(resolve_host_path("/etc/skybook.toml"), PathBuf::from("/etc/skybook.toml"));
/// ```
#[must_use]
pub fn resolve_host_path(path: &str) -> PathBuf {
    let path = path.trim();
    match path.strip_prefix('~') {
        Some("") => PathBuf::from("/host"),
        Some(rest) if rest.starts_with('/') => PathBuf::from(format!("/host{rest}")),
        _ => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_tilde_is_host_root() {
        assert_eq!(resolve_host_path("~"), PathBuf::from("/host"));
    }

    #[test]
    fn tilde_user_syntax_is_left_alone() {
        assert_eq!(resolve_host_path("~alice/t.toml"), PathBuf::from("~alice/t.toml"));
    }

    #[test]
    fn data_dir_is_under_zellij_share() {
        assert!(get_data_dir().ends_with("zellij/skybook"));
    }
}
