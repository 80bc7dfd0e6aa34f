//! Path handling inside the Zellij sandbox.
//!
//! `/host` is the sandbox view of the directory Zellij was started from, which
//! is normally the user's home directory. Paths from user configuration are
//! written with `~` and translated here.

use std::path::PathBuf;

/// File name of the store inside [`get_data_dir`].
pub const DEFAULT_DATA_FILE: &str = "roles.json";

/// Returns the plugin's data directory, `/host/.local/share/zellij/role-tagger`.
///
/// The JSON store and the trace file live here unless configured otherwise.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("role-tagger")
}

/// Resolves the configured store path, defaulting to `roles.json` in the data
/// directory.
///
/// # Examples
///
/// ```
/// use role_tagger::infrastructure::resolve_data_file;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_data_file(Some("~/notes/roles.json")), PathBuf::from("/host/notes/roles.json"));
/// assert!(resolve_data_file(None).ends_with("role-tagger/roles.json"));
/// ```
#[must_use]
pub fn resolve_data_file(configured: Option<&str>) -> PathBuf {
    match configured.map(str::trim).filter(|path| !path.is_empty()) {
        Some(path) => PathBuf::from(expand_tilde(path)),
        None => get_data_dir().join(DEFAULT_DATA_FILE),
    }
}

/// Maps `~` and `~/...` onto `/host`.
///
/// # Examples
///
/// ```
/// use role_tagger::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/roles.json"), "/host/roles.json");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/tmp/roles.json"), "/tmp/roles.json");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

/// Shows a sandbox path the way the user sees it on the host, with `~`.
///
/// # Examples
///
/// ```
/// use role_tagger::infrastructure::strip_host_prefix;
///
/// assert_eq!(strip_host_prefix("/host/.local/share/x"), "~/.local/share/x");
/// assert_eq!(strip_host_prefix("/tmp/x"), "/tmp/x");
/// ```
#[must_use]
pub fn strip_host_prefix(path: &str) -> String {
    match path.strip_prefix("/host") {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => format!("~{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_user_syntax_is_left_alone() {
        assert_eq!(expand_tilde("~alice/roles.json"), "~alice/roles.json");
    }

    #[test]
    fn blank_configured_path_uses_default() {
        assert_eq!(resolve_data_file(Some("  ")), get_data_dir().join(DEFAULT_DATA_FILE));
    }

    #[test]
    fn host_lookalike_prefix_is_kept() {
        assert_eq!(strip_host_prefix("/hostile/file"), "/hostile/file");
    }
}
