//! Role Tagger: a Zellij plugin for tagging candidates with potential roles.
//!
//! A recruiter opens a candidate and attaches roles from a shared, growable
//! vocabulary through an autocomplete input:
//! - Case-insensitive substring suggestions over the role registry
//! - Keyboard navigation with a "Create" entry for unknown roles
//! - Selected roles shown as removable chips
//! - Persistent state in a JSON key/value document
//! - Fire-and-forget persistence through a Zellij worker thread

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Host of the core
//! │  - Event handling, input modes                      │
//! │  - Notifications → persistence actions              │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Tagging Core  │   │ Storage Layer │   │ Worker Layer  │
//! │ (tagging/)    │   │ (storage/)    │   │ (worker/)     │
//! │ - Registry    │   │ - JSON I/O    │   │ - Persistence │
//! │ - Suggestions │   │ - Notes model │   │ - IPC bridge  │
//! │ - Navigation  │   │ - Backend API │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │
//! ┌─────────────────────────────────────────────────────┐
//! │  UI (ui/), Domain (domain/), Paths (infrastructure/)│
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to an OTLP-JSON file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tagging`]: Registry, selection, suggestions, navigation and the controller
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Tag value type, notes record, errors
//! - [`storage`]: JSON file persistence
//! - [`worker`]: Background worker for persistence
//! - [`ui`]: Terminal rendering with theme support
//! - [`infrastructure`]: Sandbox paths
//! - [`observability`]: OpenTelemetry tracing
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/role-tagger.wasm" {
//!         candidate_id "1042"
//!         data_file "~/.local/share/recruiting/roles.json"
//!         seed_roles "SWE,SE,SRE"
//!         max_suggestions "8"
//!         theme "catppuccin-mocha"
//!         trace_level "debug"
//!     }
//! }
//! ```
//!
//! A running instance is driven with pipes:
//!
//! ```text
//! zellij pipe --name open-candidate -- 1042
//! zellij pipe --name add-role -- "data eng"
//! zellij pipe --name remove-role -- DBE
//! ```
//!
//! # Examples
//!
//! ```rust
//! use role_tagger::{handle_event, initialize, Action, Config, Event, WorkerResponse};
//!
//! let mut state = initialize(&Config::default());
//! handle_event(&mut state, &Event::OpenCandidate { candidate_id: "7".into() })?;
//! handle_event(
//!     &mut state,
//!     &Event::WorkerResponse(WorkerResponse::CandidateLoaded {
//!         candidate_id: "7".into(),
//!         registry: vec!["SWE".into(), "SRE".into()],
//!         roles: vec![],
//!     }),
//! )?;
//!
//! for c in "sre".chars() {
//!     handle_event(&mut state, &Event::Char(c))?;
//! }
//! let (_, actions) = handle_event(&mut state, &Event::Enter)?;
//!
//! assert_eq!(state.controller().selection().labels(), vec!["SRE"]);
//! assert!(matches!(actions[0], Action::PostToWorker(_)));
//! # Ok::<(), role_tagger::TaggerError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod tagging;
pub mod ui;
pub mod worker;

pub use app::{handle_event, Action, AppState, Event, InputMode};
pub use domain::{CandidateNotes, Result, Tag, TaggerError};
pub use tagging::{NavKey, NavState, Notification, Selection, Suggestion, TagController, TagEvent, TagRegistry};
pub use ui::Theme;
pub use worker::{WorkerMessage, WorkerResponse};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Default number of visible suggestion rows.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 6;

/// Plugin configuration parsed from Zellij's configuration system.
#[derive(Debug, Clone)]
pub struct Config {
    /// Candidate opened at startup. Without one the pane shows the empty state
    /// until an `open-candidate` pipe arrives.
    pub candidate_id: Option<String>,

    /// JSON store path, already resolved into the sandbox.
    pub data_file: PathBuf,

    /// Vocabulary written to the store when no registry exists.
    pub seed_roles: Vec<String>,

    /// Visible suggestion rows, at least 1.
    pub max_suggestions: usize,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for tracing. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            candidate_id: None,
            data_file: infrastructure::resolve_data_file(None),
            seed_roles: storage::DEFAULT_SEED_ROLES.iter().map(ToString::to_string).collect(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// # Parsing Rules
    ///
    /// - `candidate_id`: trimmed, ignored when blank
    /// - `data_file`: `~` expanded to `/host`
    /// - `seed_roles`: comma-separated; falls back to the defaults when empty
    /// - `max_suggestions`: positive integer, falls back to 6
    /// - `theme`, `theme_file`, `trace_level`: taken as is
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use role_tagger::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("seed_roles".to_string(), "SWE, SRE,,".to_string());
    /// map.insert("max_suggestions".to_string(), "0".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.seed_roles, vec!["SWE", "SRE"]);
    /// assert_eq!(config.max_suggestions, 6);
    /// assert!(config.candidate_id.is_none());
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let candidate_id = config
            .get("candidate_id")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let seed_roles = config
            .get("seed_roles")
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|r| !r.is_empty())
                    .map(String::from)
                    .collect::<Vec<_>>()
            })
            .filter(|v: &Vec<String>| !v.is_empty())
            .unwrap_or(defaults.seed_roles);

        let max_suggestions = config
            .get("max_suggestions")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(DEFAULT_MAX_SUGGESTIONS);

        Self {
            candidate_id,
            data_file: infrastructure::resolve_data_file(config.get("data_file").map(String::as_str)),
            seed_roles,
            max_suggestions,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Builds the initial [`AppState`] from configuration.
///
/// Loads the theme (file, then name, then the default) and sizes the
/// suggestion list. No candidate is open yet; the shim opens the configured
/// one once permissions are granted.
///
/// # Example
///
/// ```rust
/// use role_tagger::{initialize, Config};
///
/// let config = Config {
///     theme_name: Some("no-such-theme".to_string()),
///     ..Config::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.theme.name, "catppuccin-mocha");
/// assert!(state.candidate_id().is_none());
/// ```
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing role tagger plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                Theme::from_name(theme_name).unwrap_or_else(|| {
                    tracing::debug!(theme_name = %theme_name, "unknown theme, using default");
                    Theme::default()
                })
            })
        },
        |theme_file| {
            Theme::from_file(infrastructure::expand_tilde(theme_file)).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme, config.max_suggestions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_zellij_expands_the_data_file() {
        let mut map = BTreeMap::new();
        map.insert("data_file".to_string(), "~/roles.json".to_string());
        map.insert("candidate_id".to_string(), "  42 ".to_string());

        let config = Config::from_zellij(&map);
        assert_eq!(config.data_file, PathBuf::from("/host/roles.json"));
        assert_eq!(config.candidate_id.as_deref(), Some("42"));
    }

    #[test]
    fn empty_map_yields_defaults() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.seed_roles.len(), storage::DEFAULT_SEED_ROLES.len());
        assert_eq!(config.max_suggestions, DEFAULT_MAX_SUGGESTIONS);
        assert!(config.data_file.ends_with("roles.json"));
    }
}
