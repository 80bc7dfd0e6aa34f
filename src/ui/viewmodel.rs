//! View model types representing renderable UI state.
//!
//! View models are computed by [`AppState::compute_viewmodel`] and consumed
//! by the renderer and by mouse hit-testing. They carry no logic, only
//! display-ready data with positions already resolved.
//!
//! [`AppState::compute_viewmodel`]: crate::app::AppState::compute_viewmodel
//!
//! # Example
//!
//! ```rust
//! use role_tagger::ui::viewmodel::{ChipItem, ChipRow};
//!
//! let chip = ChipItem {
//!     label: "SWE".to_string(),
//!     start_col: 2,
//!     remove_col: 2 + ChipItem::width_of("SWE") - 2,
//!     is_focused: false,
//! };
//! let row = ChipRow { chips: vec![chip], hidden: 0 };
//! assert_eq!(row.chips[0].remove_col, 7);
//! ```

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    /// Title bar.
    pub header: HeaderInfo,

    /// Selected roles of the open candidate.
    pub chips: ChipRow,

    /// The text input.
    pub input: InputBoxInfo,

    /// Visible window of the suggestion list; empty while idle.
    pub suggestions: Vec<SuggestionRow>,

    /// Keybinding hints and status line.
    pub footer: FooterInfo,

    /// Shown instead of the editor when no candidate is open.
    pub empty_state: Option<EmptyState>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,

    /// Open candidate and role count, empty when nothing is open.
    pub subtitle: String,
}

/// Laid out selection chips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChipRow {
    /// Chips that fit on the row, in selection order.
    pub chips: Vec<ChipItem>,

    /// Number of trailing chips that did not fit.
    pub hidden: usize,
}

/// One selected role, rendered as `[label ×]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipItem {
    /// Role text.
    pub label: String,

    /// Column of the opening bracket (1-indexed).
    pub start_col: usize,

    /// Column of the `×` glyph (1-indexed).
    pub remove_col: usize,

    /// Whether the chip cursor is on this chip.
    pub is_focused: bool,
}

impl ChipItem {
    /// Rendered width of a chip for `label`, brackets and glyph included.
    #[must_use]
    pub fn width_of(label: &str) -> usize {
        label.chars().count() + 4
    }
}

/// Text input display information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBoxInfo {
    /// Current input text.
    pub text: String,

    /// Shown dimmed while the input is empty.
    pub placeholder: String,

    /// Whether keystrokes go to the input.
    pub is_focused: bool,
}

/// One visible suggestion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionRow {
    /// Index into the full suggestion list.
    pub index: usize,

    /// Display text.
    pub label: String,

    /// Whether this is the create sentinel.
    pub is_create: bool,

    /// Whether this row is highlighted.
    pub is_active: bool,

    /// Character ranges matching the input, `(start, end)` with `end` exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the current mode.
    pub keybindings: String,

    /// Last worker error; replaces the keybindings when present.
    pub status: Option<String>,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Primary message.
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}
