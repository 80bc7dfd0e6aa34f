//! Application state and view model computation.

use crate::app::modes::InputMode;
use crate::tagging::{NavState, Selection, Suggestion, TagController, TagRegistry};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    ChipItem, ChipRow, EmptyState, FooterInfo, HeaderInfo, InputBoxInfo, SuggestionRow, UIViewModel,
};

/// Placeholder shown in the empty input box.
pub const INPUT_PLACEHOLDER: &str = "Add or create a role...";

/// Everything the plugin knows between events.
///
/// The tag controller owns the registry, the selection of the open candidate
/// and the input text. This struct adds what only the pane cares about: which
/// candidate is open, the input mode, the chip cursor and the last worker error.
#[derive(Debug)]
pub struct AppState {
    /// Tagging core for the open candidate.
    pub(crate) controller: TagController,

    /// Candidate being edited, `None` when nothing is open.
    pub(crate) candidate_id: Option<String>,

    /// `true` between requesting a candidate and receiving its roles.
    pub(crate) loading: bool,

    /// `true` once a registry from storage has been adopted.
    pub(crate) registry_loaded: bool,

    /// Admin events received before the registry was loaded.
    pub(crate) deferred: Vec<crate::app::Event>,

    /// Where keystrokes go.
    pub input_mode: InputMode,

    /// Focused chip while in [`InputMode::Chips`].
    pub(crate) chip_cursor: usize,

    /// Most recent worker error, shown in the footer until the next success.
    pub(crate) status: Option<String>,

    /// Visible suggestion rows.
    pub max_suggestions: usize,

    /// Active color theme.
    pub theme: Theme,
}

impl AppState {
    /// Creates an empty state with no candidate open.
    #[must_use]
    pub fn new(theme: Theme, max_suggestions: usize) -> Self {
        Self {
            controller: TagController::default(),
            candidate_id: None,
            loading: false,
            registry_loaded: false,
            deferred: Vec::new(),
            input_mode: InputMode::Typing,
            chip_cursor: 0,
            status: None,
            max_suggestions: max_suggestions.max(1),
            theme,
        }
    }

    /// The tag controller of the open candidate.
    #[must_use]
    pub const fn controller(&self) -> &TagController {
        &self.controller
    }

    /// Candidate being edited.
    #[must_use]
    pub fn candidate_id(&self) -> Option<&str> {
        self.candidate_id.as_deref()
    }

    /// Returns `true` while a candidate's roles are being loaded.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns `true` when a candidate is open and loaded.
    #[must_use]
    pub const fn is_editable(&self) -> bool {
        self.candidate_id.is_some() && !self.loading
    }

    /// Last worker error, if any.
    #[must_use]
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Index of the focused chip in chips mode.
    #[must_use]
    pub const fn chip_cursor(&self) -> usize {
        self.chip_cursor
    }

    /// Starts editing `candidate_id` with an empty selection until its roles
    /// arrive. The registry is kept.
    pub(crate) fn open_candidate(&mut self, candidate_id: &str) {
        let registry = self.controller.registry().clone();
        self.controller = TagController::new(registry, Selection::new());
        self.candidate_id = Some(candidate_id.to_string());
        self.loading = true;
        self.input_mode = InputMode::Typing;
        self.chip_cursor = 0;
    }

    /// Discards the open candidate's selection and input.
    pub(crate) fn close_candidate(&mut self) {
        let registry = self.controller.registry().clone();
        self.controller = TagController::new(registry, Selection::new());
        self.candidate_id = None;
        self.loading = false;
        self.input_mode = InputMode::Typing;
        self.chip_cursor = 0;
    }

    /// Applies loaded roles for the open candidate.
    ///
    /// The stored registry is adopted only if the session has none yet.
    pub(crate) fn finish_loading(&mut self, registry: &[String], roles: &[String]) {
        let registry = if self.registry_loaded {
            self.controller.registry().clone()
        } else {
            self.registry_loaded = true;
            TagRegistry::from_labels(registry)
        };
        self.controller = TagController::new(registry, Selection::from_labels(roles));
        self.loading = false;
    }

    /// Adopts a registry loaded from storage unless one is already in use.
    ///
    /// Returns `true` if the registry was adopted.
    pub(crate) fn adopt_registry(&mut self, registry: &[String]) -> bool {
        if self.registry_loaded {
            return false;
        }
        self.registry_loaded = true;
        self.controller.replace_registry(TagRegistry::from_labels(registry));
        true
    }

    /// Moves the chip cursor one chip left.
    pub(crate) fn chip_left(&mut self) -> bool {
        if self.chip_cursor == 0 {
            return false;
        }
        self.chip_cursor -= 1;
        true
    }

    /// Moves the chip cursor one chip right.
    pub(crate) fn chip_right(&mut self) -> bool {
        if self.chip_cursor + 1 >= self.controller.selection().len() {
            return false;
        }
        self.chip_cursor += 1;
        true
    }

    /// Keeps the chip cursor on an existing chip, leaving chips mode when
    /// none are left.
    pub(crate) fn clamp_chip_cursor(&mut self) {
        let count = self.controller.selection().len();
        if count == 0 {
            self.chip_cursor = 0;
            self.input_mode = InputMode::Typing;
        } else {
            self.chip_cursor = self.chip_cursor.min(count - 1);
        }
    }

    /// Computes the view model for a pane of `rows` × `cols`.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let footer = FooterInfo {
            keybindings: self.keybindings().to_string(),
            status: self.status.clone(),
        };

        let Some(candidate_id) = self.candidate_id.as_deref() else {
            return UIViewModel {
                header: HeaderInfo {
                    title: "Role Tagger".to_string(),
                    subtitle: String::new(),
                },
                chips: ChipRow::default(),
                input: InputBoxInfo::default(),
                suggestions: Vec::new(),
                footer,
                empty_state: Some(EmptyState {
                    message: "No candidate open".to_string(),
                    subtitle: "Pipe `open-candidate` with a candidate id to start tagging".to_string(),
                }),
            };
        };

        let selection = self.controller.selection();
        let subtitle = if self.loading {
            format!("candidate {candidate_id} · loading…")
        } else {
            let noun = if selection.len() == 1 { "role" } else { "roles" };
            format!("candidate {candidate_id} · {} {noun}", selection.len())
        };

        UIViewModel {
            header: HeaderInfo {
                title: "Role Tagger".to_string(),
                subtitle,
            },
            chips: self.chip_row(cols),
            input: InputBoxInfo {
                text: self.controller.input().to_string(),
                placeholder: INPUT_PLACEHOLDER.to_string(),
                is_focused: self.input_mode == InputMode::Typing,
            },
            suggestions: self.suggestion_rows(rows),
            footer,
            empty_state: None,
        }
    }

    fn keybindings(&self) -> &'static str {
        match (self.input_mode, self.controller.state()) {
            _ if self.candidate_id.is_none() => "q/esc: close",
            (InputMode::Chips, _) => "←/→: move | x/del: remove | tab/esc: back to input | q: close",
            (InputMode::Typing, NavState::Browsing) => "↑/↓: navigate | enter: add | esc: dismiss | tab: edit roles",
            (InputMode::Typing, NavState::Idle) => "type to search | enter: add | tab: edit roles | esc: close",
        }
    }

    /// Lays chips out left to right from column 2, hiding those that do not fit.
    fn chip_row(&self, cols: usize) -> ChipRow {
        let selection = self.controller.selection();
        let in_chips_mode = self.input_mode == InputMode::Chips;

        // Room for a trailing "+N" marker.
        let limit = cols.saturating_sub(4);
        let mut column = 2;
        let mut chips = Vec::with_capacity(selection.len());

        for (index, tag) in selection.iter().enumerate() {
            let label = tag.as_str().to_string();
            let width = ChipItem::width_of(&label);
            if column + width > limit {
                break;
            }
            chips.push(ChipItem {
                remove_col: column + width - 2,
                start_col: column,
                label,
                is_focused: in_chips_mode && index == self.chip_cursor,
            });
            column += width + 1;
        }

        ChipRow {
            hidden: selection.len() - chips.len(),
            chips,
        }
    }

    /// Windows the suggestion list so the highlighted entry stays visible.
    fn suggestion_rows(&self, rows: usize) -> Vec<SuggestionRow> {
        let suggestions = self.controller.suggestions();
        let active = self.controller.active_index();

        // Bottom border and footer sit on the last two rows.
        let capacity = self
            .max_suggestions
            .min(rows.saturating_sub(crate::ui::layout::SUGGESTIONS_FIRST_ROW + 2));
        if capacity == 0 {
            return Vec::new();
        }

        let offset = match active {
            Some(index) if index >= capacity => index + 1 - capacity,
            _ => 0,
        };

        let needle = self.controller.input().trim();
        suggestions
            .iter()
            .enumerate()
            .skip(offset)
            .take(capacity)
            .map(|(index, suggestion)| SuggestionRow {
                index,
                label: suggestion.label(),
                is_create: suggestion.is_create(),
                is_active: active == Some(index),
                highlight_ranges: match suggestion {
                    Suggestion::Existing(tag) => crate::ui::helpers::match_ranges(tag.as_str(), needle),
                    Suggestion::CreateNew(_) => Vec::new(),
                },
            })
            .collect()
    }
}
