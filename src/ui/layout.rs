//! Fixed pane layout and mouse hit-testing.
//!
//! ```text
//! row 1           blank
//! row 2           header
//! row 3           border
//! row 4           chips
//! rows 5-7        input box
//! rows 8..        suggestions
//! row rows-2      border
//! row rows-1      footer
//! ```
//!
//! Rows and columns are 1-indexed like ANSI cursor positions. Zellij reports
//! mouse positions 0-indexed, so the shim adds one before calling
//! [`hit_test`].

use crate::ui::viewmodel::UIViewModel;

/// Row of the title bar.
pub const HEADER_ROW: usize = 2;

/// Row of the border below the header.
pub const HEADER_BORDER_ROW: usize = 3;

/// Row of the selection chips.
pub const CHIPS_ROW: usize = 4;

/// Top border row of the input box.
pub const INPUT_FIRST_ROW: usize = 5;

/// Row holding the input text.
pub const INPUT_TEXT_ROW: usize = 6;

/// Bottom border row of the input box.
pub const INPUT_LAST_ROW: usize = 7;

/// First suggestion row.
pub const SUGGESTIONS_FIRST_ROW: usize = 8;

/// Horizontal margin around the input box and suggestion rows.
pub const INPUT_MARGIN: usize = 2;

/// What lies under a pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// A suggestion; carries its index in the full list.
    Suggestion(usize),
    /// The remove glyph of the chip at this selection index.
    ChipRemove(usize),
    /// Somewhere else inside the control (chips row, input box, open list).
    Control,
    /// Outside the control.
    Outside,
}

/// Resolves a 1-indexed `(row, col)` against the rendered view model.
///
/// # Examples
///
/// ```
/// use role_tagger::app::AppState;
/// use role_tagger::ui::layout::{hit_test, HitTarget, INPUT_TEXT_ROW};
/// use role_tagger::ui::Theme;
///
/// let state = AppState::new(Theme::default(), 6);
/// let vm = state.compute_viewmodel(24, 80);
/// assert_eq!(hit_test(&vm, INPUT_TEXT_ROW, 10), HitTarget::Outside);
/// ```
#[must_use]
pub fn hit_test(vm: &UIViewModel, row: usize, col: usize) -> HitTarget {
    if vm.empty_state.is_some() {
        return HitTarget::Outside;
    }

    if row == CHIPS_ROW {
        return vm
            .chips
            .chips
            .iter()
            .position(|chip| chip.remove_col == col)
            .map_or(HitTarget::Control, HitTarget::ChipRemove);
    }

    if (INPUT_FIRST_ROW..=INPUT_LAST_ROW).contains(&row) {
        return HitTarget::Control;
    }

    if row >= SUGGESTIONS_FIRST_ROW {
        if let Some(suggestion) = vm.suggestions.get(row - SUGGESTIONS_FIRST_ROW) {
            return HitTarget::Suggestion(suggestion.index);
        }
    }

    HitTarget::Outside
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::viewmodel::{ChipItem, ChipRow, FooterInfo, HeaderInfo, InputBoxInfo, SuggestionRow};

    fn viewmodel() -> UIViewModel {
        UIViewModel {
            header: HeaderInfo {
                title: "Role Tagger".to_string(),
                subtitle: String::new(),
            },
            chips: ChipRow {
                chips: vec![
                    ChipItem {
                        label: "SWE".to_string(),
                        start_col: 2,
                        remove_col: 7,
                        is_focused: false,
                    },
                    ChipItem {
                        label: "SRE".to_string(),
                        start_col: 10,
                        remove_col: 15,
                        is_focused: false,
                    },
                ],
                hidden: 0,
            },
            input: InputBoxInfo::default(),
            suggestions: vec![
                SuggestionRow {
                    index: 3,
                    label: "SE".to_string(),
                    is_create: false,
                    is_active: false,
                    highlight_ranges: Vec::new(),
                },
                SuggestionRow {
                    index: 4,
                    label: "SDE".to_string(),
                    is_create: false,
                    is_active: true,
                    highlight_ranges: Vec::new(),
                },
            ],
            footer: FooterInfo {
                keybindings: String::new(),
                status: None,
            },
            empty_state: None,
        }
    }

    #[test]
    fn suggestion_rows_map_to_full_list_indices() {
        let vm = viewmodel();
        assert_eq!(hit_test(&vm, SUGGESTIONS_FIRST_ROW, 5), HitTarget::Suggestion(3));
        assert_eq!(hit_test(&vm, SUGGESTIONS_FIRST_ROW + 1, 5), HitTarget::Suggestion(4));
        assert_eq!(hit_test(&vm, SUGGESTIONS_FIRST_ROW + 2, 5), HitTarget::Outside);
    }

    #[test]
    fn only_the_glyph_removes_a_chip() {
        let vm = viewmodel();
        assert_eq!(hit_test(&vm, CHIPS_ROW, 15), HitTarget::ChipRemove(1));
        assert_eq!(hit_test(&vm, CHIPS_ROW, 12), HitTarget::Control);
        assert_eq!(hit_test(&vm, INPUT_TEXT_ROW, 40), HitTarget::Control);
        assert_eq!(hit_test(&vm, HEADER_ROW, 1), HitTarget::Outside);
    }
}
