//! Suggestion list renderer.

use crate::ui::helpers::{self, position_cursor, truncate};
use crate::ui::layout::INPUT_MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SuggestionRow;

/// Renders the visible suggestion rows starting at `row`.
///
/// The highlighted row gets the selection colors across its full width.
/// Matching characters of existing roles are highlighted unless the row is
/// active; the create sentinel uses `create_fg`.
///
/// Returns the next available row.
pub fn render_suggestions(row: usize, suggestions: &[SuggestionRow], theme: &Theme, cols: usize) -> usize {
    let width = cols.saturating_sub(2 * INPUT_MARGIN);
    let mut current_row = row;

    for suggestion in suggestions {
        position_cursor(current_row, INPUT_MARGIN + 1);

        let (fg, bg) = if suggestion.is_active {
            (&theme.colors.selection_fg, Some(theme.colors.selection_bg.as_str()))
        } else if suggestion.is_create {
            (&theme.colors.create_fg, None)
        } else {
            (&theme.colors.text_normal, None)
        };

        print!("{}", Theme::fg(fg));
        if let Some(bg) = bg {
            print!("{}", Theme::bg(bg));
        }

        let marker = if suggestion.is_create { " + " } else { "   " };
        print!("{marker}");

        let label = truncate(&suggestion.label, width.saturating_sub(4));
        if suggestion.is_active {
            print!("{label}");
        } else {
            helpers::render_highlighted_text(&label, &suggestion.highlight_ranges, theme, fg, bg);
        }

        print!("{}", " ".repeat(width.saturating_sub(3 + label.chars().count())));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
