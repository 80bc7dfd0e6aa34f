//! Composable UI component renderers.
//!
//! Each component prints one part of the pane at a row it is given and
//! returns the next free row.
//!
//! # Components
//!
//! - [`header`]: Title and open candidate
//! - [`chips`]: Selected roles with remove glyphs
//! - [`input`]: Bordered text input
//! - [`suggestions`]: Suggestion list with match highlighting
//! - [`footer`]: Keybinding hints or the last error
//! - [`empty`]: Message shown while no candidate is open

mod chips;
mod empty;
mod footer;
mod header;
mod input;
mod suggestions;

pub use empty::render_empty_state;

use crate::ui::helpers::position_cursor;
use crate::ui::layout::{CHIPS_ROW, HEADER_BORDER_ROW, HEADER_ROW, INPUT_FIRST_ROW, SUGGESTIONS_FIRST_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FooterInfo, UIViewModel};

use chips::render_chips;
use footer::render_footer;
use header::render_header;
use input::render_input;
use suggestions::render_suggestions;

/// Renders a horizontal border line at the specified row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the editor layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Chips]
/// [Input box - 3 lines]
/// [Suggestions]
/// [Border]
/// [Footer]
/// ```
///
/// Rows come from [`crate::ui::layout`] so mouse hit-testing matches.
pub fn render_editor(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    render_header(HEADER_ROW, &vm.header, theme, cols);
    render_border(HEADER_BORDER_ROW, &theme.colors.border, cols);
    render_chips(CHIPS_ROW, &vm.chips, theme, cols);
    render_input(INPUT_FIRST_ROW, &vm.input, theme, cols);
    render_suggestions(SUGGESTIONS_FIRST_ROW, &vm.suggestions, theme, cols);

    render_bottom(&vm.footer, theme, cols, rows);
}

/// Renders the empty state layout: header, message and footer.
pub fn render_idle(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    render_header(HEADER_ROW, &vm.header, theme, cols);
    render_border(HEADER_BORDER_ROW, &theme.colors.border, cols);
    if let Some(empty) = &vm.empty_state {
        render_empty_state(empty, theme, cols);
    }

    render_bottom(&vm.footer, theme, cols, rows);
}

fn render_bottom(footer: &FooterInfo, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    // Too short to keep the list clear of the bottom chrome.
    if border_row <= SUGGESTIONS_FIRST_ROW {
        return;
    }

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, footer, theme, cols);
}
