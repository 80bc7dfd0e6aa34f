//! Selected role chips.
//!
//! Chips are drawn at the columns computed in the view model so the mouse
//! hit-test and the screen always agree.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ChipRow;

/// Renders the chip row, or a dimmed hint when nothing is selected.
///
/// Returns the next available row.
pub fn render_chips(row: usize, chips: &ChipRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(cols));

    if chips.chips.is_empty() && chips.hidden == 0 {
        position_cursor(row, 3);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("No roles yet");
        print!("{}", Theme::reset());
        return row + 1;
    }

    let mut end_col = 2;
    for chip in &chips.chips {
        let bg = if chip.is_focused {
            &theme.colors.chip_focus_bg
        } else {
            &theme.colors.chip_bg
        };

        position_cursor(row, chip.start_col);
        print!("{}", Theme::fg(&theme.colors.chip_fg));
        print!("{}", Theme::bg(bg));
        if chip.is_focused {
            print!("{}", Theme::bold());
        }
        print!("[{} ×]", chip.label);
        print!("{}", Theme::reset());
        end_col = chip.remove_col + 2;
    }

    if chips.hidden > 0 {
        position_cursor(row, end_col + 1);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("+{}", chips.hidden);
        print!("{}", Theme::reset());
    }

    row + 1
}
