//! Placeholder shown while no candidate is open.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::layout::{INPUT_LAST_ROW, INPUT_TEXT_ROW};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message where the input text would sit and the hint below it.
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    centered_line(INPUT_TEXT_ROW, &empty.message, &Theme::fg(&theme.colors.empty_state_fg), cols);

    let hint_style = format!("{}{}", Theme::dim(), Theme::fg(&theme.colors.text_dim));
    centered_line(INPUT_LAST_ROW, &empty.subtitle, &hint_style, cols);
}

fn centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let width = text.chars().count();
    let left = (cols - width) / 2;

    position_cursor(row, 1);
    print!(
        "{style}{}{text}{}{}",
        " ".repeat(left),
        " ".repeat(cols - width - left),
        Theme::reset()
    );
}
