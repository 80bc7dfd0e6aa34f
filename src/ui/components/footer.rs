//! Footer component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer help bar at the specified row.
///
/// Keybinding hints are centered and dimmed. A worker error replaces them
/// until the next successful response.
///
/// # Truncation
///
/// Text wider than the pane is cut with an ellipsis so narrow panes keep
/// their layout.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    let (text, color) = footer.status.as_ref().map_or_else(
        || (truncate(&footer.keybindings, cols), &theme.colors.text_dim),
        |status| (truncate(&format!("error: {status}"), cols), &theme.colors.error_fg),
    );

    let text_len = text.chars().count();
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{text}");
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
