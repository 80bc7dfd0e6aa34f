//! Header component renderer.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title on the left and the subtitle right-aligned on `row`.
///
/// The subtitle is truncated first when the pane is too narrow for both.
///
/// Returns the next available row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let title = truncate(&header.title, cols.saturating_sub(2));
    let title_len = title.chars().count();

    // One space of margin on each side and at least two between the parts.
    let room = cols.saturating_sub(title_len + 4);
    let subtitle = truncate(&header.subtitle, room);
    let subtitle_len = subtitle.chars().count();

    position_cursor(row, 1);
    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!(" ");
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{title}");
    print!("{}", Theme::reset());

    if let Some(bg) = &theme.colors.header_bg {
        print!("{}", Theme::bg(bg));
    }
    print!("{}", " ".repeat(cols.saturating_sub(title_len + subtitle_len + 2)));
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{subtitle} ");
    print!("{}", Theme::reset());
    row + 1
}
