//! Text input box.

use crate::ui::helpers::position_cursor;
use crate::ui::layout::INPUT_MARGIN;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::InputBoxInfo;

/// Renders the 3-line bordered input box starting at `row`.
///
/// ```text
/// [margin] ┌──────────────┐ [margin]
/// [margin] │ > SW█        │ [margin]
/// [margin] └──────────────┘ [margin]
/// ```
///
/// Only the tail of the text is shown when it is wider than the box. The
/// border uses `input_border` while focused and `border` otherwise.
///
/// Returns the next available row.
pub fn render_input(row: usize, input: &InputBoxInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(2 * INPUT_MARGIN).max(8);
    let inner_width = box_width - 2;
    let border_color = if input.is_focused {
        &theme.colors.input_border
    } else {
        &theme.colors.border
    };
    let margin = " ".repeat(INPUT_MARGIN);

    position_cursor(row, 1);
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    // " > " prefix plus a cursor cell.
    let text_room = inner_width.saturating_sub(4);
    let shown: String = {
        let count = input.text.chars().count();
        input.text.chars().skip(count.saturating_sub(text_room)).collect()
    };
    let shown_len = shown.chars().count();

    position_cursor(row + 1, 1);
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!(" > ");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    let mut used = shown_len;
    if input.is_focused {
        print!("{}", Theme::bg(&theme.colors.text_normal));
        print!(" ");
        print!("{}", Theme::reset());
        used += 1;
    }
    if shown.is_empty() {
        let placeholder: String = input.placeholder.chars().take(text_room.saturating_sub(used)).collect();
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{placeholder}");
        print!("{}", Theme::reset());
        used += placeholder.chars().count();
    }
    print!("{}", " ".repeat(inner_width.saturating_sub(3 + used)));
    print!("{}", Theme::fg(border_color));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{margin}");
    print!("{}", Theme::fg(border_color));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
