//! Shared rendering utilities.
//!
//! Everything here works on character indices rather than byte offsets so
//! non-ASCII role names highlight and pad correctly.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Finds where `needle` occurs in `label`, ignoring case.
///
/// Returns at most one `(start, end)` character range, the first occurrence.
/// An empty needle matches nothing.
///
/// # Examples
///
/// ```
/// use role_tagger::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Platform SWE", "swe"), vec![(9, 12)]);
/// assert!(match_ranges("SRE", "").is_empty());
/// assert!(match_ranges("SRE", "x").is_empty());
/// ```
#[must_use]
pub fn match_ranges(label: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // Compare per source char so the returned indices stay in `label` space
    // even when lowercasing changes the char count.
    let haystack: Vec<char> = label.chars().collect();
    let lowered: Vec<Vec<char>> = haystack.iter().map(|c| c.to_lowercase().collect()).collect();

    for start in 0..haystack.len() {
        let mut matched = 0;
        let mut end = start;
        while end < haystack.len() && matched < needle.len() {
            let chunk = &lowered[end];
            if needle.len() - matched < chunk.len() || needle[matched..matched + chunk.len()] != chunk[..] {
                break;
            }
            matched += chunk.len();
            end += 1;
        }
        if matched == needle.len() {
            return vec![(start, end)];
        }
    }

    Vec::new()
}

/// Prints `text` with the given character ranges in the match colors.
///
/// `base_fg` and `base_bg` are re-applied after each highlighted section so
/// the rest of the row keeps its styling.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    base_fg: &str,
    base_bg: Option<&str>,
) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());

        print!("{}", Theme::fg(base_fg));
        if let Some(bg) = base_bg {
            print!("{}", Theme::bg(bg));
        }

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Cuts `text` to at most `max` characters, ending with `…` when shortened.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    let count = text.chars().count();
    if count <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out: String = text.chars().take(max - 1).collect();
    out.push('…');
    out
}
