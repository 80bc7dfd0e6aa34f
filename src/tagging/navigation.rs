//! Suggestion list highlight and keyboard navigation.
//!
//! The [`Navigator`] owns the current suggestion list and which entry is
//! highlighted. It is in one of two states:
//!
//! - **Idle**: the list is empty or hidden
//! - **Browsing**: the list is non-empty and the highlight is meaningful
//!
//! # Highlight Arithmetic
//!
//! With `n` suggestions and the highlight as an index where "none" is `-1`:
//!
//! ```text
//! ArrowDown: active = (active + 1) mod n
//! ArrowUp:   active = (active - 1 + n) mod n
//! ```
//!
//! ArrowUp with nothing highlighted therefore lands on `n - 2`, not on the
//! last entry (on `0` when `n == 1`).

use super::suggest::Suggestion;

/// Keys the navigation state machine interprets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    /// Move the highlight down (wraps).
    ArrowDown,
    /// Move the highlight up (wraps).
    ArrowUp,
    /// Commit the highlighted suggestion or the typed text.
    Enter,
    /// Hide the suggestion list.
    Escape,
}

/// Observable state of the navigation state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    /// No suggestion list is shown.
    Idle,
    /// A non-empty suggestion list is shown.
    Browsing,
}

/// Suggestion list plus highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    suggestions: Vec<Suggestion>,
    active: Option<usize>,
}

impl Navigator {
    /// Creates an idle navigator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            suggestions: Vec::new(),
            active: None,
        }
    }

    /// Replaces the suggestion list and clears the highlight.
    pub fn set_suggestions(&mut self, suggestions: Vec<Suggestion>) {
        self.suggestions = suggestions;
        self.active = None;
    }

    /// Hides the suggestion list.
    pub fn dismiss(&mut self) {
        self.suggestions.clear();
        self.active = None;
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> NavState {
        if self.suggestions.is_empty() {
            NavState::Idle
        } else {
            NavState::Browsing
        }
    }

    /// Returns `true` while browsing.
    #[must_use]
    pub fn is_browsing(&self) -> bool {
        self.state() == NavState::Browsing
    }

    /// Moves the highlight down, wrapping to the first entry.
    ///
    /// Returns `false` when idle.
    pub fn move_down(&mut self) -> bool {
        let n = self.suggestions.len();
        if n == 0 {
            return false;
        }
        self.active = Some(self.active.map_or(0, |index| (index + 1) % n));
        true
    }

    /// Moves the highlight up, wrapping to the bottom.
    ///
    /// Returns `false` when idle.
    pub fn move_up(&mut self) -> bool {
        let n = self.suggestions.len();
        if n == 0 {
            return false;
        }
        // (-1 - 1 + n) mod n with nothing highlighted.
        self.active = Some(self.active.map_or((n + n - 2) % n, |index| (index + n - 1) % n));
        true
    }

    /// Highlights the entry at `index` (pointer hover).
    ///
    /// Out-of-range indices are ignored. Returns `true` if the highlight moved.
    pub fn hover(&mut self, index: usize) -> bool {
        if index >= self.suggestions.len() || self.active == Some(index) {
            return false;
        }
        self.active = Some(index);
        true
    }

    /// Index of the highlighted entry, `None` when nothing is highlighted.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The highlighted suggestion, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<&Suggestion> {
        self.active.and_then(|index| self.suggestions.get(index))
    }

    /// The suggestion at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Suggestion> {
        self.suggestions.get(index)
    }

    /// The current suggestion list.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn navigator(count: usize) -> Navigator {
        let mut nav = Navigator::new();
        nav.set_suggestions(
            (0..count)
                .map(|i| Suggestion::CreateNew(format!("s{i}")))
                .collect(),
        );
        nav
    }

    #[test]
    fn down_from_none_lands_on_first_and_wraps() {
        let mut nav = navigator(3);
        nav.move_down();
        assert_eq!(nav.active_index(), Some(0));
        nav.move_down();
        nav.move_down();
        nav.move_down();
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn up_from_none_lands_on_second_to_last() {
        let mut nav = navigator(4);
        nav.move_up();
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn up_from_none_with_single_entry_lands_on_it() {
        let mut nav = navigator(1);
        nav.move_up();
        assert_eq!(nav.active_index(), Some(0));
    }

    #[test]
    fn up_from_first_wraps_to_last() {
        let mut nav = navigator(3);
        nav.move_down();
        nav.move_up();
        assert_eq!(nav.active_index(), Some(2));
    }

    #[test]
    fn keys_are_ignored_while_idle() {
        let mut nav = Navigator::new();
        assert!(!nav.move_down());
        assert!(!nav.move_up());
        assert_eq!(nav.state(), NavState::Idle);
        assert_eq!(nav.active_index(), None);
    }

    #[test]
    fn new_suggestions_reset_the_highlight() {
        let mut nav = navigator(3);
        nav.move_down();
        nav.set_suggestions(vec![Suggestion::CreateNew("x".into())]);
        assert_eq!(nav.active_index(), None);
        assert!(nav.is_browsing());
    }

    #[test]
    fn hover_ignores_out_of_range() {
        let mut nav = navigator(2);
        assert!(nav.hover(1));
        assert!(!nav.hover(5));
        assert_eq!(nav.active_index(), Some(1));
    }
}
