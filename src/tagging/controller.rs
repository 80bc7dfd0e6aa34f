//! Tag-selection controller.
//!
//! [`TagController`] is a reducer over [`TagEvent`]s. Each call to
//! [`TagController::dispatch`] runs to completion, mutates the controller's own
//! state and returns the [`Notification`]s the host has to persist. The
//! controller never performs I/O.
//!
//! # Commit Rules
//!
//! - `Existing(tag)`: appended to the selection when the registry still holds
//!   it and it is not already selected; otherwise nothing happens
//! - `CreateNew(text)`: if the registry already holds `text` (ignoring case)
//!   the commit folds into `Existing` of that member, otherwise `text` is
//!   appended to the registry and then selected
//! - Enter without a highlight commits the registry member equal to the
//!   trimmed input when there is one that is not yet selected, and
//!   `CreateNew(trimmed input)` otherwise
//!
//! After any commit the input is cleared and the suggestion list is hidden,
//! even when the commit itself turned out to be a no-op.

use super::navigation::{NavKey, NavState, Navigator};
use super::registry::TagRegistry;
use super::selection::Selection;
use super::suggest::{suggest, Suggestion};
use crate::domain::Tag;

/// Inbound commands from the host UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// The input text changed to the given value.
    InputChanged(String),
    /// A navigation key was pressed.
    Key(NavKey),
    /// The suggestion at this index was clicked.
    SuggestionClicked(usize),
    /// The pointer entered the suggestion at this index.
    SuggestionHovered(usize),
    /// Remove this tag from the selection.
    Remove(String),
    /// The pointer went down outside the control.
    FocusLost,
}

/// Outbound changes the host must persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// The selection changed; carries the full new selection.
    SelectionChanged(Vec<Tag>),
    /// A new tag was appended to the registry.
    RegistryGrew(Tag),
}

/// Autocomplete multi-select over a shared tag registry.
///
/// # Examples
///
/// ```
/// use role_tagger::tagging::{NavKey, Notification, Selection, TagController, TagRegistry};
///
/// let mut controller = TagController::new(TagRegistry::from_labels(["SWE"]), Selection::new());
/// controller.on_input_changed("SRE");
/// let notifications = controller.on_key(NavKey::Enter);
///
/// assert_eq!(controller.registry().labels(), vec!["SWE", "SRE"]);
/// assert_eq!(controller.selection().labels(), vec!["SRE"]);
/// assert!(matches!(notifications[0], Notification::RegistryGrew(_)));
/// assert!(controller.input().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct TagController {
    registry: TagRegistry,
    selection: Selection,
    input: String,
    nav: Navigator,
}

impl TagController {
    /// Creates a controller over a registry and an entity's current selection.
    #[must_use]
    pub fn new(registry: TagRegistry, selection: Selection) -> Self {
        Self {
            registry,
            selection,
            input: String::new(),
            nav: Navigator::new(),
        }
    }

    /// Applies one event.
    ///
    /// Returns whether the event was consumed (the host should suppress its
    /// default handling and re-render) together with the notifications to
    /// persist, in the order they must be written.
    pub fn dispatch(&mut self, event: &TagEvent) -> (bool, Vec<Notification>) {
        let _span = tracing::debug_span!("tag_event", event = ?event).entered();

        match event {
            TagEvent::InputChanged(text) => {
                self.input.clone_from(text);
                self.refresh_suggestions();
                (true, Vec::new())
            }
            TagEvent::Key(key) => self.handle_key(*key),
            TagEvent::SuggestionClicked(index) => match self.nav.get(*index).cloned() {
                Some(suggestion) => (true, self.commit(suggestion)),
                None => (false, Vec::new()),
            },
            TagEvent::SuggestionHovered(index) => (self.nav.hover(*index), Vec::new()),
            TagEvent::Remove(text) => match self.selection.remove(text) {
                Some(removed) => {
                    tracing::debug!(tag = %removed, "tag removed from selection");
                    (true, vec![self.selection_changed()])
                }
                None => (false, Vec::new()),
            },
            TagEvent::FocusLost => {
                if self.nav.is_browsing() {
                    self.nav.dismiss();
                    (true, Vec::new())
                } else {
                    (false, Vec::new())
                }
            }
        }
    }

    /// Replaces the input text and recomputes suggestions.
    pub fn on_input_changed(&mut self, text: &str) {
        self.dispatch(&TagEvent::InputChanged(text.to_string()));
    }

    /// Handles a navigation key; returns the notifications to persist.
    pub fn on_key(&mut self, key: NavKey) -> Vec<Notification> {
        self.dispatch(&TagEvent::Key(key)).1
    }

    /// Commits the clicked suggestion; returns the notifications to persist.
    pub fn on_suggestion_clicked(&mut self, index: usize) -> Vec<Notification> {
        self.dispatch(&TagEvent::SuggestionClicked(index)).1
    }

    /// Moves the highlight to the hovered suggestion.
    pub fn on_suggestion_hovered(&mut self, index: usize) {
        self.dispatch(&TagEvent::SuggestionHovered(index));
    }

    /// Removes a tag from the selection; returns the notifications to persist.
    pub fn on_remove(&mut self, tag: &str) -> Vec<Notification> {
        self.dispatch(&TagEvent::Remove(tag.to_string())).1
    }

    /// Hides the suggestion list after an outside pointer press.
    pub fn on_focus_lost(&mut self) {
        self.dispatch(&TagEvent::FocusLost);
    }

    /// Swaps in a registry changed outside the controller (admin flow or a
    /// reload).
    ///
    /// Visible suggestions are recomputed while browsing, which resets the
    /// highlight. The selection is left as is.
    pub fn replace_registry(&mut self, registry: TagRegistry) {
        self.registry = registry;
        if self.nav.is_browsing() {
            self.refresh_suggestions();
        }
    }

    /// Current selection.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Current registry.
    #[must_use]
    pub const fn registry(&self) -> &TagRegistry {
        &self.registry
    }

    /// Current suggestion list.
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        self.nav.suggestions()
    }

    /// Highlighted suggestion index, if any.
    #[must_use]
    pub const fn active_index(&self) -> Option<usize> {
        self.nav.active_index()
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current navigation state.
    #[must_use]
    pub fn state(&self) -> NavState {
        self.nav.state()
    }

    fn handle_key(&mut self, key: NavKey) -> (bool, Vec<Notification>) {
        match key {
            NavKey::ArrowDown => (self.nav.move_down(), Vec::new()),
            NavKey::ArrowUp => (self.nav.move_up(), Vec::new()),
            NavKey::Escape => {
                if self.nav.is_browsing() {
                    self.nav.dismiss();
                    (true, Vec::new())
                } else {
                    (false, Vec::new())
                }
            }
            NavKey::Enter => {
                if let Some(suggestion) = self.nav.highlighted().cloned() {
                    return (true, self.commit(suggestion));
                }

                let trimmed = self.input.trim();
                if trimmed.is_empty() {
                    return (false, Vec::new());
                }

                let suggestion = match self.registry.find(trimmed) {
                    Some(tag) if !self.selection.contains(tag) => Suggestion::Existing(tag.clone()),
                    _ => Suggestion::CreateNew(trimmed.to_string()),
                };
                (true, self.commit(suggestion))
            }
        }
    }

    fn commit(&mut self, suggestion: Suggestion) -> Vec<Notification> {
        let mut notifications = Vec::new();

        match suggestion {
            Suggestion::Existing(tag) => {
                self.select_existing(&tag, &mut notifications);
            }
            Suggestion::CreateNew(text) => {
                if let Some(existing) = self.registry.find(&text).cloned() {
                    tracing::debug!(text = %text, existing = %existing, "create folded into existing tag");
                    self.select_existing(&existing, &mut notifications);
                } else if let Some(tag) = Tag::new(&text) {
                    self.registry.insert(tag.clone());
                    tracing::debug!(tag = %tag, "registry grew");
                    notifications.push(Notification::RegistryGrew(tag.clone()));
                    self.selection.push(tag);
                    notifications.push(self.selection_changed());
                }
            }
        }

        self.input.clear();
        self.nav.dismiss();
        notifications
    }

    fn select_existing(&mut self, tag: &Tag, notifications: &mut Vec<Notification>) {
        let Some(member) = self.registry.find(tag.as_str()).cloned() else {
            tracing::debug!(tag = %tag, "stale suggestion ignored");
            return;
        };
        if self.selection.push(member) {
            notifications.push(self.selection_changed());
        }
    }

    fn selection_changed(&self) -> Notification {
        Notification::SelectionChanged(self.selection.as_slice().to_vec())
    }

    fn refresh_suggestions(&mut self) {
        let suggestions = suggest(&self.input, &self.selection, &self.registry);
        self.nav.set_suggestions(suggestions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(registry: &[&str], selection: &[&str]) -> TagController {
        TagController::new(
            TagRegistry::from_labels(registry),
            Selection::from_labels(selection),
        )
    }

    #[test]
    fn enter_commits_the_highlighted_suggestion() {
        let mut c = controller(&["SWE", "SE"], &[]);
        c.on_input_changed("s");
        c.on_key(NavKey::ArrowDown);
        c.on_key(NavKey::ArrowDown);
        let notifications = c.on_key(NavKey::Enter);

        assert_eq!(c.selection().labels(), vec!["SWE"]);
        assert_eq!(notifications.len(), 1);
        assert_eq!(c.state(), NavState::Idle);
        assert_eq!(c.input(), "");
    }

    #[test]
    fn enter_on_blank_input_is_not_consumed() {
        let mut c = controller(&["SWE"], &[]);
        c.on_input_changed("   ");
        let (consumed, notifications) = c.dispatch(&TagEvent::Key(NavKey::Enter));
        assert!(!consumed);
        assert!(notifications.is_empty());
        assert_eq!(c.input(), "   ");
    }

    #[test]
    fn enter_on_already_selected_exact_match_is_a_noop_commit() {
        let mut c = controller(&["SWE"], &["SWE"]);
        c.on_input_changed("swe");
        let notifications = c.on_key(NavKey::Enter);
        assert!(notifications.is_empty());
        assert_eq!(c.registry().labels(), vec!["SWE"]);
        assert_eq!(c.selection().labels(), vec!["SWE"]);
        assert_eq!(c.input(), "");
    }

    #[test]
    fn create_folds_into_member_added_behind_our_back() {
        let mut c = controller(&["SWE"], &[]);
        c.on_input_changed("sre");
        c.on_key(NavKey::ArrowDown);
        assert_eq!(c.nav.highlighted(), Some(&Suggestion::CreateNew("sre".into())));

        c.registry.insert(Tag::new("SRE").unwrap());

        let notifications = c.on_key(NavKey::Enter);
        assert_eq!(c.registry().labels(), vec!["SWE", "SRE"]);
        assert_eq!(c.selection().labels(), vec!["SRE"]);
        assert_eq!(
            notifications,
            vec![Notification::SelectionChanged(vec![Tag::new("SRE").unwrap()])]
        );
    }

    #[test]
    fn registry_refresh_recomputes_only_while_browsing() {
        let mut c = controller(&["SWE"], &[]);
        c.on_input_changed("sre");
        c.replace_registry(TagRegistry::from_labels(["SWE", "SRE"]));
        assert!(!c.suggestions().iter().any(Suggestion::is_create));

        c.on_focus_lost();
        c.replace_registry(TagRegistry::from_labels(["SWE"]));
        assert_eq!(c.state(), NavState::Idle);
    }

    #[test]
    fn stale_existing_suggestion_is_ignored() {
        let mut c = controller(&["SWE", "SA"], &[]);
        c.on_input_changed("sa");
        c.on_suggestion_hovered(0);
        let mut shrunk = TagRegistry::from_labels(["SWE"]);
        std::mem::swap(&mut c.registry, &mut shrunk);

        let notifications = c.on_key(NavKey::Enter);
        assert!(notifications.is_empty());
        assert!(c.selection().is_empty());
        assert_eq!(c.state(), NavState::Idle);
    }

    #[test]
    fn escape_keeps_input_and_only_applies_while_browsing() {
        let mut c = controller(&["SWE"], &[]);
        let (consumed, _) = c.dispatch(&TagEvent::Key(NavKey::Escape));
        assert!(!consumed);

        c.on_input_changed("sw");
        let (consumed, _) = c.dispatch(&TagEvent::Key(NavKey::Escape));
        assert!(consumed);
        assert_eq!(c.state(), NavState::Idle);
        assert_eq!(c.input(), "sw");
    }

    #[test]
    fn removal_leaves_navigation_alone() {
        let mut c = controller(&["SWE", "SE", "SA"], &["SWE"]);
        c.on_input_changed("s");
        c.on_key(NavKey::ArrowDown);
        let notifications = c.on_remove("swe");

        assert_eq!(notifications, vec![Notification::SelectionChanged(Vec::new())]);
        assert_eq!(c.active_index(), Some(0));
        assert_eq!(c.input(), "s");
    }

    #[test]
    fn clicked_suggestion_out_of_range_is_ignored() {
        let mut c = controller(&["SWE"], &[]);
        c.on_input_changed("s");
        assert!(c.on_suggestion_clicked(9).is_empty());
        assert!(c.selection().is_empty());
        assert_eq!(c.state(), NavState::Browsing);
    }
}
