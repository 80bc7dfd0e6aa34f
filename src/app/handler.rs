//! Event handling.
//!
//! [`handle_event`] translates pane events into tag controller commands and
//! turns the controller's notifications into persistence requests for the
//! worker. It never performs I/O itself.
//!
//! # Event Types
//!
//! - **Typing**: `Char`, `Backspace`, `KeyUp`, `KeyDown`, `Enter`, `Escape`
//! - **Chips**: `ToggleChips`, `ChipLeft`, `ChipRight`, `RemoveFocusedChip`
//! - **Pointer**: `SuggestionClicked`, `SuggestionHovered`, `ChipRemoveClicked`, `FocusLost`
//! - **Lifecycle**: `OpenCandidate`, `CloseCandidate`, `CloseFocus`
//! - **Admin**: `AddRole`, `RemoveRole`
//! - **Worker**: `WorkerResponse`

use crate::app::modes::InputMode;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Tag;
use crate::tagging::registry::normalize_admin_label;
use crate::tagging::{NavKey, NavState, Notification, TagEvent};
use crate::worker::{WorkerMessage, WorkerResponse};

/// Events from the keyboard, the pointer, pipes and the worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Types a character into the input.
    Char(char),
    /// Deletes the last character of the input.
    Backspace,
    /// Moves the suggestion highlight up.
    KeyUp,
    /// Moves the suggestion highlight down.
    KeyDown,
    /// Commits the highlighted suggestion or the typed text.
    Enter,
    /// Dismisses suggestions, leaves chips mode, or closes the pane.
    Escape,

    /// Switches between typing and chips mode.
    ToggleChips,
    /// Moves the chip cursor left.
    ChipLeft,
    /// Moves the chip cursor right.
    ChipRight,
    /// Removes the chip under the cursor.
    RemoveFocusedChip,

    /// A suggestion row was clicked.
    SuggestionClicked(usize),
    /// The pointer moved over a suggestion row.
    SuggestionHovered(usize),
    /// The remove glyph of the chip at this index was clicked.
    ChipRemoveClicked(usize),
    /// The pointer went down outside the control, or the pane was hidden.
    FocusLost,

    /// Hides the pane.
    CloseFocus,
    /// Starts editing a candidate's roles.
    OpenCandidate {
        /// Candidate to open.
        candidate_id: String,
    },
    /// Stops editing the open candidate.
    CloseCandidate,

    /// Adds a role to the shared vocabulary (admin).
    AddRole(String),
    /// Removes a role from the shared vocabulary (admin).
    RemoveRole(String),

    /// A response from the background worker.
    WorkerResponse(WorkerResponse),
}

/// Processes one event.
///
/// Returns whether the pane should re-render and the actions to execute, in
/// order.
///
/// # Errors
///
/// Currently infallible; the `Result` leaves room for handlers that need to
/// report failures to the shim.
///
/// # Example
///
/// ```
/// use role_tagger::app::{handle_event, Action, AppState, Event};
/// use role_tagger::ui::Theme;
///
/// let mut state = AppState::new(Theme::default(), 6);
/// let (_, actions) = handle_event(&mut state, &Event::OpenCandidate { candidate_id: "42".into() })?;
/// assert!(matches!(actions[0], Action::PostToWorker(_)));
/// # Ok::<(), role_tagger::TaggerError>(())
/// ```
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::Char(c) => {
            if !typing(state) {
                return Ok((false, vec![]));
            }
            let mut text = state.controller.input().to_string();
            text.push(*c);
            state.controller.on_input_changed(&text);
            Ok((true, vec![]))
        }
        Event::Backspace => {
            if !typing(state) || state.controller.input().is_empty() {
                return Ok((false, vec![]));
            }
            let mut text = state.controller.input().to_string();
            text.pop();
            state.controller.on_input_changed(&text);
            Ok((true, vec![]))
        }
        Event::KeyUp => Ok(nav_key(state, NavKey::ArrowUp)),
        Event::KeyDown => Ok(nav_key(state, NavKey::ArrowDown)),
        Event::Enter => Ok(nav_key(state, NavKey::Enter)),
        Event::Escape => {
            if state.input_mode == InputMode::Chips {
                state.input_mode = InputMode::Typing;
                return Ok((true, vec![]));
            }
            if state.is_editable() && state.controller.state() == NavState::Browsing {
                return Ok(nav_key(state, NavKey::Escape));
            }
            tracing::debug!("escape while idle, closing pane");
            Ok((false, vec![Action::CloseFocus]))
        }

        Event::ToggleChips => {
            if !state.is_editable() {
                return Ok((false, vec![]));
            }
            match state.input_mode {
                InputMode::Chips => state.input_mode = InputMode::Typing,
                InputMode::Typing => {
                    if state.controller.selection().is_empty() {
                        return Ok((false, vec![]));
                    }
                    state.controller.on_focus_lost();
                    state.input_mode = InputMode::Chips;
                    state.chip_cursor = state.controller.selection().len() - 1;
                }
            }
            Ok((true, vec![]))
        }
        Event::ChipLeft => Ok((state.input_mode == InputMode::Chips && state.chip_left(), vec![])),
        Event::ChipRight => Ok((state.input_mode == InputMode::Chips && state.chip_right(), vec![])),
        Event::RemoveFocusedChip => {
            if state.input_mode != InputMode::Chips {
                return Ok((false, vec![]));
            }
            let index = state.chip_cursor;
            Ok(remove_chip(state, index))
        }

        Event::SuggestionClicked(index) => {
            if !state.is_editable() {
                return Ok((false, vec![]));
            }
            let notifications = state.controller.on_suggestion_clicked(*index);
            state.input_mode = InputMode::Typing;
            Ok((true, persist(state, notifications)))
        }
        Event::SuggestionHovered(index) => {
            if !state.is_editable() {
                return Ok((false, vec![]));
            }
            let before = state.controller.active_index();
            state.controller.on_suggestion_hovered(*index);
            Ok((state.controller.active_index() != before, vec![]))
        }
        Event::ChipRemoveClicked(index) => {
            if !state.is_editable() {
                return Ok((false, vec![]));
            }
            Ok(remove_chip(state, *index))
        }
        Event::FocusLost => {
            let was_browsing = state.controller.state() == NavState::Browsing;
            state.controller.on_focus_lost();
            Ok((was_browsing, vec![]))
        }

        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::OpenCandidate { candidate_id } => {
            let candidate_id = candidate_id.trim();
            if candidate_id.is_empty() {
                tracing::warn!("ignoring open request without candidate id");
                return Ok((false, vec![]));
            }
            tracing::debug!(candidate_id = %candidate_id, "opening candidate");
            state.open_candidate(candidate_id);
            Ok((
                true,
                vec![Action::PostToWorker(WorkerMessage::load_candidate(candidate_id.to_string()))],
            ))
        }
        Event::CloseCandidate => {
            if state.candidate_id.is_none() {
                return Ok((false, vec![]));
            }
            state.close_candidate();
            Ok((true, vec![]))
        }

        Event::AddRole(raw) => {
            if !state.registry_loaded {
                tracing::debug!(role = %raw, "registry not loaded yet, deferring");
                state.deferred.push(event.clone());
                return Ok((false, vec![]));
            }
            let Some(tag) = normalize_admin_label(raw) else {
                return Ok((false, vec![]));
            };
            let mut registry = state.controller.registry().clone();
            if !registry.insert(tag.clone()) {
                tracing::debug!(role = %tag, "role already in registry");
                return Ok((false, vec![]));
            }
            tracing::info!(role = %tag, "role added to registry");
            let labels = registry.labels();
            state.controller.replace_registry(registry);
            Ok((true, vec![Action::PostToWorker(WorkerMessage::save_registry(labels))]))
        }
        Event::RemoveRole(raw) => {
            if !state.registry_loaded {
                tracing::debug!(role = %raw, "registry not loaded yet, deferring");
                state.deferred.push(event.clone());
                return Ok((false, vec![]));
            }
            let mut registry = state.controller.registry().clone();
            let Some(removed) = registry.remove(raw) else {
                tracing::debug!(role = %raw, "role not in registry");
                return Ok((false, vec![]));
            };
            tracing::info!(role = %removed, "role removed from registry");
            let labels = registry.labels();
            state.controller.replace_registry(registry);
            Ok((true, vec![Action::PostToWorker(WorkerMessage::save_registry(labels))]))
        }

        Event::WorkerResponse(response) => handle_worker_response(state, response),
    }
}

fn typing(state: &AppState) -> bool {
    state.is_editable() && state.input_mode == InputMode::Typing
}

fn nav_key(state: &mut AppState, key: NavKey) -> (bool, Vec<Action>) {
    if !typing(state) {
        return (false, vec![]);
    }
    let (consumed, notifications) = state.controller.dispatch(&TagEvent::Key(key));
    (consumed, persist(state, notifications))
}

fn remove_chip(state: &mut AppState, index: usize) -> (bool, Vec<Action>) {
    let Some(label) = state
        .controller
        .selection()
        .as_slice()
        .get(index)
        .map(|tag| tag.as_str().to_string())
    else {
        return (false, vec![]);
    };

    let notifications = state.controller.on_remove(&label);
    state.clamp_chip_cursor();
    (true, persist(state, notifications))
}

/// Maps controller notifications onto worker requests.
///
/// Registry growth persists the full registry; selection changes persist the
/// open candidate's full selection.
fn persist(state: &AppState, notifications: Vec<Notification>) -> Vec<Action> {
    notifications
        .into_iter()
        .filter_map(|notification| match notification {
            Notification::RegistryGrew(tag) => {
                tracing::debug!(tag = %tag, "persisting grown registry");
                Some(WorkerMessage::save_registry(state.controller.registry().labels()))
            }
            Notification::SelectionChanged(tags) => {
                let candidate_id = state.candidate_id.clone()?;
                Some(WorkerMessage::save_selection(
                    candidate_id,
                    tags.into_iter().map(Tag::into_string).collect(),
                ))
            }
        })
        .map(Action::PostToWorker)
        .collect()
}

fn handle_worker_response(state: &mut AppState, response: &WorkerResponse) -> Result<(bool, Vec<Action>)> {
    match response {
        WorkerResponse::RegistryLoaded { registry } => {
            state.status = None;
            if !state.adopt_registry(registry) {
                return Ok((false, vec![]));
            }
            tracing::debug!(count = registry.len(), "registry adopted");
            replay_deferred(state)
        }
        WorkerResponse::CandidateLoaded {
            candidate_id,
            registry,
            roles,
        } => {
            if state.candidate_id.as_deref() != Some(candidate_id.as_str()) || !state.loading {
                tracing::debug!(candidate_id = %candidate_id, "ignoring stale candidate load");
                return Ok((false, vec![]));
            }
            let first_registry = !state.registry_loaded;
            state.finish_loading(registry, roles);
            state.status = None;
            tracing::debug!(candidate_id = %candidate_id, role_count = roles.len(), "candidate ready");
            if first_registry {
                replay_deferred(state)
            } else {
                Ok((true, vec![]))
            }
        }
        WorkerResponse::Error { message } => {
            tracing::warn!(error = %message, "worker reported an error");
            state.status = Some(message.clone());
            Ok((true, vec![]))
        }
        WorkerResponse::Configured
        | WorkerResponse::RegistrySaved { .. }
        | WorkerResponse::SelectionSaved { .. } => {
            tracing::trace!(response = ?response, "worker acknowledged");
            Ok((state.status.take().is_some(), vec![]))
        }
    }
}

fn replay_deferred(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    let mut actions = Vec::new();
    for event in std::mem::take(&mut state.deferred) {
        let (_, mut replayed) = handle_event(state, &event)?;
        actions.append(&mut replayed);
    }
    Ok((true, actions))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::Theme;

    fn loaded(registry: &[&str], roles: &[&str]) -> AppState {
        let mut state = AppState::new(Theme::default(), 6);
        handle_event(&mut state, &Event::OpenCandidate { candidate_id: "7".into() }).unwrap();
        let response = WorkerResponse::CandidateLoaded {
            candidate_id: "7".into(),
            registry: registry.iter().map(ToString::to_string).collect(),
            roles: roles.iter().map(ToString::to_string).collect(),
        };
        handle_event(&mut state, &Event::WorkerResponse(response)).unwrap();
        state
    }

    fn type_text(state: &mut AppState, text: &str) {
        for c in text.chars() {
            handle_event(state, &Event::Char(c)).unwrap();
        }
    }

    #[test]
    fn escape_while_idle_closes_the_pane() {
        let mut state = loaded(&["SWE"], &[]);
        let (_, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }

    #[test]
    fn escape_while_browsing_only_dismisses() {
        let mut state = loaded(&["SWE"], &[]);
        type_text(&mut state, "sw");
        let (render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.controller().input(), "sw");
    }

    #[test]
    fn stale_candidate_load_is_ignored() {
        let mut state = loaded(&["SWE"], &["SWE"]);
        handle_event(&mut state, &Event::OpenCandidate { candidate_id: "8".into() }).unwrap();
        let stale = WorkerResponse::CandidateLoaded {
            candidate_id: "7".into(),
            registry: vec!["SWE".into()],
            roles: vec!["SWE".into()],
        };
        let (render, _) = handle_event(&mut state, &Event::WorkerResponse(stale)).unwrap();
        assert!(!render);
        assert!(state.is_loading());
        assert!(state.controller().selection().is_empty());
    }

    #[test]
    fn typing_is_ignored_while_loading() {
        let mut state = AppState::new(Theme::default(), 6);
        handle_event(&mut state, &Event::OpenCandidate { candidate_id: "1".into() }).unwrap();
        let (render, _) = handle_event(&mut state, &Event::Char('s')).unwrap();
        assert!(!render);
        assert_eq!(state.controller().input(), "");
    }

    #[test]
    fn chip_removal_leaves_chips_mode_when_empty() {
        let mut state = loaded(&["SWE"], &["SWE"]);
        handle_event(&mut state, &Event::ToggleChips).unwrap();
        assert_eq!(state.input_mode, InputMode::Chips);

        let (_, actions) = handle_event(&mut state, &Event::RemoveFocusedChip).unwrap();
        assert_eq!(
            actions,
            vec![Action::PostToWorker(WorkerMessage::SaveSelection {
                candidate_id: "7".into(),
                tags: vec![],
                trace_context: None,
            })]
        );
        assert_eq!(state.input_mode, InputMode::Typing);
    }
}
