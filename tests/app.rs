use role_tagger::app::{handle_event, Action, AppState, Event, InputMode};
use role_tagger::ui::{hit_test, HitTarget, Theme};
use role_tagger::worker::{WorkerMessage, WorkerResponse};
use role_tagger::NavState;

fn strings(labels: &[&str]) -> Vec<String> {
    labels.iter().map(ToString::to_string).collect()
}

fn send(state: &mut AppState, event: Event) -> (bool, Vec<Action>) {
    handle_event(state, &event).unwrap()
}

fn open(state: &mut AppState, candidate_id: &str, registry: &[&str], roles: &[&str]) {
    send(
        state,
        Event::OpenCandidate {
            candidate_id: candidate_id.to_string(),
        },
    );
    send(
        state,
        Event::WorkerResponse(WorkerResponse::CandidateLoaded {
            candidate_id: candidate_id.to_string(),
            registry: strings(registry),
            roles: strings(roles),
        }),
    );
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        send(state, Event::Char(c));
    }
}

fn posted(actions: Vec<Action>) -> Vec<WorkerMessage> {
    actions
        .into_iter()
        .filter_map(|action| match action {
            Action::PostToWorker(message) => Some(message),
            Action::CloseFocus => None,
        })
        .collect()
}

#[test]
fn creating_a_role_persists_registry_then_selection() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "42", &["SWE"], &[]);

    type_text(&mut state, "SRE");
    let (render, actions) = send(&mut state, Event::Enter);

    assert!(render);
    assert_eq!(
        posted(actions),
        vec![
            WorkerMessage::SaveRegistry {
                tags: strings(&["SWE", "SRE"]),
                trace_context: None,
            },
            WorkerMessage::SaveSelection {
                candidate_id: "42".to_string(),
                tags: strings(&["SRE"]),
                trace_context: None,
            },
        ]
    );
}

#[test]
fn arrow_navigation_commits_the_highlighted_role() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "1", &["SWE", "SE", "CLOUD SWE"], &[]);

    type_text(&mut state, "sw");
    // [Create "sw", SWE, CLOUD SWE]; up from nothing lands on n - 2.
    send(&mut state, Event::KeyUp);
    assert_eq!(state.controller().active_index(), Some(1));

    let (_, actions) = send(&mut state, Event::Enter);
    assert_eq!(state.controller().selection().labels(), vec!["SWE"]);
    assert_eq!(posted(actions).len(), 1);
    assert_eq!(state.controller().input(), "");
}

#[test]
fn admin_edits_wait_for_the_stored_registry() {
    let mut state = AppState::new(Theme::default(), 6);

    let (render, actions) = send(&mut state, Event::AddRole(" data eng ".to_string()));
    assert!(!render);
    assert!(actions.is_empty());

    let (_, actions) = send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::RegistryLoaded {
            registry: strings(&["SWE", "SE"]),
        }),
    );

    assert_eq!(
        posted(actions),
        vec![WorkerMessage::SaveRegistry {
            tags: strings(&["SWE", "SE", "DATA ENG"]),
            trace_context: None,
        }]
    );
    assert_eq!(state.controller().registry().labels(), vec!["SWE", "SE", "DATA ENG"]);
}

#[test]
fn admin_removal_leaves_selections_alone() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "5", &["SWE", "DBE"], &["DBE"]);

    let (_, actions) = send(&mut state, Event::RemoveRole("dbe".to_string()));

    assert_eq!(
        posted(actions),
        vec![WorkerMessage::SaveRegistry {
            tags: strings(&["SWE"]),
            trace_context: None,
        }]
    );
    assert_eq!(state.controller().selection().labels(), vec!["DBE"]);
}

#[test]
fn admin_add_refreshes_open_suggestions() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "5", &["SWE"], &[]);
    type_text(&mut state, "s");
    send(&mut state, Event::KeyDown);
    assert_eq!(state.controller().active_index(), Some(0));

    send(&mut state, Event::AddRole("sre".to_string()));

    let labels: Vec<String> = state.controller().suggestions().iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Create \"s\"", "SWE", "SRE"]);
    assert_eq!(state.controller().active_index(), None);
}

#[test]
fn reopening_keeps_the_session_registry() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "1", &["SWE"], &[]);
    type_text(&mut state, "SRE");
    send(&mut state, Event::Enter);

    // The worker answers from a store that has not seen the new role yet.
    open(&mut state, "2", &["SWE"], &["SWE"]);

    assert_eq!(state.controller().registry().labels(), vec!["SWE", "SRE"]);
    assert_eq!(state.controller().selection().labels(), vec!["SWE"]);
}

#[test]
fn clicks_resolve_through_the_rendered_layout() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "9", &["SWE", "SE"], &["SE"]);
    type_text(&mut state, "sw");

    let vm = state.compute_viewmodel(24, 80);
    let row = role_tagger::ui::layout::SUGGESTIONS_FIRST_ROW + 1;
    let HitTarget::Suggestion(index) = hit_test(&vm, row, 10) else {
        panic!("expected a suggestion under the pointer");
    };

    let (_, actions) = send(&mut state, Event::SuggestionClicked(index));
    assert_eq!(state.controller().selection().labels(), vec!["SE", "SWE"]);
    assert_eq!(posted(actions).len(), 1);

    let vm = state.compute_viewmodel(24, 80);
    let chip = &vm.chips.chips[0];
    assert_eq!(chip.label, "SE");
    let target = hit_test(&vm, role_tagger::ui::layout::CHIPS_ROW, chip.remove_col);
    assert_eq!(target, HitTarget::ChipRemove(0));

    send(&mut state, Event::ChipRemoveClicked(0));
    assert_eq!(state.controller().selection().labels(), vec!["SWE"]);
}

#[test]
fn focus_loss_only_hides_the_list() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "3", &["SWE"], &[]);
    type_text(&mut state, "sw");

    let (render, actions) = send(&mut state, Event::FocusLost);
    assert!(render);
    assert!(actions.is_empty());
    assert_eq!(state.controller().state(), NavState::Idle);
    assert_eq!(state.controller().input(), "sw");
}

#[test]
fn chips_mode_moves_and_removes() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "3", &["SWE", "SE", "SA"], &["SWE", "SE", "SA"]);

    send(&mut state, Event::ToggleChips);
    assert_eq!(state.input_mode, InputMode::Chips);
    assert_eq!(state.chip_cursor(), 2);

    send(&mut state, Event::ChipLeft);
    send(&mut state, Event::ChipLeft);
    let (render, _) = send(&mut state, Event::ChipLeft);
    assert!(!render);

    send(&mut state, Event::RemoveFocusedChip);
    assert_eq!(state.controller().selection().labels(), vec!["SE", "SA"]);
    assert_eq!(state.chip_cursor(), 0);

    // Characters are ignored outside typing mode.
    send(&mut state, Event::Char('x'));
    assert_eq!(state.controller().input(), "");

    send(&mut state, Event::Escape);
    assert_eq!(state.input_mode, InputMode::Typing);
}

#[test]
fn worker_errors_show_until_the_next_success() {
    let mut state = AppState::new(Theme::default(), 6);
    open(&mut state, "3", &["SWE"], &[]);

    send(
        &mut state,
        Event::WorkerResponse(WorkerResponse::Error {
            message: "save selection: disk full".to_string(),
        }),
    );
    assert_eq!(state.status(), Some("save selection: disk full"));
    assert_eq!(
        state.compute_viewmodel(24, 80).footer.status.as_deref(),
        Some("save selection: disk full")
    );

    let (render, _) = send(&mut state, Event::WorkerResponse(WorkerResponse::RegistrySaved { count: 1 }));
    assert!(render);
    assert_eq!(state.status(), None);
}

#[test]
fn empty_state_until_a_candidate_is_opened() {
    let state = AppState::new(Theme::default(), 6);
    let vm = state.compute_viewmodel(24, 80);

    assert!(vm.empty_state.is_some());
    assert!(vm.suggestions.is_empty());
}

#[test]
fn suggestion_window_follows_the_highlight() {
    let mut state = AppState::new(Theme::default(), 2);
    open(&mut state, "3", &["SA", "SB", "SC", "SD"], &[]);
    type_text(&mut state, "s");

    for _ in 0..4 {
        send(&mut state, Event::KeyDown);
    }
    // Highlight on index 3 of [Create, SA, SB, SC, SD] with two visible rows.
    let vm = state.compute_viewmodel(24, 80);
    let indices: Vec<usize> = vm.suggestions.iter().map(|row| row.index).collect();
    assert_eq!(indices, vec![2, 3]);
    assert!(vm.suggestions[1].is_active);
    assert_eq!(vm.suggestions[1].highlight_ranges, vec![(0, 1)]);
}
