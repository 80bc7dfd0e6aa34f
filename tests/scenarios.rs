use role_tagger::tagging::{suggest, NavKey, NavState, Notification, Selection, Suggestion, TagController, TagRegistry};
use role_tagger::Tag;

fn controller(registry: &[&str], selection: &[&str]) -> TagController {
    TagController::new(TagRegistry::from_labels(registry), Selection::from_labels(selection))
}

fn existing(label: &str) -> Suggestion {
    Suggestion::Existing(Tag::new(label).unwrap())
}

#[test]
fn partial_input_offers_create_first_then_registry_order() {
    let registry = TagRegistry::from_labels(["SWE", "SE"]);
    let suggestions = suggest("s", &Selection::new(), &registry);

    assert_eq!(
        suggestions,
        vec![Suggestion::CreateNew("s".to_string()), existing("SWE"), existing("SE")]
    );
}

#[test]
fn exact_match_suppresses_create() {
    let mut c = controller(&["SWE", "SE"], &[]);
    c.on_input_changed("SWE");

    assert_eq!(c.suggestions(), &[existing("SWE")]);
    assert_eq!(c.state(), NavState::Browsing);
    assert_eq!(c.active_index(), None);
}

#[test]
fn enter_without_highlight_selects_the_exact_match() {
    let mut c = controller(&["SWE", "SE"], &[]);
    c.on_input_changed("SWE");
    let notifications = c.on_key(NavKey::Enter);

    assert_eq!(c.selection().labels(), vec!["SWE"]);
    assert_eq!(c.registry().labels(), vec!["SWE", "SE"]);
    assert_eq!(
        notifications,
        vec![Notification::SelectionChanged(vec![Tag::new("SWE").unwrap()])]
    );
    assert_eq!(c.input(), "");
    assert_eq!(c.state(), NavState::Idle);
}

#[test]
fn enter_on_unknown_text_grows_registry_then_selects() {
    let mut c = controller(&["SWE"], &[]);
    c.on_input_changed("SRE");
    let notifications = c.on_key(NavKey::Enter);

    assert_eq!(c.registry().labels(), vec!["SWE", "SRE"]);
    assert_eq!(c.selection().labels(), vec!["SRE"]);
    assert_eq!(
        notifications,
        vec![
            Notification::RegistryGrew(Tag::new("SRE").unwrap()),
            Notification::SelectionChanged(vec![Tag::new("SRE").unwrap()]),
        ]
    );
}

#[test]
fn remove_only_touches_the_selection() {
    let mut c = controller(&["SWE"], &["SWE"]);
    let notifications = c.on_remove("SWE");

    assert!(c.selection().is_empty());
    assert_eq!(c.registry().labels(), vec!["SWE"]);
    assert_eq!(notifications, vec![Notification::SelectionChanged(vec![])]);
}

#[test]
fn focus_loss_hides_the_list_and_keeps_everything_else() {
    let mut c = controller(&["SWE", "SE"], &["SE"]);
    c.on_input_changed("sw");
    assert_eq!(c.state(), NavState::Browsing);

    c.on_focus_lost();

    assert_eq!(c.state(), NavState::Idle);
    assert!(c.suggestions().is_empty());
    assert_eq!(c.input(), "sw");
    assert_eq!(c.selection().labels(), vec!["SE"]);
}
