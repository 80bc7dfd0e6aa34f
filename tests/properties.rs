use proptest::prelude::*;
use role_tagger::tagging::{suggest, NavKey, Selection, Suggestion, TagController, TagEvent, TagRegistry};
use std::collections::HashSet;

/// Short labels over a tiny alphabet so case-insensitive collisions are common.
fn label() -> impl Strategy<Value = String> {
    "[ sSwWeE]{0,4}"
}

fn labels() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(label(), 0..8)
}

fn event() -> impl Strategy<Value = TagEvent> {
    prop_oneof![
        label().prop_map(TagEvent::InputChanged),
        Just(TagEvent::Key(NavKey::ArrowDown)),
        Just(TagEvent::Key(NavKey::ArrowUp)),
        Just(TagEvent::Key(NavKey::Enter)),
        Just(TagEvent::Key(NavKey::Escape)),
        (0_usize..6).prop_map(TagEvent::SuggestionClicked),
        (0_usize..6).prop_map(TagEvent::SuggestionHovered),
        label().prop_map(TagEvent::Remove),
        Just(TagEvent::FocusLost),
    ]
}

fn is_unique_ignoring_case(labels: &[String]) -> bool {
    let mut seen = HashSet::new();
    labels.iter().all(|label| seen.insert(label.to_lowercase()))
}

proptest! {
    #[test]
    fn selected_tags_are_never_suggested(registry in labels(), selection in labels(), input in label()) {
        let registry = TagRegistry::from_labels(&registry);
        let selection = Selection::from_labels(&selection);

        for suggestion in suggest(&input, &selection, &registry) {
            if let Suggestion::Existing(tag) = suggestion {
                prop_assert!(!selection.contains(&tag));
            }
        }
    }

    #[test]
    fn create_is_always_first(registry in labels(), selection in labels(), input in label()) {
        let registry = TagRegistry::from_labels(&registry);
        let selection = Selection::from_labels(&selection);
        let suggestions = suggest(&input, &selection, &registry);

        for (index, suggestion) in suggestions.iter().enumerate() {
            if suggestion.is_create() {
                prop_assert_eq!(index, 0);
            }
        }
    }

    #[test]
    fn selection_and_registry_stay_unique(
        registry in labels(),
        selection in labels(),
        events in prop::collection::vec(event(), 0..40),
    ) {
        let mut controller = TagController::new(
            TagRegistry::from_labels(&registry),
            Selection::from_labels(&selection),
        );

        for event in &events {
            controller.dispatch(event);
            prop_assert!(is_unique_ignoring_case(&controller.selection().labels()));
            prop_assert!(is_unique_ignoring_case(&controller.registry().labels()));
        }
    }

    #[test]
    fn removing_an_absent_tag_changes_nothing(selection in labels(), absent in "[xyz]{1,3}") {
        let mut controller = TagController::new(TagRegistry::new(), Selection::from_labels(&selection));
        let before = controller.selection().clone();

        let (consumed, notifications) = controller.dispatch(&TagEvent::Remove(absent));

        prop_assert!(!consumed);
        prop_assert!(notifications.is_empty());
        prop_assert_eq!(controller.selection(), &before);
    }

    #[test]
    fn creating_an_existing_tag_folds_into_it(registry in prop::collection::vec("[a-d]{1,3}", 1..6), pick in any::<prop::sample::Index>()) {
        let registry = TagRegistry::from_labels(&registry);
        let member = pick.get(registry.as_slice()).clone();
        let mut controller = TagController::new(registry.clone(), Selection::new());

        // Same tag in a different casing, committed without a highlight.
        controller.on_input_changed(&member.as_str().to_uppercase());
        controller.on_key(NavKey::Enter);

        prop_assert_eq!(controller.registry(), &registry);
        prop_assert_eq!(controller.selection().labels(), vec![member.as_str().to_string()]);
    }
}
