use std::collections::BTreeSet;

use course_catalog::selection::SelectionController;
use course_catalog::types::CourseId;

fn keys(ids: &[&str]) -> Vec<CourseId> {
    ids.iter().map(|s| CourseId::new(*s)).collect()
}

#[test]
fn invariant_toggle_parity_per_id() {
    let mut controller = SelectionController::new();

    // CS101 x3, CS201 x2, CS301 x1, interleaved
    let toggles = ["CS101", "CS201", "CS101", "CS301", "CS201", "CS101"];
    for id in toggles {
        controller.toggle_selection(id);
    }

    assert!(controller.is_selected("CS101"));
    assert!(!controller.is_selected("CS201"));
    assert!(controller.is_selected("CS301"));
    assert!(!controller.is_selected("CS999"));
    assert_eq!(controller.selected_count(), 2);
}

#[test]
fn invariant_toggle_does_not_disturb_other_ids() {
    let mut controller = SelectionController::new();
    controller.toggle_selection("CS101");

    for _ in 0..4 {
        controller.toggle_selection("CS201");
        assert!(controller.is_selected("CS101"));
    }
    assert!(!controller.is_selected("CS201"));
}

#[test]
fn invariant_filter_off_shows_everything() {
    let all = keys(&["CS101", "CS150", "CS201", "CS301"]);
    let mut controller = SelectionController::new();

    assert_eq!(controller.visible_keys(&all), all);

    controller.toggle_selection("CS150");
    controller.toggle_selection("CS301");
    assert_eq!(controller.visible_keys(&all), all);

    controller.set_filter(true);
    controller.set_filter(false);
    assert_eq!(controller.visible_keys(&all), all);
}

#[test]
fn invariant_filter_on_is_sorted_intersection() {
    let all = keys(&["CS101", "CS150", "CS201", "CS301", "CS420"]);
    let mut controller = SelectionController::new();
    controller.set_filter(true);

    // Selection order differs from catalog order; one id is not in the catalog
    for id in ["CS420", "CS101", "MATH200", "CS201"] {
        controller.toggle_selection(id);
    }

    let visible = controller.visible_keys(&all);
    assert_eq!(visible, keys(&["CS101", "CS201", "CS420"]));

    let selected: BTreeSet<&CourseId> = controller.selected().collect();
    assert!(visible.iter().all(|id| selected.contains(id)));
    assert!(visible.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn invariant_filter_on_with_empty_selection_is_empty() {
    let all = keys(&["CS101", "CS201"]);
    let mut controller = SelectionController::new();
    controller.set_filter(true);

    assert!(controller.visible_keys(&all).is_empty());
}

#[test]
fn invariant_set_filter_is_idempotent() {
    let all = keys(&["CS101", "CS201", "CS301"]);

    let mut once = SelectionController::new();
    once.toggle_selection("CS201");
    once.set_filter(true);

    let mut twice = once.clone();
    twice.set_filter(true);

    assert_eq!(once, twice);
    assert_eq!(once.visible_keys(&all), twice.visible_keys(&all));
}

#[test]
fn set_filter_leaves_selection_alone() {
    let mut controller = SelectionController::new();
    controller.toggle_selection("CS101");
    controller.set_filter(true);

    assert!(controller.show_only_selected());
    assert!(controller.is_selected("CS101"));
    assert_eq!(controller.selected_count(), 1);
}

#[test]
fn selected_iterates_in_ascending_order() {
    let mut controller = SelectionController::new();
    for id in ["CS301", "CS101", "CS201"] {
        controller.toggle_selection(id);
    }

    let ids: Vec<&str> = controller.selected().map(CourseId::as_str).collect();
    assert_eq!(ids, vec!["CS101", "CS201", "CS301"]);
}
