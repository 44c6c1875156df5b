use super::*;
use crate::OverlayAction;

#[test]
fn test_begin_editing_notifies_delegate() {
    let mut h = Harness::new();
    assert!(!h.ctl.is_editing());
    h.ctl.begin_editing();
    assert!(h.ctl.is_editing());
    assert_eq!(h.log.lock().unwrap().began_editing, 1);
}

#[test]
fn test_should_end_editing_commits_and_allows() {
    let mut h = with_suggestion("bra", "brave.com");
    let resp = h.ctl.should_end_editing();
    assert!(resp.proceed);
    assert_eq!(h.ctl.committed_text(), "brave.com");
    h.ctl.end_editing();
    assert!(!h.ctl.is_editing());
}

#[test]
fn test_should_return_commits_then_asks_delegate() {
    let mut h = Harness::with_answers(false, true);
    h.ctl.begin_editing();
    type_string(&mut h.ctl, "bra");
    h.ctl.set_suggestion(Some("brave.com"));

    let resp = h.ctl.should_return();
    assert!(!resp.proceed);
    assert_eq!(h.ctl.committed_text(), "brave.com");
    assert_eq!(resp.text.as_deref(), Some("brave.com"));
    assert_eq!(h.log.lock().unwrap().return_queries, 1);
}

#[test]
fn test_should_clear_removes_then_asks_delegate() {
    let mut h = Harness::with_answers(true, false);
    h.ctl.begin_editing();
    type_string(&mut h.ctl, "bra");
    h.ctl.set_suggestion(Some("brave.com"));

    let resp = h.ctl.should_clear();
    assert!(!resp.proceed);
    assert_eq!(resp.overlay, OverlayAction::Hide);
    assert_eq!(h.ctl.committed_text(), "bra");
    assert!(!h.ctl.is_selection_active());
    assert_eq!(h.log.lock().unwrap().clear_queries, 1);
}

#[test]
fn test_vetoed_clear_shows_caret() {
    let mut h = Harness::with_answers(true, false);
    h.ctl.begin_editing();
    type_string(&mut h.ctl, "bra");
    h.ctl.set_suggestion(Some("brave.com"));
    assert!(!h.ctl.caret_rect_visible());

    let resp = h.ctl.should_clear();
    assert!(!resp.proceed);
    assert!(!resp.caret_hidden);
    assert!(h.ctl.caret_rect_visible());
}

#[test]
fn test_queries_default_to_true_without_delegate() {
    let clock = std::sync::Arc::new(urlbar_core::debounce::ManualClock::new());
    let mut ctl = AutocompleteController::with_clock(clock, QUIET);
    ctl.begin_editing();
    assert!(ctl.should_return().proceed);
    assert!(ctl.should_clear().proceed);
}

#[test]
fn test_caret_rect_follows_hide_flag() {
    let mut h = with_suggestion("bra", "brave.com");
    assert!(!h.ctl.caret_rect_visible());
    h.ctl.apply_completion();
    assert!(h.ctl.caret_rect_visible());
}

#[test]
fn test_end_editing_resets_composition() {
    let mut h = Harness::editing();
    h.ctl.will_set_marked_text(Some("に"));
    h.ctl.end_editing();
    assert!(!h.ctl.is_composing());
}

#[test]
fn test_end_editing_without_commit_drops_suggestion() {
    let mut h = with_suggestion("bra", "brave.com");
    let resp = h.ctl.end_editing();
    assert_eq!(resp.overlay, OverlayAction::Hide);
    assert_eq!(h.ctl.committed_text(), "bra");
    assert!(!h.ctl.hide_cursor());
}
