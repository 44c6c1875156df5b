use super::*;
use crate::{OverlayAction, Selection};

#[test]
fn test_left_with_suggestion_applies_and_goes_to_start() {
    let mut h = with_suggestion("bra", "brave.com");
    let resp = h.ctl.move_cursor_left();
    assert_eq!(h.ctl.committed_text(), "brave.com");
    assert_eq!(h.ctl.selection(), Selection::caret(0));
    assert_eq!(resp.selection, Some(Selection::caret(0)));
    assert_eq!(resp.overlay, OverlayAction::Hide);
}

#[test]
fn test_right_with_suggestion_applies_and_goes_to_end() {
    let mut h = with_suggestion("bra", "brave.com");
    let resp = h.ctl.move_cursor_right();
    assert_eq!(h.ctl.committed_text(), "brave.com");
    assert_eq!(resp.selection, Some(Selection::caret(9)));
    assert!(!h.ctl.hide_cursor());
}

#[test]
fn test_left_moves_one_char() {
    let mut h = Harness::editing();
    type_string(&mut h.ctl, "abc");
    let resp = h.ctl.move_cursor_left();
    assert_eq!(resp.selection, Some(Selection::caret(2)));
}

#[test]
fn test_left_at_start_is_noop() {
    let mut h = Harness::editing();
    type_string(&mut h.ctl, "a");
    h.ctl.move_cursor_left();
    let resp = h.ctl.move_cursor_left();
    assert_eq!(h.ctl.selection(), Selection::caret(0));
    assert_eq!(resp.selection, None);
}

#[test]
fn test_right_at_end_is_noop() {
    let mut h = Harness::editing();
    type_string(&mut h.ctl, "abc");
    let resp = h.ctl.move_cursor_right();
    assert_eq!(h.ctl.selection(), Selection::caret(3));
    assert_eq!(resp.selection, None);
    assert_eq!(resp.text, None);
    assert_eq!(resp.overlay, OverlayAction::Keep);
}

#[test]
fn test_right_after_left() {
    let mut h = Harness::editing();
    type_string(&mut h.ctl, "abc");
    h.ctl.move_cursor_left();
    h.ctl.move_cursor_left();
    h.ctl.move_cursor_right();
    assert_eq!(h.ctl.selection(), Selection::caret(2));
}

#[test]
fn test_arrows_collapse_range_selection() {
    let mut h = Harness::editing();
    h.ctl.set_text("brave");
    h.ctl.highlight_all();
    h.ctl.move_cursor_right();
    // highlight_all accepted; right arrow applied it and went to the end.
    assert_eq!(h.ctl.committed_text(), "brave");
    assert_eq!(h.ctl.selection(), Selection::caret(5));
    h.ctl.move_cursor_left();
    assert_eq!(h.ctl.selection(), Selection::caret(4));
}

#[test]
fn test_touch_applies_completion() {
    let mut h = with_suggestion("bra", "brave.com");
    let resp = h.ctl.handle_touch_begin();
    assert!(resp.proceed);
    assert_eq!(h.ctl.committed_text(), "brave.com");
    assert!(!h.ctl.is_selection_active());
}

#[test]
fn test_touch_without_suggestion_is_noop() {
    let mut h = Harness::editing();
    type_string(&mut h.ctl, "abc");
    h.ctl.move_cursor_left();
    let resp = h.ctl.handle_touch_begin();
    assert!(resp.proceed);
    assert_eq!(resp.selection, None);
    assert_eq!(h.ctl.selection(), Selection::caret(2));
}
