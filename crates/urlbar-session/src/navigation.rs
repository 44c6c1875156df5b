use tracing::debug_span;

use super::types::{FieldResponse, Selection};
use super::AutocompleteController;

impl AutocompleteController {
    /// Left arrow. With a suggestion showing, accept it and jump to the start.
    pub fn move_cursor_left(&mut self) -> FieldResponse {
        let _span = debug_span!("move_cursor_left").entered();

        if self.is_selection_active() {
            let mut resp = self.apply_completion();
            self.selection = Selection::caret(0);
            resp.selection = Some(self.selection);
            return resp;
        }

        let start = self.selection.start.min(self.end_of_document());
        if start == 0 {
            return self.response();
        }
        self.selection = Selection::caret(start - 1);
        let mut resp = self.response();
        resp.selection = Some(self.selection);
        resp
    }

    /// Right arrow. With a suggestion showing, accept it and jump to the end.
    pub fn move_cursor_right(&mut self) -> FieldResponse {
        let _span = debug_span!("move_cursor_right").entered();

        if self.is_selection_active() {
            let mut resp = self.apply_completion();
            self.selection = Selection::caret(self.end_of_document());
            resp.selection = Some(self.selection);
            return resp;
        }

        let doc_end = self.end_of_document();
        let end = self.selection.end.min(doc_end);
        if end == doc_end {
            return self.response();
        }
        self.selection = Selection::caret(end + 1);
        let mut resp = self.response();
        resp.selection = Some(self.selection);
        resp
    }

    /// A touch is starting. Accept the suggestion first so the user cannot place
    /// the caret inside ghost text; the host then runs its own touch handling.
    pub fn handle_touch_begin(&mut self) -> FieldResponse {
        let _span = debug_span!("handle_touch_begin").entered();
        self.apply_completion()
    }
}
