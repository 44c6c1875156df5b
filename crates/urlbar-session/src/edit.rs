use tracing::{debug, debug_span};

use urlbar_core::unicode::{byte_offset, char_len, normalize};

use super::types::{EditEvent, EditKind, FieldResponse, Selection};
use super::AutocompleteController;

impl AutocompleteController {
    /// The host applied an edit to its native text.
    ///
    /// Any suggestion is dropped since it was computed for the old text. A
    /// non-empty insertion with the caret at the end and no composition
    /// (re)arms the debounce timer; anything else cancels it and shows the caret.
    pub fn on_text_changed(&mut self, event: EditEvent) -> FieldResponse {
        let _span = debug_span!("on_text_changed", ?event).entered();

        self.awaiting_answer = false;
        // Keep the caret hidden across the swap when a suggestion was showing,
        // so it does not flash before the next suggestion arrives.
        let had_pending = self.pending.is_some();
        let mut resp = self.remove_completion();
        self.hide_cursor = had_pending;

        self.committed = event.text;
        let end = self.end_of_document();
        self.selection = Selection::caret(event.caret.min(end));
        self.composing = event.composing;
        self.last_edit_insertion = event.kind.is_insertion();

        let at_end = self.selection.end == end;
        if self.last_edit_insertion && at_end && !self.composing {
            let ticket = self
                .debounce
                .schedule(normalize(&self.committed), self.clock.now());
            debug!(generation = ticket.generation, "suggestion request scheduled");
            resp.request = Some(ticket.into());
        } else {
            self.debounce.cancel();
            self.hide_cursor = false;
        }

        resp.caret_hidden = self.hide_cursor;
        resp
    }

    /// Type `fragment` at the caret, replacing any selected range.
    pub fn insert_text(&mut self, fragment: &str) -> FieldResponse {
        let Selection { start, end } = self.clamped_selection();
        let mut text = self.committed.clone();
        let start_byte = byte_offset(&text, start);
        let end_byte = byte_offset(&text, end);
        text.replace_range(start_byte..end_byte, fragment);

        let event = EditEvent {
            text,
            kind: EditKind::insert(fragment),
            caret: start + char_len(fragment),
            composing: self.composing,
        };
        self.finish_own_edit(event)
    }

    /// Programmatic text assignment. Drops the suggestion and puts the caret at
    /// the end; never requests a suggestion.
    pub fn set_text(&mut self, text: &str) -> FieldResponse {
        let event = EditEvent {
            text: text.to_string(),
            kind: EditKind::Delete,
            caret: char_len(text),
            composing: false,
        };
        let mut resp = self.on_text_changed(event);
        resp.text = Some(self.committed.clone());
        resp.selection = Some(self.selection);
        resp
    }

    /// Backspace. A visible suggestion absorbs the first backspace: it is
    /// removed and no committed character is deleted.
    pub fn handle_delete_backward(&mut self) -> FieldResponse {
        let _span = debug_span!("handle_delete_backward").entered();

        self.last_edit_insertion = false;
        self.hide_cursor = false;

        if self.pending.is_some() {
            let mut resp = self.remove_completion();
            resp.selection = Some(self.reset_cursor());
            resp.caret_hidden = self.hide_cursor;
            resp.proceed = false;
            return resp;
        }

        let clamped = self.clamped_selection();
        let Selection { start, end } = clamped;
        let (start, end) = if clamped.is_caret() {
            if start == 0 {
                let mut resp = self.response();
                resp.proceed = false;
                return resp;
            }
            (start - 1, end)
        } else {
            (start, end)
        };

        let mut text = self.committed.clone();
        let start_byte = byte_offset(&text, start);
        let end_byte = byte_offset(&text, end);
        text.replace_range(start_byte..end_byte, "");

        let event = EditEvent {
            text,
            kind: EditKind::Delete,
            caret: start,
            composing: self.composing,
        };
        self.finish_own_edit(event)
    }

    /// IME composition text is about to be set (or cleared with `None`).
    /// Composition and suggestion never coexist.
    pub fn will_set_marked_text(&mut self, marked: Option<&str>) -> FieldResponse {
        let _span = debug_span!("will_set_marked_text", ?marked).entered();

        self.composing = marked.is_some_and(|m| !m.is_empty());
        if self.composing {
            self.hide_cursor = false;
        }
        let mut resp = self.remove_completion();
        resp.caret_hidden = self.hide_cursor;
        resp
    }

    /// IME composition committed or abandoned.
    pub fn unmark_text(&mut self) {
        self.composing = false;
    }

    fn finish_own_edit(&mut self, event: EditEvent) -> FieldResponse {
        let mut resp = self.on_text_changed(event);
        resp.text = Some(self.committed.clone());
        resp.selection = Some(self.selection);
        // The controller already edited the text; the host must not repeat it.
        resp.proceed = false;
        resp
    }

    fn clamped_selection(&self) -> Selection {
        let end = self.end_of_document();
        let a = self.selection.start.min(end);
        let b = self.selection.end.min(end);
        Selection::range(a.min(b), a.max(b))
    }
}
