use tracing::{debug, debug_span};

use urlbar_core::suggestion::{match_suggestion, SuggestionMatch};

use super::types::{FieldResponse, OverlayAction, Selection};
use super::AutocompleteController;

impl AutocompleteController {
    /// Offer `candidate` as the completion of the committed text.
    ///
    /// Accepted only while editing with no IME composition, and only when the
    /// candidate extends the committed text. Anything else clears the current
    /// suggestion.
    pub fn set_suggestion(&mut self, candidate: Option<&str>) -> FieldResponse {
        let _span = debug_span!("set_suggestion", ?candidate).entered();

        self.awaiting_answer = false;
        let Some(candidate) = candidate else {
            return self.reject_suggestion();
        };
        if !self.editing || self.composing {
            debug!(
                editing = self.editing,
                composing = self.composing,
                "suggestion ignored"
            );
            return self.reject_suggestion();
        }

        match match_suggestion(&self.committed, candidate) {
            SuggestionMatch::Completes { suffix } => {
                debug!(suffix = suffix.as_str(), "suggestion accepted");
                self.pending = Some(suffix);
                self.hide_cursor = true;
                let mut resp = self.response();
                resp.overlay = self.overlay_action();
                resp.selection = Some(self.reset_cursor());
                resp
            }
            rejected => {
                debug!(?rejected, "suggestion rejected");
                self.reject_suggestion()
            }
        }
    }

    fn reject_suggestion(&mut self) -> FieldResponse {
        self.hide_cursor = false;
        self.remove_completion()
    }

    /// Commit the highlighted suggestion into the committed text.
    /// No-op when no suggestion is shown.
    pub fn apply_completion(&mut self) -> FieldResponse {
        let _span = debug_span!("apply_completion").entered();

        let Some(suffix) = self.pending.take() else {
            return self.response();
        };
        self.committed.push_str(&suffix);
        self.hide_cursor = false;
        // The text the pending request was computed for is gone.
        self.debounce.cancel();
        self.selection = Selection::caret(self.end_of_document());

        let mut resp = self.text_response();
        resp.overlay = OverlayAction::Hide;
        resp
    }

    /// Drop the highlighted suggestion, leaving the committed text alone.
    /// The caret becomes visible again when a suggestion was removed.
    pub fn remove_completion(&mut self) -> FieldResponse {
        let removed = self.pending.take().is_some();
        if removed {
            self.hide_cursor = false;
        }
        let mut resp = self.response();
        if removed {
            resp.overlay = OverlayAction::Hide;
        }
        resp
    }

    /// Move the whole current text into the suggestion over an empty committed
    /// text, so the next keystroke replaces it. Used when the field is focused
    /// with pre-filled text.
    ///
    /// The highlight is the overlay; the native selection reported back is
    /// the empty range at offset 0 since no committed text remains.
    pub fn highlight_all(&mut self) -> FieldResponse {
        let _span = debug_span!("highlight_all").entered();

        let text = std::mem::take(&mut self.committed);
        self.pending = None;
        self.selection = Selection::caret(0);

        let resp = self.set_suggestion(Some(&text));
        if self.pending.is_none() {
            // Nothing to highlight (empty text, not editing, or composing).
            self.committed = text;
            self.selection = Selection::caret(self.end_of_document());
            return resp;
        }

        self.selection = Selection::range(0, self.end_of_document());
        let mut resp = self.text_response().then(resp);
        resp.selection = Some(self.selection);
        resp
    }

    /// Park the caret at the end of the committed text so the host
    /// re-evaluates caret visibility.
    pub(super) fn reset_cursor(&mut self) -> Selection {
        self.selection = Selection::caret(self.end_of_document());
        self.selection
    }
}
