use tracing::debug_span;

use super::types::FieldResponse;
use super::AutocompleteController;

impl AutocompleteController {
    /// Field gained focus.
    pub fn begin_editing(&mut self) {
        let _span = debug_span!("begin_editing").entered();
        self.editing = true;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_begin_editing();
        }
    }

    /// Field is about to lose focus. Commits the suggestion; always allowed.
    pub fn should_end_editing(&mut self) -> FieldResponse {
        let _span = debug_span!("should_end_editing").entered();
        let mut resp = self.apply_completion();
        resp.proceed = true;
        resp
    }

    /// Field lost focus. A pending suggestion request will not fire, and a
    /// suggestion that `should_end_editing` did not commit is dropped.
    pub fn end_editing(&mut self) -> FieldResponse {
        let _span = debug_span!("end_editing").entered();
        self.editing = false;
        self.composing = false;
        self.hide_cursor = false;
        self.awaiting_answer = false;
        self.debounce.cancel();
        self.remove_completion()
    }

    /// Return key. Commits the suggestion, then asks the delegate.
    pub fn should_return(&mut self) -> FieldResponse {
        let _span = debug_span!("should_return").entered();
        let mut resp = self.apply_completion();
        resp.proceed = self
            .delegate
            .as_mut()
            .map_or(true, |delegate| delegate.should_return());
        resp
    }

    /// Clear button. Drops the suggestion, then asks the delegate.
    pub fn should_clear(&mut self) -> FieldResponse {
        let _span = debug_span!("should_clear").entered();
        let mut resp = self.remove_completion();
        resp.proceed = self
            .delegate
            .as_mut()
            .map_or(true, |delegate| delegate.should_clear());
        resp
    }
}
