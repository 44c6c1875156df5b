use tracing::debug;

use super::types::SuggestionRequest;
use super::AutocompleteController;

impl AutocompleteController {
    /// Whether a request fired and no `set_suggestion` answer or newer edit
    /// has arrived since. The caret may stay hidden while this holds.
    pub fn is_awaiting_suggestion(&self) -> bool {
        self.awaiting_answer
    }

    /// The debounced suggestion request currently armed, if any.
    pub fn pending_request(&self) -> Option<SuggestionRequest> {
        self.debounce.ticket().map(SuggestionRequest::from)
    }

    /// Fire the pending request if its quiet interval has elapsed on the
    /// controller's clock. Returns the normalized text sent to the delegate.
    pub fn poll(&mut self) -> Option<String> {
        let text = self.debounce.take_due(self.clock.now())?;
        self.notify_entered_text(text)
    }

    /// Fire the request armed as `generation`, as reported by a host timer.
    /// Stale generations are ignored.
    pub fn fire_request(&mut self, generation: u64) -> Option<String> {
        let Some(text) = self.debounce.take_if_current(generation) else {
            debug!(generation, "stale suggestion request dropped");
            return None;
        };
        self.notify_entered_text(text)
    }

    fn notify_entered_text(&mut self, text: String) -> Option<String> {
        // Focus may have moved while the timer was running.
        if !self.editing {
            debug!("suggestion request dropped: field not editing");
            return None;
        }
        debug!(text = text.as_str(), "did_enter_text");
        self.awaiting_answer = true;
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_enter_text(&text);
        }
        Some(text)
    }
}
