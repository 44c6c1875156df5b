//! Inline-autocomplete state machine for a single URL text field.
//!
//! `AutocompleteController` owns what the user typed (the committed text) and
//! the highlighted completion shown after it (the pending suggestion). The
//! host feeds it edit, focus, touch and IME events; every operation returns a
//! `FieldResponse` the host translates into native field updates.

mod completion;
mod edit;
mod focus;
mod navigation;
mod request;
mod response;
pub(crate) mod types;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use urlbar_core::debounce::{Clock, Debouncer, SystemClock};
use urlbar_core::settings::settings;
use urlbar_core::unicode::char_len;

pub use types::{
    EditEvent, EditKind, FieldDelegate, FieldResponse, OverlayAction, Selection,
    SuggestionRequest,
};

/// Autocomplete state for one text field.
pub struct AutocompleteController {
    /// Text the user actually entered (the native field text).
    committed: String,
    /// Highlighted remainder after `committed`, if any.
    pending: Option<String>,
    /// Native caret must not be drawn while a suggestion is shown.
    hide_cursor: bool,
    selection: Selection,

    editing: bool,
    composing: bool,
    last_edit_insertion: bool,
    /// A fired request has not been answered yet.
    awaiting_answer: bool,

    /// Pending `did_enter_text` payload (normalized text).
    debounce: Debouncer<String>,
    clock: Arc<dyn Clock>,
    delegate: Option<Box<dyn FieldDelegate>>,
}

impl AutocompleteController {
    /// Controller on the wall clock, using the global settings' quiet interval.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock), settings().quiet_interval())
    }

    pub fn with_clock(clock: Arc<dyn Clock>, quiet_interval: Duration) -> Self {
        Self {
            committed: String::new(),
            pending: None,
            hide_cursor: false,
            selection: Selection::default(),
            editing: false,
            composing: false,
            last_edit_insertion: false,
            awaiting_answer: false,
            debounce: Debouncer::new(quiet_interval),
            clock,
            delegate: None,
        }
    }

    pub fn set_delegate(&mut self, delegate: Box<dyn FieldDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn committed_text(&self) -> &str {
        &self.committed
    }

    pub fn pending_suggestion(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn is_selection_active(&self) -> bool {
        self.pending.is_some()
    }

    pub fn hide_cursor(&self) -> bool {
        self.hide_cursor
    }

    /// Whether the host should draw the native caret at its default rect.
    pub fn caret_rect_visible(&self) -> bool {
        !self.hide_cursor
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn is_composing(&self) -> bool {
        self.composing
    }

    pub fn last_edit_was_insertion(&self) -> bool {
        self.last_edit_insertion
    }

    /// What the user sees: committed text followed by the highlighted suggestion.
    pub fn display_text(&self) -> String {
        match &self.pending {
            Some(suffix) => format!("{}{}", self.committed, suffix),
            None => self.committed.clone(),
        }
    }

    fn end_of_document(&self) -> usize {
        char_len(&self.committed)
    }
}

impl Default for AutocompleteController {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AutocompleteController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutocompleteController")
            .field("committed", &self.committed)
            .field("pending", &self.pending)
            .field("hide_cursor", &self.hide_cursor)
            .field("selection", &self.selection)
            .field("editing", &self.editing)
            .field("composing", &self.composing)
            .finish_non_exhaustive()
    }
}
