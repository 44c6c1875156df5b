use std::time::Instant;

use urlbar_core::debounce::Ticket;

/// What the most recent edit did to the committed text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditKind {
    /// `fragment` replaced the selection (may be empty for a cut/replace-with-nothing).
    Insert { fragment: String },
    /// Characters were removed (backspace, forward delete).
    Delete,
}

impl EditKind {
    pub fn insert(fragment: &str) -> Self {
        Self::Insert {
            fragment: fragment.to_string(),
        }
    }

    /// True for an insertion of at least one character.
    pub fn is_insertion(&self) -> bool {
        matches!(self, Self::Insert { fragment } if !fragment.is_empty())
    }
}

/// A text edit the host already applied to its native field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditEvent {
    pub text: String,
    pub kind: EditKind,
    /// Caret after the edit, as a char offset into `text`.
    pub caret: usize,
    /// Whether IME marked text is still present after the edit.
    pub composing: bool,
}

impl EditEvent {
    /// Edit that leaves the caret at the end of `text` with no composition.
    pub fn at_end(text: &str, kind: EditKind) -> Self {
        Self {
            text: text.to_string(),
            caret: text.chars().count(),
            kind,
            composing: false,
        }
    }
}

/// Caret or selection inside the committed text, in chars. `start == end`
/// is a plain caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn range(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn is_caret(&self) -> bool {
        self.start == self.end
    }
}

/// Overlay action: exactly one of three states, like the native label being
/// untouched, (re)created, or removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayAction {
    Keep,
    /// Draw `text` highlighted right after the entered text.
    Show {
        text: String,
        /// Entered-text length in chars.
        offset_chars: u32,
        /// Entered-text width in columns.
        offset_columns: u32,
    },
    Hide,
}

/// Debounced request for a suggestion. The host arms a timer for
/// `deadline` and calls back with `generation` once it expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestionRequest {
    pub generation: u64,
    pub deadline: Instant,
}

impl From<Ticket> for SuggestionRequest {
    fn from(t: Ticket) -> Self {
        Self {
            generation: t.generation,
            deadline: t.deadline,
        }
    }
}

/// Response from every controller operation, describing what the host must
/// change on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResponse {
    /// Whether the host should go ahead with the native action that triggered
    /// the call (return key, clear button, focus loss, touch handling).
    pub proceed: bool,
    /// Replacement for the native field text.
    pub text: Option<String>,
    pub overlay: OverlayAction,
    pub selection: Option<Selection>,
    /// HideCursorFlag after the operation.
    pub caret_hidden: bool,
    pub request: Option<SuggestionRequest>,
}

impl FieldResponse {
    pub(crate) fn new(caret_hidden: bool) -> Self {
        Self {
            proceed: true,
            text: None,
            overlay: OverlayAction::Keep,
            selection: None,
            caret_hidden,
            request: None,
        }
    }

    /// Merge: keep `proceed` from self, take later display changes from `other`.
    pub(crate) fn then(mut self, other: FieldResponse) -> FieldResponse {
        if other.text.is_some() {
            self.text = other.text;
        }
        if other.overlay != OverlayAction::Keep {
            self.overlay = other.overlay;
        }
        if other.selection.is_some() {
            self.selection = other.selection;
        }
        if other.request.is_some() {
            self.request = other.request;
        }
        self.caret_hidden = other.caret_hidden;
        self
    }
}

/// Callbacks into the owner of the field. `should_return` / `should_clear`
/// decide whether the native action proceeds.
pub trait FieldDelegate: Send {
    fn did_enter_text(&mut self, text: &str);
    fn did_begin_editing(&mut self) {}
    fn should_return(&mut self) -> bool {
        true
    }
    fn should_clear(&mut self) -> bool {
        true
    }
}
