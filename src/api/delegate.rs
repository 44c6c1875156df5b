use std::sync::{Arc, Mutex};

use urlbar_session::FieldDelegate;

/// Callbacks implemented by the host (Swift/Kotlin) owner of the field.
#[uniffi::export(with_foreign)]
pub trait UrlbarDelegate: Send + Sync {
    /// Debounced: the user typed `text` (normalized). Answer with
    /// `UrlbarField::set_suggestion`.
    fn did_enter_text(&self, text: String);
    fn did_begin_editing(&self);
    fn should_return(&self) -> bool;
    fn should_clear(&self) -> bool;
}

pub(super) enum Notification {
    EnteredText(String),
    BeganEditing,
}

/// Controller-side delegate that queues notifications instead of calling out.
///
/// The foreign delegate may call straight back into the field, so
/// notifications are delivered only after the session lock is released.
pub(super) struct QueuedDelegate {
    pub(super) queue: Arc<Mutex<Vec<Notification>>>,
}

impl QueuedDelegate {
    fn push(&self, n: Notification) {
        if let Ok(mut q) = self.queue.lock() {
            q.push(n);
        }
    }
}

impl FieldDelegate for QueuedDelegate {
    fn did_enter_text(&mut self, text: &str) {
        self.push(Notification::EnteredText(text.to_string()));
    }

    fn did_begin_editing(&mut self) {
        self.push(Notification::BeganEditing);
    }
}
