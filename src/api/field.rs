use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use urlbar_session::{AutocompleteController, EditEvent, EditKind, FieldResponse};

use crate::async_worker::DebounceTimer;

use super::delegate::{Notification, QueuedDelegate, UrlbarDelegate};
use super::types::{convert_to_events, UrlbarError, UrlbarResponse};

/// How long `poll` waits for the timer thread once a request is due.
const TIMER_SLACK: Duration = Duration::from_millis(50);

/// One autocompleting text field. The native field forwards its callbacks
/// here and applies the returned events.
#[derive(uniffi::Object)]
pub struct UrlbarField {
    session: Mutex<AutocompleteController>,
    delegate: Option<Arc<dyn UrlbarDelegate>>,
    notifications: Arc<Mutex<Vec<Notification>>>,
    timer: DebounceTimer,
}

#[uniffi::export]
impl UrlbarField {
    #[uniffi::constructor]
    pub fn new(delegate: Option<Arc<dyn UrlbarDelegate>>) -> Result<Arc<Self>, UrlbarError> {
        let notifications = Arc::new(Mutex::new(Vec::new()));
        let mut session = AutocompleteController::new();
        session.set_delegate(Box::new(QueuedDelegate {
            queue: Arc::clone(&notifications),
        }));
        let timer = DebounceTimer::new().map_err(|e| UrlbarError::Internal {
            msg: format!("failed to spawn debounce timer: {e}"),
        })?;
        Ok(Arc::new(Self {
            session: Mutex::new(session),
            delegate,
            notifications,
            timer,
        }))
    }

    // --- Editing ---

    /// The native field changed its text. `fragment` is the replacement string
    /// of the edit, `None` for deletions.
    pub fn text_changed(
        &self,
        text: String,
        fragment: Option<String>,
        caret: u32,
        composing: bool,
    ) -> UrlbarResponse {
        let kind = match fragment {
            Some(fragment) => EditKind::Insert { fragment },
            None => EditKind::Delete,
        };
        let event = EditEvent {
            text,
            kind,
            caret: caret as usize,
            composing,
        };
        self.run(|s| s.on_text_changed(event))
    }

    pub fn insert_text(&self, fragment: String) -> UrlbarResponse {
        self.run(|s| s.insert_text(&fragment))
    }

    pub fn set_text(&self, text: String) -> UrlbarResponse {
        self.run(|s| s.set_text(&text))
    }

    pub fn delete_backward(&self) -> UrlbarResponse {
        self.run(|s| s.handle_delete_backward())
    }

    pub fn will_set_marked_text(&self, marked: Option<String>) -> UrlbarResponse {
        self.run(|s| s.will_set_marked_text(marked.as_deref()))
    }

    pub fn unmark_text(&self) {
        self.session().unmark_text();
    }

    // --- Completion ---

    pub fn set_suggestion(&self, candidate: Option<String>) -> UrlbarResponse {
        self.run(|s| s.set_suggestion(candidate.as_deref()))
    }

    pub fn apply_completion(&self) -> UrlbarResponse {
        self.run(|s| s.apply_completion())
    }

    pub fn remove_completion(&self) -> UrlbarResponse {
        self.run(|s| s.remove_completion())
    }

    pub fn highlight_all(&self) -> UrlbarResponse {
        self.run(|s| s.highlight_all())
    }

    // --- Navigation / touch ---

    pub fn move_cursor_left(&self) -> UrlbarResponse {
        self.run(|s| s.move_cursor_left())
    }

    pub fn move_cursor_right(&self) -> UrlbarResponse {
        self.run(|s| s.move_cursor_right())
    }

    pub fn touch_begin(&self) -> UrlbarResponse {
        self.run(|s| s.handle_touch_begin())
    }

    // --- Focus / delegate queries ---

    pub fn begin_editing(&self) {
        self.session().begin_editing();
        self.flush_notifications();
    }

    pub fn should_end_editing(&self) -> UrlbarResponse {
        self.run(|s| s.should_end_editing())
    }

    pub fn end_editing(&self) -> UrlbarResponse {
        self.timer.disarm();
        self.run(|s| s.end_editing())
    }

    pub fn should_return(&self) -> UrlbarResponse {
        let mut resp = self.run(|s| s.should_return());
        resp.proceed = resp.proceed && self.delegate.as_ref().map_or(true, |d| d.should_return());
        resp
    }

    pub fn should_clear(&self) -> UrlbarResponse {
        let mut resp = self.run(|s| s.should_clear());
        resp.proceed = resp.proceed && self.delegate.as_ref().map_or(true, |d| d.should_clear());
        resp
    }

    // --- Debounce ---

    /// Deliver the debounced suggestion request the timer thread fired.
    /// Returns the normalized text handed to the delegate, if any.
    pub fn poll(&self) -> Option<String> {
        let due = self
            .session()
            .pending_request()
            .is_some_and(|req| req.deadline <= Instant::now());
        // A host woken by SchedulePoll can get here just ahead of the timer.
        let mut next = if due {
            self.timer.recv_timeout(TIMER_SLACK)
        } else {
            self.timer.try_recv()
        };

        let mut fired = None;
        while let Some(generation) = next {
            if let Some(text) = self.session().fire_request(generation) {
                fired = Some(text);
            }
            next = self.timer.try_recv();
        }
        self.flush_notifications();
        fired
    }

    // --- State ---

    pub fn committed_text(&self) -> String {
        self.session().committed_text().to_string()
    }

    pub fn pending_suggestion(&self) -> Option<String> {
        self.session().pending_suggestion().map(str::to_string)
    }

    pub fn display_text(&self) -> String {
        self.session().display_text()
    }

    pub fn is_selection_active(&self) -> bool {
        self.session().is_selection_active()
    }

    pub fn caret_rect_visible(&self) -> bool {
        self.session().caret_rect_visible()
    }
}

impl UrlbarField {
    fn session(&self) -> MutexGuard<'_, AutocompleteController> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run one controller operation, arm the timer for any new request, then
    /// deliver queued notifications with the lock released.
    fn run(&self, op: impl FnOnce(&mut AutocompleteController) -> FieldResponse) -> UrlbarResponse {
        let resp = {
            let mut session = self.session();
            let resp = op(&mut session);
            match session.pending_request() {
                Some(req) if resp.request.is_some() => self.timer.arm(req.generation, req.deadline),
                Some(_) => {}
                None => self.timer.disarm(),
            }
            resp
        };
        self.flush_notifications();
        convert_to_events(resp)
    }

    fn flush_notifications(&self) {
        let pending = match self.notifications.lock() {
            Ok(mut q) => std::mem::take(&mut *q),
            Err(_) => return,
        };
        let Some(delegate) = self.delegate.as_ref() else {
            return;
        };
        for n in pending {
            match n {
                Notification::EnteredText(text) => delegate.did_enter_text(text),
                Notification::BeganEditing => delegate.did_begin_editing(),
            }
        }
    }
}
