mod focus;
mod navigation;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use urlbar_core::debounce::ManualClock;

use super::AutocompleteController;

pub(super) const QUIET: Duration = Duration::from_millis(100);

/// Everything the controller told its delegate, in order.
#[derive(Debug, Default)]
pub(super) struct DelegateLog {
    pub entered: Vec<String>,
    pub began_editing: usize,
    pub return_queries: usize,
    pub clear_queries: usize,
}

pub(super) struct RecordingDelegate {
    log: Arc<Mutex<DelegateLog>>,
    allow_return: bool,
    allow_clear: bool,
}

impl super::FieldDelegate for RecordingDelegate {
    fn did_enter_text(&mut self, text: &str) {
        self.log.lock().unwrap().entered.push(text.to_string());
    }

    fn did_begin_editing(&mut self) {
        self.log.lock().unwrap().began_editing += 1;
    }

    fn should_return(&mut self) -> bool {
        self.log.lock().unwrap().return_queries += 1;
        self.allow_return
    }

    fn should_clear(&mut self) -> bool {
        self.log.lock().unwrap().clear_queries += 1;
        self.allow_clear
    }
}

/// Controller on a manual clock with a recording delegate installed.
pub(super) struct Harness {
    pub ctl: AutocompleteController,
    pub clock: Arc<ManualClock>,
    pub log: Arc<Mutex<DelegateLog>>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_answers(true, true)
    }

    pub fn with_answers(allow_return: bool, allow_clear: bool) -> Self {
        let clock = Arc::new(ManualClock::new());
        let log = Arc::new(Mutex::new(DelegateLog::default()));
        let mut ctl = AutocompleteController::with_clock(clock.clone(), QUIET);
        ctl.set_delegate(Box::new(RecordingDelegate {
            log: Arc::clone(&log),
            allow_return,
            allow_clear,
        }));
        Self { ctl, clock, log }
    }

    /// Focused controller.
    pub fn editing() -> Self {
        let mut h = Self::new();
        h.ctl.begin_editing();
        h
    }

    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    pub fn entered(&self) -> Vec<String> {
        self.log.lock().unwrap().entered.clone()
    }
}

// Helper: type a string one character at a time
pub(super) fn type_string(ctl: &mut AutocompleteController, s: &str) {
    for ch in s.chars() {
        ctl.insert_text(&ch.to_string());
    }
}

/// Focused controller showing `committed` + `suggestion`.
pub(super) fn with_suggestion(committed: &str, candidate: &str) -> Harness {
    let mut h = Harness::editing();
    type_string(&mut h.ctl, committed);
    h.ctl.set_suggestion(Some(candidate));
    assert!(h.ctl.is_selection_active(), "setup: suggestion not accepted");
    h
}
