use std::fs;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use urlbar_core::debounce::ManualClock;
use urlbar_core::settings::settings;
use urlbar_session::{AutocompleteController, FieldResponse};

use super::config_ops::die;
use crate::script::{parse_script, Step};

/// Field state after one script step.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub line: usize,
    pub step: String,
    pub committed: String,
    pub suggestion: Option<String>,
    pub display: String,
    pub selection: [usize; 2],
    pub caret_hidden: bool,
    pub editing: bool,
    pub composing: bool,
    /// Text sent to the delegate by this step, if a request fired.
    pub entered: Option<String>,
    pub proceed: bool,
}

/// Run parsed steps against a fresh controller on a manual clock.
pub fn run_steps(steps: &[(usize, Step)], quiet: Duration) -> Vec<Snapshot> {
    let clock = Arc::new(ManualClock::new());
    let mut ctl = AutocompleteController::with_clock(clock.clone(), quiet);
    let mut out = Vec::with_capacity(steps.len());

    for (line, step) in steps {
        let mut entered = None;
        let resp: Option<FieldResponse> = match step {
            Step::Focus => {
                ctl.begin_editing();
                None
            }
            Step::Blur => {
                let resp = ctl.should_end_editing();
                ctl.end_editing();
                Some(resp)
            }
            Step::Type(text) => Some(ctl.insert_text(text)),
            Step::Backspace => Some(ctl.handle_delete_backward()),
            Step::Suggest(candidate) => Some(ctl.set_suggestion(candidate.as_deref())),
            Step::Left => Some(ctl.move_cursor_left()),
            Step::Right => Some(ctl.move_cursor_right()),
            Step::Touch => Some(ctl.handle_touch_begin()),
            Step::Mark(text) => Some(ctl.will_set_marked_text(text.as_deref())),
            Step::Unmark => {
                ctl.unmark_text();
                None
            }
            Step::Return => Some(ctl.should_return()),
            Step::Clear => Some(ctl.should_clear()),
            Step::HighlightAll => Some(ctl.highlight_all()),
            Step::SetText(text) => Some(ctl.set_text(text)),
            Step::Wait(ms) => {
                clock.advance(Duration::from_millis(*ms));
                entered = ctl.poll();
                None
            }
        };

        let sel = ctl.selection();
        out.push(Snapshot {
            line: *line,
            step: format!("{step:?}"),
            committed: ctl.committed_text().to_string(),
            suggestion: ctl.pending_suggestion().map(str::to_string),
            display: ctl.display_text(),
            selection: [sel.start, sel.end],
            caret_hidden: ctl.hide_cursor(),
            editing: ctl.is_editing(),
            composing: ctl.is_composing(),
            entered,
            proceed: resp.map_or(true, |r| r.proceed),
        });
    }
    out
}

pub fn replay(file: &str, json: bool) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let steps = die!(parse_script(&content), "Error: {}");
    let snapshots = run_steps(&steps, settings().quiet_interval());

    if json {
        for snap in &snapshots {
            let line = die!(serde_json::to_string(snap), "Error: {}");
            println!("{line}");
        }
        return;
    }

    for snap in &snapshots {
        let ghost = snap.suggestion.as_deref().unwrap_or("");
        print!(
            "{:>4}  {:<32} {:?}[{}]  sel={}..{}",
            snap.line, snap.step, snap.committed, ghost, snap.selection[0], snap.selection[1]
        );
        if snap.caret_hidden {
            print!("  caret=hidden");
        }
        if let Some(ref text) = snap.entered {
            print!("  did_enter_text={text:?}");
        }
        if !snap.proceed {
            print!("  proceed=false");
        }
        println!();
    }
}
