use std::time::Instant;

use urlbar_session::{FieldResponse, OverlayAction};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum UrlbarError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
    #[error("internal error: {msg}")]
    Internal { msg: String },
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// Event-driven response from every field call.
#[derive(Debug, uniffi::Record)]
pub struct UrlbarResponse {
    /// Whether the host should continue with its own handling of the event.
    pub proceed: bool,
    pub events: Vec<UrlbarEvent>,
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

#[derive(Clone, Debug, PartialEq, Eq, uniffi::Enum)]
pub enum UrlbarEvent {
    SetText {
        text: String,
    },
    ShowOverlay {
        text: String,
        offset_chars: u32,
        offset_columns: u32,
    },
    HideOverlay,
    SetSelection {
        start: u32,
        end: u32,
    },
    SetCaretHidden {
        hidden: bool,
    },
    /// Call `poll` after this many milliseconds.
    SchedulePoll {
        delay_ms: u64,
    },
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub(super) fn convert_to_events(resp: FieldResponse) -> UrlbarResponse {
    let mut events = Vec::new();

    // 1. Text
    if let Some(text) = resp.text {
        events.push(UrlbarEvent::SetText { text });
    }

    // 2. Overlay
    match resp.overlay {
        OverlayAction::Show {
            text,
            offset_chars,
            offset_columns,
        } => events.push(UrlbarEvent::ShowOverlay {
            text,
            offset_chars,
            offset_columns,
        }),
        OverlayAction::Hide => events.push(UrlbarEvent::HideOverlay),
        OverlayAction::Keep => {}
    }

    // 3. Selection
    if let Some(sel) = resp.selection {
        events.push(UrlbarEvent::SetSelection {
            start: sel.start as u32,
            end: sel.end as u32,
        });
    }

    // 4. Caret
    events.push(UrlbarEvent::SetCaretHidden {
        hidden: resp.caret_hidden,
    });

    // 5. Schedule poll
    if let Some(req) = resp.request {
        let delay = req.deadline.saturating_duration_since(Instant::now());
        events.push(UrlbarEvent::SchedulePoll {
            delay_ms: delay.as_millis() as u64,
        });
    }

    UrlbarResponse {
        proceed: resp.proceed,
        events,
    }
}
