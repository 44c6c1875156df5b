use urlbar_core::unicode::{char_len, display_width};

use super::types::{FieldResponse, OverlayAction};
use super::AutocompleteController;

impl AutocompleteController {
    /// Empty response carrying the current caret visibility.
    pub(super) fn response(&self) -> FieldResponse {
        FieldResponse::new(self.hide_cursor)
    }

    /// Overlay for the current suggestion, placed right after the committed text.
    pub(super) fn overlay_action(&self) -> OverlayAction {
        match &self.pending {
            Some(suffix) => OverlayAction::Show {
                text: suffix.clone(),
                offset_chars: char_len(&self.committed) as u32,
                offset_columns: display_width(&self.committed) as u32,
            },
            None => OverlayAction::Hide,
        }
    }

    pub(super) fn text_response(&self) -> FieldResponse {
        let mut resp = self.response();
        resp.text = Some(self.committed.clone());
        resp.selection = Some(self.selection);
        resp
    }
}
