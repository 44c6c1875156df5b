//! Host-facing engine for the inline-autocomplete URL field.
//!
//! The state machine lives in `urlbar_session`; this crate wraps it in a
//! UniFFI object so a native text field can forward its callbacks and apply
//! the returned events.

uniffi::setup_scaffolding!();

pub mod api;
mod async_worker;
pub mod trace_init;

pub use urlbar_core::settings;
pub use urlbar_session::{AutocompleteController, FieldDelegate, FieldResponse};
