//! Toolkit-independent building blocks for an inline-autocompleting URL field:
//! text normalization, suggestion matching, a single-slot debounce timer and
//! TOML settings.

pub mod debounce;
pub mod settings;
pub mod suggestion;
pub mod unicode;
