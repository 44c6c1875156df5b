//! UniFFI export layer — type-safe Swift/Kotlin bindings for the urlbar engine.
//!
//! Each public type here maps to a generated foreign class, struct, or enum.

mod delegate;
mod field;
mod types;

pub use delegate::UrlbarDelegate;
pub use field::UrlbarField;
pub use types::{UrlbarError, UrlbarEvent, UrlbarResponse};

// ---------------------------------------------------------------------------
// Top-level functions
// ---------------------------------------------------------------------------

#[uniffi::export]
fn engine_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[uniffi::export]
fn settings_load_config(path: String) -> Result<(), UrlbarError> {
    let content = std::fs::read_to_string(&path).map_err(|e| UrlbarError::Io {
        msg: format!("{path}: {e}"),
    })?;
    urlbar_core::settings::init_custom(content)
        .map_err(|e| UrlbarError::InvalidData { msg: e.to_string() })?;
    Ok(())
}

#[uniffi::export]
fn settings_default_config() -> String {
    urlbar_core::settings::default_toml().to_string()
}

/// Overlay highlight as `[r, g, b, a]` from the active settings.
#[uniffi::export]
fn overlay_highlight_rgba() -> Vec<u8> {
    urlbar_core::settings::settings().highlight_rgba().to_vec()
}

/// Accessibility identifier hosts assign to the overlay label.
#[uniffi::export]
fn overlay_accessibility_identifier() -> String {
    urlbar_core::settings::settings()
        .overlay
        .accessibility_identifier
        .clone()
}

#[cfg(feature = "trace")]
#[uniffi::export]
fn trace_init(log_dir: String) -> bool {
    crate::trace_init::init_tracing(std::path::Path::new(&log_dir))
}
