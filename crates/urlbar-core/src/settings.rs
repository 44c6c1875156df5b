//! Global settings loaded from TOML.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;
use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Set custom TOML before first `settings()` call.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    parse_settings_toml(&toml_content)?;
    CUSTOM_TOML
        .set(toml_content)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    static INSTANCE: OnceLock<Settings> = OnceLock::new();
    INSTANCE.get_or_init(|| {
        let custom = CUSTOM_TOML
            .get()
            .and_then(|s| parse_settings_toml(s).ok());
        // init_custom validated the custom TOML already; the embedded
        // defaults are covered by `parse_default_toml` below.
        custom.unwrap_or_else(|| {
            parse_settings_toml(DEFAULT_SETTINGS_TOML).unwrap_or_else(|_| Settings::fallback())
        })
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub debounce: DebounceSettings,
    pub overlay: OverlaySettings,
    /// Parsed `overlay.highlight_color`.
    #[serde(skip)]
    highlight_rgba: [u8; 4],
}

impl Settings {
    fn fallback() -> Self {
        Self {
            debounce: DebounceSettings {
                quiet_interval_ms: 100,
            },
            overlay: OverlaySettings {
                highlight_color: "#3D7BF833".to_string(),
                accessibility_identifier: "autocomplete".to_string(),
            },
            highlight_rgba: [0x3D, 0x7B, 0xF8, 0x33],
        }
    }

    pub fn quiet_interval(&self) -> Duration {
        Duration::from_millis(self.debounce.quiet_interval_ms)
    }

    /// Highlight color as `[r, g, b, a]`.
    pub fn highlight_rgba(&self) -> [u8; 4] {
        self.highlight_rgba
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DebounceSettings {
    pub quiet_interval_ms: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OverlaySettings {
    pub highlight_color: String,
    pub accessibility_identifier: String,
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    let mut s: Settings =
        toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))?;
    validate(&s)?;
    s.highlight_rgba = parse_rgba(&s.overlay.highlight_color)?;
    Ok(s)
}

fn parse_rgba(raw: &str) -> Result<[u8; 4], SettingsError> {
    let invalid = |reason: &str| SettingsError::InvalidValue {
        field: "overlay.highlight_color".to_string(),
        reason: reason.to_string(),
    };
    let hex = raw
        .strip_prefix('#')
        .ok_or_else(|| invalid("must start with '#'"))?;
    if hex.len() != 8 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid("must be #RRGGBBAA"));
    }
    let mut rgba = [0u8; 4];
    for (i, byte) in rgba.iter_mut().enumerate() {
        *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
            .map_err(|_| invalid("must be #RRGGBBAA"))?;
    }
    Ok(rgba)
}

fn validate(s: &Settings) -> Result<(), SettingsError> {
    if s.debounce.quiet_interval_ms == 0 {
        return Err(SettingsError::InvalidValue {
            field: "debounce.quiet_interval_ms".to_string(),
            reason: "must be positive".to_string(),
        });
    }
    if s.overlay.accessibility_identifier.trim().is_empty() {
        return Err(SettingsError::InvalidValue {
            field: "overlay.accessibility_identifier".to_string(),
            reason: "must not be empty".to_string(),
        });
    }
    Ok(())
}
