use std::fs;
use std::process;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub(crate) use die;

pub fn settings_export() {
    print!("{}", urlbar_core::settings::default_toml());
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let s = die!(
        urlbar_core::settings::parse_settings_toml(&content),
        "Error: {}"
    );
    let [r, g, b, a] = s.highlight_rgba();
    println!(
        "OK: debounce.quiet_interval_ms={}, overlay.highlight_color=rgba({r}, {g}, {b}, {a}), overlay.accessibility_identifier={}",
        s.debounce.quiet_interval_ms, s.overlay.accessibility_identifier
    );
}

/// Install a custom settings file before anything reads the global settings.
pub fn settings_load(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    die!(urlbar_core::settings::init_custom(content), "Error: {}");
}
