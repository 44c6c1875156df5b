use clap::{Parser, Subcommand};

use urlbar_cli::commands::{config_ops, replay_ops};

#[derive(Parser)]
#[command(name = "urlbartool", about = "Urlbar autocomplete diagnostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Path to the settings file
        file: String,
    },
    /// Replay an event script against a field and print its state after each step
    Replay {
        /// Path to the event script
        script: String,
        /// Path to a custom settings TOML (optional)
        #[arg(long)]
        settings: Option<String>,
        /// Output as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
        Command::Replay {
            script,
            settings,
            json,
        } => {
            if let Some(path) = settings {
                config_ops::settings_load(&path);
            }
            replay_ops::replay(&script, json);
        }
    }
}
