use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{error, success, warning};

use crate::cli::parser::Commands;
use std::process::Command;

fn default_editor() -> String {
    std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        })
}

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration ({}):\n", Config::config_file().display());
            println!("{}", cfg.to_yaml()?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                warning("No configuration file yet, run `rtimesheet init` first.");
                return Ok(());
            }

            let fallback = default_editor();
            let requested = editor.clone().unwrap_or_else(|| fallback.clone());

            // requested editor first, then the platform default
            for candidate in [&requested, &fallback] {
                match Command::new(candidate).arg(&path).status() {
                    Ok(s) if s.success() => {
                        success(format!(
                            "Configuration file edited successfully using '{}'",
                            candidate
                        ));
                        return Ok(());
                    }
                    _ => warning(format!("Editor '{}' not available", candidate)),
                }
            }

            error("Failed to edit configuration file");
        }
    }

    Ok(())
}
