use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages;
use crate::utils::path::config_path;
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
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = &cli.command
    {
        let path = config_path(cli.config_file.as_deref());

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            if !path.exists() {
                Config::default().save_to(&path)?;
            }

            let fallback = default_editor();
            let editor_to_use = editor.clone().unwrap_or_else(|| fallback.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    messages::success(format!(
                        "Configuration file edited successfully using '{editor_to_use}'"
                    ));
                }
                Ok(_) | Err(_) if editor_to_use != fallback => {
                    messages::warning(format!(
                        "Editor '{editor_to_use}' not available, falling back to '{fallback}'"
                    ));
                    let status = Command::new(&fallback)
                        .arg(&path)
                        .status()
                        .map_err(|e| AppError::Config(format!("cannot run '{fallback}': {e}")))?;
                    if !status.success() {
                        return Err(AppError::Config(format!(
                            "editor '{fallback}' exited with {status}"
                        )));
                    }
                    messages::success(format!(
                        "Configuration file edited successfully using fallback '{fallback}'"
                    ));
                }
                Ok(status) => {
                    return Err(AppError::Config(format!(
                        "editor '{editor_to_use}' exited with {status}"
                    )));
                }
                Err(e) => {
                    return Err(AppError::Config(format!(
                        "cannot run '{editor_to_use}': {e}"
                    )));
                }
            }

            // reject a file we could not load afterwards
            Config::load_from(&path)?;
        }

        if !*print_config && !*edit_config {
            messages::info("Nothing to do: use --print or --edit.");
        }
    }

    Ok(())
}
