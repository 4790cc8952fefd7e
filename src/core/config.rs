use crate::config::Config;
use crate::config::check::{missing_keys, unknown_keys};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Print the effective configuration as YAML.
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Report keys missing from (or unknown to) the file at `path`.
    /// Returns the number of missing keys.
    pub fn check(path: &Path) -> AppResult<usize> {
        if !path.exists() {
            warning(format!(
                "No configuration file at {} (defaults are in use)",
                path.display()
            ));
            return Ok(0);
        }

        let content = fs::read_to_string(path)?;
        let missing = missing_keys(&content);
        let unknown = unknown_keys(&content);

        for key in &missing {
            warning(format!("Missing key '{key}' (default value applies)"));
        }
        for key in &unknown {
            info(format!("Unknown key '{key}' is ignored"));
        }
        if missing.is_empty() && unknown.is_empty() {
            success(format!("{} is complete", path.display()));
        }

        Ok(missing.len())
    }

    /// Open `path` in the requested editor, then $EDITOR / $VISUAL, then the
    /// platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!("Configuration edited with '{editor_to_use}'"));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))
                    .and_then(|s| {
                        if s.success() {
                            Ok(())
                        } else {
                            Err(AppError::Config(format!("'{default_editor}' exited with {s}")))
                        }
                    })
            }
            Ok(s) => Err(AppError::Config(format!("'{editor_to_use}' exited with {s}"))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
