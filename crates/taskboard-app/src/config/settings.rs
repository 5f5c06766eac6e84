//! Settings loader for config.toml

use super::types::Settings;
use std::path::{Path, PathBuf};
use taskboard_core::prelude::*;

const CONFIG_FILENAME: &str = "config.toml";
const CONFIG_DIR: &str = "taskboard";

/// Default location of the settings file
///
/// `<config_dir>/taskboard/config.toml`, e.g. `~/.config/taskboard/config.toml`
/// on Linux.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
        .join(CONFIG_FILENAME)
}

/// Load settings from `config_path`
///
/// Never fails: a missing file, an unreadable file, or a file that does not
/// parse all produce default settings.
pub fn load_settings(config_path: &Path) -> Settings {
    match try_load_settings(config_path) {
        Ok(settings) => settings,
        Err(Error::ConfigNotFound { path }) => {
            debug!("No config file at {:?}, using defaults", path);
            Settings::default()
        }
        Err(e) => {
            warn!("Failed to load {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Load settings from `config_path`, reporting why that failed
pub fn try_load_settings(config_path: &Path) -> Result<Settings> {
    if !config_path.exists() {
        return Err(Error::ConfigNotFound {
            path: config_path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;
    let settings = toml::from_str(&content)?;
    debug!("Loaded settings from {:?}", config_path);
    Ok(settings)
}

/// Write a commented default config file if none exists yet
pub fn init_config_file(config_path: &Path) -> Result<()> {
    if config_path.exists() {
        return Ok(());
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    let default_content = r#"# Taskboard Configuration

[board]
categories = ["Education", "Work", "Shopping"]

[behavior]
confirm_quit = true     # Ask before quitting while tasks exist (nothing is saved)

[ui]
title = "Task Management App"
show_empty_categories = false
show_task_ids = false
"#;

    std::fs::write(config_path, default_content)
        .with_context(|| format!("Failed to write {:?}", config_path))?;
    info!("Created default config at {:?}", config_path);
    Ok(())
}
