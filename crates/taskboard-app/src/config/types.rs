//! Configuration types for Taskboard
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-sections with serde defaults

use serde::{Deserialize, Serialize};
use taskboard_core::{Error, Result, DEFAULT_CATEGORIES};

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub board: BoardSettings,

    #[serde(default)]
    pub behavior: BehaviorSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

impl Settings {
    /// Check the settings for values the board cannot start with
    pub fn validate(&self) -> Result<()> {
        let categories = &self.board.categories;
        if categories.is_empty() {
            return Err(Error::config_invalid("board.categories must not be empty"));
        }

        for (index, name) in categories.iter().enumerate() {
            if name.trim().is_empty() {
                return Err(Error::config_invalid(format!(
                    "board.categories[{}] is blank",
                    index
                )));
            }
            if categories[..index].contains(name) {
                return Err(Error::config_invalid(format!(
                    "board.categories lists \"{}\" more than once",
                    name
                )));
            }
        }

        Ok(())
    }
}

/// Board settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BoardSettings {
    /// Category names, in display order. Fixed for the whole session.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            categories: default_categories(),
        }
    }
}

fn default_categories() -> Vec<String> {
    DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect()
}

/// Behavior settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BehaviorSettings {
    /// Ask before quitting while the board holds tasks (nothing is saved)
    #[serde(default = "default_true")]
    pub confirm_quit: bool,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self { confirm_quit: true }
    }
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Heading shown above the form
    #[serde(default = "default_title")]
    pub title: String,

    /// Render a section for categories with no tasks
    #[serde(default)]
    pub show_empty_categories: bool,

    /// Show task ids next to task text
    #[serde(default)]
    pub show_task_ids: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            show_empty_categories: false,
            show_task_ids: false,
        }
    }
}

fn default_title() -> String {
    "Task Management App".to_string()
}

fn default_true() -> bool {
    true
}
