//! Modal dialog state.
//!
//! Data models for the quit confirmation and the blocking alert. The
//! rendering widgets live in taskboard-tui.

use taskboard_core::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub task_count: usize,
}

impl ConfirmDialogState {
    /// Create a quit confirmation dialog state
    pub fn quit_confirmation(task_count: usize) -> Self {
        Self {
            title: "Quit Taskboard?".to_string(),
            message: if task_count == 1 {
                "You have 1 task.".to_string()
            } else {
                format!("You have {} tasks.", task_count)
            },
            task_count,
        }
    }
}

/// A blocking notification; input is ignored until it is dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertState {
    pub title: String,
    pub message: String,
}

impl AlertState {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// Alert describing a user-facing error
    pub fn from_error(error: &Error) -> Self {
        let title = match error {
            Error::DuplicateTask { .. } => "Duplicate Task",
            _ => "Error",
        };
        Self::new(title, error.to_string())
    }
}
