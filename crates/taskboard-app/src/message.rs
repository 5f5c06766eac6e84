//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use taskboard_core::TaskId;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Request to quit (may show confirmation dialog if tasks exist)
    RequestQuit,

    /// Force quit without confirmation (Ctrl+C)
    Quit,

    /// Confirm quit from confirmation dialog
    ConfirmQuit,

    /// Cancel quit from confirmation dialog
    CancelQuit,

    // ─────────────────────────────────────────────────────────
    // Form Messages
    // ─────────────────────────────────────────────────────────
    /// New pending input text for the add form
    InputChanged { text: String },
    /// Select a category by name, or clear the selection
    SelectCategory(Option<String>),
    /// Select the next option in the category selector
    NextCategory,
    /// Select the previous option in the category selector
    PreviousCategory,

    // ─────────────────────────────────────────────────────────
    // Task Messages
    // ─────────────────────────────────────────────────────────
    /// Add the pending input to the selected category
    AddTask,
    /// Remove a task
    DeleteTask { category: String, id: TaskId },
    /// Enter edit mode for a task
    BeginEdit { category: String, id: TaskId },
    /// New edit buffer text
    EditTextChanged { text: String },
    /// Save the edit buffer into a task and leave edit mode
    CommitEdit { category: String, id: TaskId },
    /// Leave edit mode without saving
    CancelEdit,

    // ─────────────────────────────────────────────────────────
    // Alert Messages
    // ─────────────────────────────────────────────────────────
    /// Close the blocking alert
    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move keyboard focus forward (Tab)
    FocusNext,
    /// Move keyboard focus backward (Shift+Tab)
    FocusPrevious,
    /// Move the task cursor up one row
    CursorUp,
    /// Move the task cursor down one row
    CursorDown,
    /// Jump to the first task row
    CursorTop,
    /// Jump to the last task row
    CursorBottom,
}
