//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::confirm_dialog::{AlertState, ConfirmDialogState};
use taskboard_core::{AppPhase, Board, IdGenerator, Task, TaskId};

/// Current UI mode/screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Form and task list accept input
    #[default]
    Normal,

    /// Blocking alert; only dismissal keys are handled
    Alert,

    /// Confirmation dialog (quit confirmation)
    ConfirmDialog,
}

/// Element holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// New-task text field
    #[default]
    Input,
    /// Category selector
    Category,
    /// Add button
    AddButton,
    /// Task list
    Tasks,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Category,
            Focus::Category => Focus::AddButton,
            Focus::AddButton => Focus::Tasks,
            Focus::Tasks => Focus::Input,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Input => Focus::Tasks,
            Focus::Category => Focus::Input,
            Focus::AddButton => Focus::Category,
            Focus::Tasks => Focus::AddButton,
        }
    }
}

/// The add-task form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// Pending input text, kept exactly as typed
    pub input: String,
    /// Selected category name; `None` is the "Select a category" option
    pub selected_category: Option<String>,
}

impl FormState {
    pub fn clear(&mut self) {
        self.input.clear();
        self.selected_category = None;
    }
}

/// The task currently in edit mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    /// In-progress text, committed verbatim
    pub buffer: String,
}

/// Location of a rendered task row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskRow {
    pub category: String,
    pub id: TaskId,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current application phase
    pub phase: AppPhase,

    /// Current UI mode
    pub ui_mode: UiMode,

    /// Loaded settings
    pub settings: Settings,

    /// Categories and their tasks
    pub board: Board,

    /// Source of task ids
    pub ids: IdGenerator,

    /// Add-task form fields
    pub form: FormState,

    /// Edit mode; at most one task is edited at a time
    pub editing: Option<EditSession>,

    /// Keyboard focus
    pub focus: Focus,

    /// Index into [`AppState::task_rows`]
    pub cursor: usize,

    /// Blocking alert contents (when in Alert mode)
    pub alert: Option<AlertState>,

    /// Confirmation dialog state (when in ConfirmDialog mode)
    pub confirm_dialog_state: Option<ConfirmDialogState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// Create state whose board uses the configured categories
    pub fn with_settings(settings: Settings) -> Self {
        let board = Board::new(settings.board.categories.iter().cloned());
        Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            settings,
            board,
            ids: IdGenerator::new(),
            form: FormState::default(),
            editing: None,
            focus: Focus::Input,
            cursor: 0,
            alert: None,
            confirm_dialog_state: None,
        }
    }

    // ─────────────────────────────────────────────────────────
    // Task Rows / Cursor
    // ─────────────────────────────────────────────────────────

    /// Every task row in display order (category by category)
    pub fn task_rows(&self) -> Vec<TaskRow> {
        self.board
            .non_empty_categories()
            .flat_map(|category| {
                category.tasks().iter().map(|task| TaskRow {
                    category: category.name().to_string(),
                    id: task.id,
                })
            })
            .collect()
    }

    /// Row under the cursor, if the board has any tasks
    pub fn selected_row(&self) -> Option<TaskRow> {
        self.task_rows().into_iter().nth(self.cursor)
    }

    /// Task under the cursor
    pub fn selected_task(&self) -> Option<&Task> {
        let row = self.selected_row()?;
        self.board.find_task(&row.category, row.id)
    }

    /// Keep the cursor on an existing row
    pub fn clamp_cursor(&mut self) {
        let rows = self.task_rows().len();
        self.cursor = self.cursor.min(rows.saturating_sub(1));
    }

    /// Place the cursor on the row holding `id`, if it is shown
    pub fn move_cursor_to(&mut self, id: TaskId) {
        if let Some(index) = self.task_rows().iter().position(|row| row.id == id) {
            self.cursor = index;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Form / Edit Helpers
    // ─────────────────────────────────────────────────────────

    /// Whether Add would do anything other than a silent no-op
    pub fn can_add(&self) -> bool {
        !self.form.input.trim().is_empty() && self.form.selected_category.is_some()
    }

    pub fn is_editing(&self, id: TaskId) -> bool {
        self.editing.as_ref().is_some_and(|edit| edit.task_id == id)
    }

    /// Leave edit mode and clear the fields begin-edit loaded
    pub fn clear_edit(&mut self) {
        self.editing = None;
        self.form.selected_category = None;
    }

    // ─────────────────────────────────────────────────────────
    // Alert
    // ─────────────────────────────────────────────────────────

    pub fn show_alert(&mut self, alert: AlertState) {
        self.alert = Some(alert);
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        if self.ui_mode == UiMode::Alert {
            self.ui_mode = UiMode::Normal;
        }
    }

    // ─────────────────────────────────────────────────────────
    // Quit
    // ─────────────────────────────────────────────────────────

    /// Request quit - shows confirmation dialog while tasks exist
    pub fn request_quit(&mut self) {
        if !self.board.is_empty() && self.settings.behavior.confirm_quit {
            let task_count = self.board.task_count();
            self.confirm_dialog_state = Some(ConfirmDialogState::quit_confirmation(task_count));
            self.ui_mode = UiMode::ConfirmDialog;
        } else {
            self.phase = AppPhase::Quitting;
        }
    }

    /// Force quit without confirmation
    pub fn force_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Confirm quit (from confirmation dialog)
    pub fn confirm_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    /// Cancel quit (from confirmation dialog)
    pub fn cancel_quit(&mut self) {
        self.confirm_dialog_state = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Check if the app should quit
    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}
