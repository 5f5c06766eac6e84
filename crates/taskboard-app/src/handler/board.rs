//! Task board handlers: add, delete, begin/commit/cancel edit

use tracing::{debug, info, warn};

use crate::confirm_dialog::AlertState;
use crate::state::{AppState, EditSession};
use taskboard_core::TaskId;

use super::UpdateResult;

/// Append the pending input to the selected category
///
/// Blank input or a missing selection is a silent no-op. A duplicate raises
/// the blocking alert, clears the input and keeps the selection.
pub fn handle_add_task(state: &mut AppState) -> UpdateResult {
    if !state.can_add() {
        debug!("Add ignored: input blank or no category selected");
        return UpdateResult::none();
    }
    let Some(category) = state.form.selected_category.clone() else {
        return UpdateResult::none();
    };

    let id = state.ids.peek();
    match state.board.with_task_added(&category, &state.form.input, id) {
        Ok(board) => {
            state.ids.next_id();
            state.board = board;
            info!("Added task {} to {}", id, category);
            state.form.clear();
            state.move_cursor_to(id);
        }
        Err(err) if err.is_user_facing() => {
            info!("Rejected duplicate task in {}", category);
            state.form.input.clear();
            state.show_alert(AlertState::from_error(&err));
        }
        Err(err) => {
            warn!("Add ignored: {}", err);
        }
    }
    UpdateResult::none()
}

/// Remove a task; absent tasks leave the board untouched
pub fn handle_delete_task(state: &mut AppState, category: &str, id: TaskId) -> UpdateResult {
    if state.board.find_task(category, id).is_none() {
        debug!("Delete ignored: no task {} in {}", id, category);
        return UpdateResult::none();
    }

    state.board = state.board.without_task(category, id);
    info!("Deleted task {} from {}", id, category);

    if state.is_editing(id) {
        state.clear_edit();
    }
    state.clamp_cursor();
    UpdateResult::none()
}

/// Enter edit mode for a task, replacing any session already open
pub fn handle_begin_edit(state: &mut AppState, category: &str, id: TaskId) -> UpdateResult {
    let task = match state.board.task(category, id) {
        Ok(task) => task,
        Err(e) => {
            debug!("Begin edit ignored: {}", e);
            return UpdateResult::none();
        }
    };

    if let Some(previous) = &state.editing {
        if previous.task_id != id {
            debug!("Abandoning edit of task {}", previous.task_id);
        }
    }

    state.editing = Some(EditSession {
        task_id: id,
        buffer: task.text.clone(),
    });
    state.form.selected_category = Some(task.category.clone());
    state.move_cursor_to(id);
    UpdateResult::none()
}

pub fn handle_edit_text_changed(state: &mut AppState, text: String) -> UpdateResult {
    if let Some(edit) = state.editing.as_mut() {
        edit.buffer = text;
    }
    UpdateResult::none()
}

/// Save the edit buffer verbatim and leave edit mode
pub fn handle_commit_edit(state: &mut AppState, category: &str, id: TaskId) -> UpdateResult {
    let buffer = state
        .editing
        .as_ref()
        .map(|edit| edit.buffer.clone())
        .unwrap_or_default();

    if state.board.find_task(category, id).is_some() {
        state.board = state.board.with_task_text(category, id, &buffer);
        info!("Updated task {} in {}", id, category);
    } else {
        debug!("Commit found no task {} in {}", id, category);
    }

    state.clear_edit();
    UpdateResult::none()
}

pub fn handle_cancel_edit(state: &mut AppState) -> UpdateResult {
    if state.editing.is_some() {
        state.clear_edit();
    }
    UpdateResult::none()
}
