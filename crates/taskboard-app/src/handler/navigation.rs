//! Focus, cursor and category selector handlers

use crate::state::AppState;

use super::UpdateResult;

pub fn handle_cursor_up(state: &mut AppState) -> UpdateResult {
    state.cursor = state.cursor.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_cursor_down(state: &mut AppState) -> UpdateResult {
    let rows = state.task_rows().len();
    if state.cursor + 1 < rows {
        state.cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_cursor_top(state: &mut AppState) -> UpdateResult {
    state.cursor = 0;
    UpdateResult::none()
}

pub fn handle_cursor_bottom(state: &mut AppState) -> UpdateResult {
    state.cursor = state.task_rows().len().saturating_sub(1);
    UpdateResult::none()
}

/// Select a category by name; unknown names clear the selection
pub fn handle_select_category(state: &mut AppState, name: Option<String>) -> UpdateResult {
    state.form.selected_category = name.filter(|n| state.board.category(n).is_some());
    UpdateResult::none()
}

/// Step through the selector options: none, then each category in order
pub fn handle_cycle_category(state: &mut AppState, forward: bool) -> UpdateResult {
    let options: Vec<Option<&str>> = std::iter::once(None)
        .chain(state.board.category_names().map(Some))
        .collect();

    let current = options
        .iter()
        .position(|opt| *opt == state.form.selected_category.as_deref())
        .unwrap_or(0);

    let len = options.len();
    let next = if forward {
        (current + 1) % len
    } else {
        (current + len - 1) % len
    };

    state.form.selected_category = options[next].map(str::to_string);
    UpdateResult::none()
}
