//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{board, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns an optional follow-up message
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::RequestQuit => {
            state.request_quit();
            UpdateResult::none()
        }

        Message::Quit => {
            state.force_quit();
            UpdateResult::none()
        }

        Message::ConfirmQuit => {
            state.confirm_quit();
            UpdateResult::none()
        }

        Message::CancelQuit => {
            state.cancel_quit();
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        // Nothing animates; the tick only drives redraws
        Message::Tick => UpdateResult::none(),

        // ─────────────────────────────────────────────────────────
        // Form Messages
        // ─────────────────────────────────────────────────────────
        Message::InputChanged { text } => {
            state.form.input = text;
            UpdateResult::none()
        }
        Message::SelectCategory(name) => navigation::handle_select_category(state, name),
        Message::NextCategory => navigation::handle_cycle_category(state, true),
        Message::PreviousCategory => navigation::handle_cycle_category(state, false),

        // ─────────────────────────────────────────────────────────
        // Task Messages
        // ─────────────────────────────────────────────────────────
        Message::AddTask => board::handle_add_task(state),
        Message::DeleteTask { category, id } => board::handle_delete_task(state, &category, id),
        Message::BeginEdit { category, id } => board::handle_begin_edit(state, &category, id),
        Message::EditTextChanged { text } => board::handle_edit_text_changed(state, text),
        Message::CommitEdit { category, id } => board::handle_commit_edit(state, &category, id),
        Message::CancelEdit => board::handle_cancel_edit(state),

        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => {
            state.focus = state.focus.next();
            UpdateResult::none()
        }
        Message::FocusPrevious => {
            state.focus = state.focus.previous();
            UpdateResult::none()
        }
        Message::CursorUp => navigation::handle_cursor_up(state),
        Message::CursorDown => navigation::handle_cursor_down(state),
        Message::CursorTop => navigation::handle_cursor_top(state),
        Message::CursorBottom => navigation::handle_cursor_bottom(state),
    }
}
