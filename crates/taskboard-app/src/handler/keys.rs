//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, EditSession, Focus, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Alert => handle_key_alert(key),
        UiMode::ConfirmDialog => handle_key_confirm_dialog(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

/// Handle key events while the blocking alert is shown
fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in the quit confirmation dialog
fn handle_key_confirm_dialog(key: InputKey) -> Option<Message> {
    match key {
        // 'q' allows double-tap "qq" as quick quit shortcut
        InputKey::Char('y' | 'Y' | 'q') | InputKey::Enter => Some(Message::ConfirmQuit),
        InputKey::Char('n' | 'N') | InputKey::Esc => Some(Message::CancelQuit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events in normal mode
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Force quit (bypass confirmation) - Ctrl+C for emergency exit
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::Tab => return Some(Message::FocusNext),
        InputKey::BackTab => return Some(Message::FocusPrevious),
        _ => {}
    }

    match state.focus {
        Focus::Input => handle_key_input(state, key),
        Focus::Category => handle_key_category(key),
        Focus::AddButton => handle_key_add_button(key),
        Focus::Tasks => match &state.editing {
            Some(edit) => handle_key_tasks_editing(state, edit, key),
            None => handle_key_tasks(state, key),
        },
    }
}

/// Text field for the new task
fn handle_key_input(state: &AppState, key: InputKey) -> Option<Message> {
    let text = edit_text(&state.form.input, key)?;
    match text {
        TextEdit::Changed(text) => Some(Message::InputChanged { text }),
        TextEdit::Submit => Some(Message::AddTask),
    }
}

fn handle_key_category(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Left | InputKey::Up => Some(Message::PreviousCategory),
        InputKey::Right | InputKey::Down => Some(Message::NextCategory),
        InputKey::Backspace | InputKey::Delete => Some(Message::SelectCategory(None)),
        InputKey::Enter => Some(Message::AddTask),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

fn handle_key_add_button(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(Message::AddTask),
        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Task list with no edit session open
fn handle_key_tasks(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::Home => Some(Message::CursorTop),
        InputKey::End => Some(Message::CursorBottom),

        InputKey::Enter | InputKey::Char('e') => {
            let row = state.selected_row()?;
            Some(Message::BeginEdit {
                category: row.category,
                id: row.id,
            })
        }

        InputKey::Char('d') | InputKey::Delete => {
            let row = state.selected_row()?;
            Some(Message::DeleteTask {
                category: row.category,
                id: row.id,
            })
        }

        InputKey::Char('q') | InputKey::Esc => Some(Message::RequestQuit),
        _ => None,
    }
}

/// Task list while a task is being edited
fn handle_key_tasks_editing(
    state: &AppState,
    edit: &EditSession,
    key: InputKey,
) -> Option<Message> {
    match key {
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Esc => Some(Message::CancelEdit),

        InputKey::Delete => {
            let row = state.selected_row()?;
            Some(Message::DeleteTask {
                category: row.category,
                id: row.id,
            })
        }

        // Enter on the edited row saves; on any other row it moves the session
        InputKey::Enter => {
            let row = state.selected_row()?;
            if row.id == edit.task_id {
                Some(Message::CommitEdit {
                    category: row.category,
                    id: row.id,
                })
            } else {
                Some(Message::BeginEdit {
                    category: row.category,
                    id: row.id,
                })
            }
        }

        _ => match edit_text(&edit.buffer, key)? {
            TextEdit::Changed(text) => Some(Message::EditTextChanged { text }),
            TextEdit::Submit => None,
        },
    }
}

enum TextEdit {
    Changed(String),
    Submit,
}

/// Shared line-editing keys for the input field and the edit buffer
fn edit_text(current: &str, key: InputKey) -> Option<TextEdit> {
    match key {
        InputKey::Enter => Some(TextEdit::Submit),
        InputKey::Backspace => {
            let mut text = current.to_string();
            text.pop();
            Some(TextEdit::Changed(text))
        }
        InputKey::CharCtrl('u') => Some(TextEdit::Changed(String::new())),
        _ => {
            let c = key.printable()?;
            let mut text = current.to_string();
            text.push(c);
            Some(TextEdit::Changed(text))
        }
    }
}
