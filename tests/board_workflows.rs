//! Integration tests: full keyboard workflows through the update loop,
//! rendered with ratatui's TestBackend

use std::fs;

use ratatui::backend::TestBackend;
use ratatui::Terminal;
use tempfile::TempDir;

use taskboard_app::config::{load_settings, Settings};
use taskboard_app::process::process_message;
use taskboard_app::{AppState, Focus, InputKey, Message, UiMode};
use taskboard_tui::view;

fn press(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, InputKey::Char(c));
    }
}

/// Type `text`, choose the category `steps` options past "none", press Enter
fn add_by_keyboard(state: &mut AppState, text: &str, steps: usize) {
    state.focus = Focus::Input;
    type_text(state, text);
    press(state, InputKey::Tab);
    for _ in 0..steps {
        press(state, InputKey::Right);
    }
    press(state, InputKey::Enter);
}

fn screen(state: &AppState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    terminal.draw(|frame| view(frame, state)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn shopping_texts(state: &AppState) -> Vec<String> {
    state
        .board
        .category("Shopping")
        .unwrap()
        .tasks()
        .iter()
        .map(|t| t.text.clone())
        .collect()
}

#[test]
fn duplicate_task_raises_alert_and_keeps_one_copy() {
    let mut state = AppState::new();

    add_by_keyboard(&mut state, "Buy milk", 3);
    assert_eq!(shopping_texts(&state), vec!["Buy milk"]);
    assert_eq!(state.form.input, "");
    assert_eq!(state.form.selected_category, None);

    let text = screen(&state);
    assert!(text.contains("Shopping (1)"));
    assert!(!text.contains("Education"));

    add_by_keyboard(&mut state, "Buy milk", 3);
    assert_eq!(state.ui_mode, UiMode::Alert);
    assert_eq!(shopping_texts(&state), vec!["Buy milk"]);
    assert_eq!(state.form.input, "");
    assert_eq!(state.form.selected_category.as_deref(), Some("Shopping"));

    let text = screen(&state);
    assert!(text.contains("This task already exists in the selected category"));

    press(&mut state, InputKey::Esc);
    assert_eq!(state.ui_mode, UiMode::Normal);
    assert!(!screen(&state).contains("already exists"));
}

#[test]
fn edit_read_into_read_more() {
    let mut state = AppState::new();
    add_by_keyboard(&mut state, "Read", 1);

    state.focus = Focus::Tasks;
    press(&mut state, InputKey::Char('e'));

    let edit = state.editing.as_ref().unwrap();
    assert_eq!(edit.buffer, "Read");
    assert_eq!(state.form.selected_category.as_deref(), Some("Education"));
    assert!(screen(&state).contains("[Change]"));

    type_text(&mut state, " more");
    press(&mut state, InputKey::Enter);

    let education = state.board.category("Education").unwrap();
    assert_eq!(education.tasks()[0].text, "Read more");
    assert_eq!(education.tasks()[0].id.get(), 1);
    assert!(state.editing.is_none());

    let text = screen(&state);
    assert!(text.contains("Read more"));
    assert!(!text.contains("[Change]"));
}

#[test]
fn same_text_allowed_in_different_categories() {
    let mut state = AppState::new();

    add_by_keyboard(&mut state, "Plan", 1);
    add_by_keyboard(&mut state, "Plan", 2);

    assert_eq!(state.ui_mode, UiMode::Normal);
    assert_eq!(state.board.task_count(), 2);
    let text = screen(&state);
    assert!(text.contains("Education (1)"));
    assert!(text.contains("Work (1)"));
}

#[test]
fn blank_input_and_missing_category_are_ignored() {
    let mut state = AppState::new();

    // No category chosen
    type_text(&mut state, "Orphan");
    press(&mut state, InputKey::Enter);
    assert!(state.board.is_empty());
    assert_eq!(state.form.input, "Orphan");

    // Whitespace only
    press(&mut state, InputKey::CharCtrl('u'));
    add_by_keyboard(&mut state, "   ", 2);
    assert!(state.board.is_empty());
    assert_eq!(state.ui_mode, UiMode::Normal);
}

#[test]
fn delete_then_add_never_reuses_ids() {
    let mut state = AppState::new();
    add_by_keyboard(&mut state, "one", 2);
    add_by_keyboard(&mut state, "two", 2);

    state.focus = Focus::Tasks;
    press(&mut state, InputKey::Home);
    press(&mut state, InputKey::Char('d'));
    press(&mut state, InputKey::Char('d'));
    assert!(state.board.is_empty());

    add_by_keyboard(&mut state, "three", 2);
    let work = state.board.category("Work").unwrap();
    assert_eq!(work.tasks()[0].id.get(), 3);
}

#[test]
fn quitting_with_tasks_asks_first() {
    let mut state = AppState::new();
    add_by_keyboard(&mut state, "Eggs", 3);

    state.focus = Focus::Tasks;
    press(&mut state, InputKey::Char('q'));
    assert_eq!(state.ui_mode, UiMode::ConfirmDialog);
    assert!(screen(&state).contains("You have 1 task."));

    press(&mut state, InputKey::Char('n'));
    assert!(!state.should_quit());

    press(&mut state, InputKey::Char('q'));
    press(&mut state, InputKey::Char('y'));
    assert!(state.should_quit());
}

#[test]
fn configured_categories_drive_the_board() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        r#"
[board]
categories = ["Home", "Garden"]

[ui]
title = "Chores"
show_empty_categories = true
"#,
    )
    .unwrap();

    let settings = load_settings(&path);
    assert!(settings.validate().is_ok());
    let mut state = AppState::with_settings(settings);

    let text = screen(&state);
    assert!(text.contains("Chores"));
    assert!(text.contains("Home (0)"));
    assert!(text.contains("Garden (0)"));

    add_by_keyboard(&mut state, "Weed", 2);
    assert_eq!(state.board.category("Garden").unwrap().len(), 1);
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[board\ncategories = oops").unwrap();

    assert_eq!(load_settings(&path), Settings::default());
}
