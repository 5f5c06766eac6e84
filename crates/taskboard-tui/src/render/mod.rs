//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::palette;
use crate::{layout, widgets};
use taskboard_app::state::{AppState, Focus, UiMode};

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; modals are drawn last, over the board.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    frame.render_widget(
        widgets::MainHeader::new(&state.settings.ui.title).task_count(state.board.task_count()),
        areas.header,
    );

    frame.render_widget(
        widgets::TaskForm::new(&state.form, state.focus).can_add(state.can_add()),
        areas.form,
    );

    frame.render_widget(
        widgets::TaskList::new(&state.board)
            .editing(state.editing.as_ref())
            .cursor(state.cursor, state.focus == Focus::Tasks)
            .show_empty_categories(state.settings.ui.show_empty_categories)
            .show_task_ids(state.settings.ui.show_task_ids),
        areas.tasks,
    );

    frame.render_widget(widgets::KeyHints::new(state), areas.footer);

    match state.ui_mode {
        UiMode::Alert => {
            if let Some(alert) = &state.alert {
                frame.render_widget(widgets::AlertDialog::new(alert), area);
            }
        }
        UiMode::ConfirmDialog => {
            if let Some(dialog) = &state.confirm_dialog_state {
                frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
            }
        }
        UiMode::Normal => {}
    }
}
