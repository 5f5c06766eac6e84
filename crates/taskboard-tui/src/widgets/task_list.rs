//! Task list: one section per category, one row per task
//!
//! Each task row shows its text (or the edit field while it is being
//! edited) followed by `[Edit]`/`[Change]` and `[Delete]` buttons.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use taskboard_app::EditSession;
use taskboard_core::{Board, Category, Task};

use super::text::{tail_to_width, truncate_to_width};
use crate::theme::styles;

pub const EDIT_LABEL: &str = "[Edit]";
pub const CHANGE_LABEL: &str = "[Change]";
pub const DELETE_LABEL: &str = "[Delete]";
pub const EMPTY_BOARD_TEXT: &str = "No tasks yet. Add one above.";
const EMPTY_CATEGORY_TEXT: &str = "(no tasks)";
const INDENT: u16 = 2;

enum Row<'a> {
    Heading(&'a Category),
    Task(&'a Task),
    Empty,
}

pub struct TaskList<'a> {
    board: &'a Board,
    editing: Option<&'a EditSession>,
    cursor: usize,
    focused: bool,
    show_empty_categories: bool,
    show_task_ids: bool,
}

impl<'a> TaskList<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            editing: None,
            cursor: 0,
            focused: false,
            show_empty_categories: false,
            show_task_ids: false,
        }
    }

    pub fn editing(mut self, editing: Option<&'a EditSession>) -> Self {
        self.editing = editing;
        self
    }

    /// Cursor row index (counting task rows only) and whether the list has focus
    pub fn cursor(mut self, cursor: usize, focused: bool) -> Self {
        self.cursor = cursor;
        self.focused = focused;
        self
    }

    pub fn show_empty_categories(mut self, show: bool) -> Self {
        self.show_empty_categories = show;
        self
    }

    pub fn show_task_ids(mut self, show: bool) -> Self {
        self.show_task_ids = show;
        self
    }

    fn rows(&self) -> Vec<Row<'a>> {
        let mut rows = Vec::new();
        for category in self.board.categories() {
            if category.is_empty() && !self.show_empty_categories {
                continue;
            }
            rows.push(Row::Heading(category));
            if category.is_empty() {
                rows.push(Row::Empty);
            }
            rows.extend(category.tasks().iter().map(Row::Task));
        }
        rows
    }

    fn render_heading(category: &Category, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(category.name(), styles::accent_bold()),
            Span::styled(format!(" ({})", category.len()), styles::text_muted()),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }

    fn render_task(&self, task: &Task, area: Rect, buf: &mut Buffer, selected: bool) {
        let edit = self.editing.filter(|edit| edit.task_id == task.id);

        let buttons = Line::from(vec![
            Span::styled(
                if edit.is_some() { CHANGE_LABEL } else { EDIT_LABEL },
                styles::accent(),
            ),
            Span::raw(" "),
            Span::styled(DELETE_LABEL, styles::status_red()),
        ]);
        let buttons_width = buttons.width() as u16;

        // indent | text | gap | buttons
        let text_width = area.width.saturating_sub(INDENT + 1 + buttons_width);
        let text_x = area.x + INDENT;

        let mut spans = Vec::new();
        let mut remaining = text_width as usize;
        if self.show_task_ids {
            let id = format!("{} ", task.id);
            remaining = remaining.saturating_sub(id.width());
            spans.push(Span::styled(id, styles::text_muted()));
        }

        match edit {
            Some(edit) => {
                let visible = tail_to_width(&edit.buffer, remaining.saturating_sub(1));
                let used = visible.width() + 1;
                spans.push(Span::styled(visible.to_string(), styles::input_field(true)));
                spans.push(Span::styled("▏", styles::accent()));
                spans.push(Span::styled(
                    " ".repeat(remaining.saturating_sub(used)),
                    styles::input_field(true),
                ));
            }
            None => {
                spans.push(Span::styled(
                    truncate_to_width(&task.text, remaining),
                    styles::text_primary(),
                ));
            }
        }
        buf.set_line(text_x, area.y, &Line::from(spans), text_width);

        if area.width > buttons_width {
            let x = area.x + area.width - buttons_width;
            buf.set_line(x, area.y, &buttons, buttons_width);
        }

        if selected {
            buf.set_style(area, styles::focused_selected());
        }
    }
}

impl Widget for TaskList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(" Tasks ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let rows = self.rows();
        if rows.is_empty() {
            Paragraph::new(EMPTY_BOARD_TEXT)
                .style(styles::text_muted())
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        // Keep the cursor row on screen
        let height = inner.height as usize;
        let cursor_line = rows
            .iter()
            .enumerate()
            .filter(|(_, row)| matches!(row, Row::Task(_)))
            .nth(self.cursor)
            .map(|(line, _)| line);
        let offset = cursor_line
            .map(|line| (line + 1).saturating_sub(height))
            .unwrap_or(0);

        for (i, row) in rows.iter().enumerate().skip(offset).take(height) {
            let y = inner.y + (i - offset) as u16;
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            match row {
                Row::Heading(category) => Self::render_heading(category, row_area, buf),
                Row::Empty => {
                    let line = Line::from(Span::styled(EMPTY_CATEGORY_TEXT, styles::text_muted()));
                    buf.set_line(inner.x + INDENT, y, &line, inner.width.saturating_sub(INDENT));
                }
                Row::Task(task) => {
                    let selected = self.focused && cursor_line == Some(i);
                    self.render_task(task, row_area, buf, selected);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette;
    use taskboard_core::{IdGenerator, TaskId};

    fn board(tasks: &[(&str, &str)]) -> Board {
        let mut ids = IdGenerator::new();
        let mut board = Board::default();
        for (category, text) in tasks {
            board = board
                .with_task_added(category, text, ids.next_id())
                .expect("seed task");
        }
        board
    }

    #[test]
    fn test_empty_board_shows_hint() {
        let board = Board::default();
        let mut term = TestTerminal::new();
        term.render_widget(TaskList::new(&board), term.area());

        assert!(term.buffer_contains(EMPTY_BOARD_TEXT));
        assert!(!term.buffer_contains("Education"));
    }

    #[test]
    fn test_only_non_empty_categories_rendered() {
        let board = board(&[("Shopping", "Buy milk")]);
        let mut term = TestTerminal::new();
        term.render_widget(TaskList::new(&board), term.area());

        assert!(term.buffer_contains("Shopping (1)"));
        assert!(term.buffer_contains("Buy milk"));
        assert!(term.buffer_contains(EDIT_LABEL));
        assert!(term.buffer_contains(DELETE_LABEL));
        assert!(!term.buffer_contains("Education"));
        assert!(!term.buffer_contains("Work"));
    }

    #[test]
    fn test_show_empty_categories() {
        let board = board(&[("Shopping", "Buy milk")]);
        let mut term = TestTerminal::new();
        term.render_widget(
            TaskList::new(&board).show_empty_categories(true),
            term.area(),
        );

        assert!(term.buffer_contains("Education (0)"));
        assert!(term.buffer_contains("Work (0)"));
        assert!(term.buffer_contains(EMPTY_CATEGORY_TEXT));
    }

    #[test]
    fn test_tasks_listed_in_insertion_order() {
        let board = board(&[("Work", "first"), ("Work", "second")]);
        let mut term = TestTerminal::new();
        term.render_widget(TaskList::new(&board), term.area());

        let first = term.find_line("first").unwrap();
        let second = term.find_line("second").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_edited_row_shows_change_and_buffer() {
        let board = board(&[("Education", "Read"), ("Education", "Write")]);
        let edit = EditSession {
            task_id: TaskId::new(1),
            buffer: "Read more".into(),
        };
        let mut term = TestTerminal::new();
        term.render_widget(TaskList::new(&board).editing(Some(&edit)), term.area());

        let line = term.find_line("Read more").unwrap();
        assert!(term.line_contains(line, CHANGE_LABEL));
        let other = term.find_line("Write").unwrap();
        assert!(term.line_contains(other, EDIT_LABEL));
        assert!(!term.line_contains(other, CHANGE_LABEL));
    }

    #[test]
    fn test_task_ids_shown_when_enabled() {
        let board = board(&[("Work", "a")]);
        let mut term = TestTerminal::new();
        term.render_widget(TaskList::new(&board).show_task_ids(true), term.area());
        assert!(term.buffer_contains("#1 a"));
    }

    #[test]
    fn test_cursor_row_highlighted_only_when_focused() {
        let board = board(&[("Work", "a"), ("Work", "b")]);

        let mut term = TestTerminal::new();
        term.render_widget(TaskList::new(&board).cursor(1, true), term.area());
        let line = term.find_line(" b ").unwrap();
        assert_eq!(term.buffer()[(3, line)].bg, palette::ACCENT);

        let mut term = TestTerminal::new();
        term.render_widget(TaskList::new(&board).cursor(1, false), term.area());
        let line = term.find_line(" b ").unwrap();
        assert_ne!(term.buffer()[(3, line)].bg, palette::ACCENT);
    }

    #[test]
    fn test_list_scrolls_to_cursor() {
        let tasks: Vec<(&str, String)> = (0..30).map(|i| ("Work", format!("task-{i:02}"))).collect();
        let refs: Vec<(&str, &str)> = tasks.iter().map(|(c, t)| (*c, t.as_str())).collect();
        let board = board(&refs);

        let mut term = TestTerminal::with_size(60, 10);
        term.render_widget(TaskList::new(&board).cursor(29, true), term.area());

        assert!(term.buffer_contains("task-29"));
        assert!(!term.buffer_contains("task-00"));
    }

    #[test]
    fn test_long_text_truncated_before_buttons() {
        let long = "x".repeat(200);
        let board = board(&[("Work", long.as_str())]);
        let mut term = TestTerminal::with_size(50, 6);
        term.render_widget(TaskList::new(&board), term.area());

        assert!(term.buffer_contains("…"));
        assert!(term.buffer_contains(DELETE_LABEL));
    }
}
