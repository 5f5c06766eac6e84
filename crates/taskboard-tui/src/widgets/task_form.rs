//! Add-task form: text field, category selector and Add button

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use taskboard_app::{Focus, FormState};

use super::text::{tail_to_width, truncate_to_width};
use crate::layout;
use crate::theme::{palette, styles};

pub const INPUT_PLACEHOLDER: &str = "Add a new task...";
pub const CATEGORY_PLACEHOLDER: &str = "Select a category";
pub const ADD_BUTTON_LABEL: &str = "[ Add ]";

const CURSOR: &str = "▏";

pub struct TaskForm<'a> {
    form: &'a FormState,
    focus: Focus,
    can_add: bool,
}

impl<'a> TaskForm<'a> {
    pub fn new(form: &'a FormState, focus: Focus) -> Self {
        Self {
            form,
            focus,
            can_add: false,
        }
    }

    /// Whether Add currently has an effect; the button is dimmed otherwise
    pub fn can_add(mut self, can_add: bool) -> Self {
        self.can_add = can_add;
        self
    }

    fn form_focused(&self) -> bool {
        matches!(
            self.focus,
            Focus::Input | Focus::Category | Focus::AddButton
        )
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Input;
        let style = styles::input_field(focused);
        let width = area.width as usize;

        let line = if self.form.input.is_empty() {
            let mut spans = Vec::new();
            if focused {
                spans.push(Span::styled(CURSOR, styles::accent()));
            }
            spans.push(Span::styled(
                INPUT_PLACEHOLDER,
                styles::text_muted().bg(palette::INPUT_BG),
            ));
            Line::from(spans)
        } else if focused {
            let visible = tail_to_width(&self.form.input, width.saturating_sub(CURSOR.width()));
            Line::from(vec![
                Span::styled(visible, style),
                Span::styled(CURSOR, styles::accent()),
            ])
        } else {
            Line::from(Span::styled(
                truncate_to_width(&self.form.input, width),
                style,
            ))
        };

        Paragraph::new(line).style(style).render(area, buf);
    }

    fn render_category(&self, area: Rect, buf: &mut Buffer) {
        let focused = self.focus == Focus::Category;
        let (label, label_style) = match &self.form.selected_category {
            Some(name) => (name.as_str(), styles::text_primary()),
            None => (CATEGORY_PLACEHOLDER, styles::text_muted()),
        };
        let arrow_style = if focused {
            styles::accent_bold()
        } else {
            styles::text_muted()
        };
        let label = truncate_to_width(label, (area.width as usize).saturating_sub(4));

        let line = Line::from(vec![
            Span::styled("◂ ", arrow_style),
            Span::styled(label, label_style),
            Span::styled(" ▸", arrow_style),
        ]);
        Paragraph::new(line)
            .style(styles::input_field(focused))
            .alignment(Alignment::Center)
            .render(area, buf);
    }

    fn render_button(&self, area: Rect, buf: &mut Buffer) {
        let style = styles::button(self.focus == Focus::AddButton, self.can_add);
        Paragraph::new(Span::styled(ADD_BUTTON_LABEL, style)).render(area, buf);
    }
}

impl Widget for TaskForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.form_focused()).title(" New Task ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let areas = layout::form_row(inner);
        self.render_input(areas.input, buf);
        self.render_category(areas.category, buf);
        self.render_button(areas.button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    fn render(form: &FormState, focus: Focus, can_add: bool) -> TestTerminal {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(TaskForm::new(form, focus).can_add(can_add), term.area());
        term
    }

    #[test]
    fn test_empty_form_shows_placeholders() {
        let term = render(&FormState::default(), Focus::Input, false);
        assert!(term.buffer_contains(INPUT_PLACEHOLDER));
        assert!(term.buffer_contains(CATEGORY_PLACEHOLDER));
        assert!(term.buffer_contains(ADD_BUTTON_LABEL));
    }

    #[test]
    fn test_form_shows_input_and_category() {
        let form = FormState {
            input: "Buy milk".into(),
            selected_category: Some("Shopping".into()),
        };
        let term = render(&form, Focus::Category, true);
        assert!(term.buffer_contains("Buy milk"));
        assert!(term.buffer_contains("Shopping"));
        assert!(!term.buffer_contains(INPUT_PLACEHOLDER));
    }

    #[test]
    fn test_long_input_keeps_tail_visible_while_typing() {
        let form = FormState {
            input: format!("{}END", "x".repeat(100)),
            selected_category: None,
        };
        let term = render(&form, Focus::Input, false);
        assert!(term.buffer_contains("END"));
    }

    #[test]
    fn test_add_button_dimmed_when_add_would_do_nothing() {
        let term = render(&FormState::default(), Focus::AddButton, false);
        let line = 1;
        let x = (0..80)
            .find(|&x| term.buffer()[(x, line)].symbol() == "[")
            .expect("button rendered");
        let cell = &term.buffer()[(x, line)];
        assert!(cell.modifier.contains(Modifier::DIM));
    }

    #[test]
    fn test_add_button_highlighted_when_focused_and_ready() {
        let form = FormState {
            input: "Eggs".into(),
            selected_category: Some("Shopping".into()),
        };
        let term = render(&form, Focus::AddButton, true);
        let x = (0..80)
            .find(|&x| term.buffer()[(x, 1)].symbol() == "[")
            .expect("button rendered");
        let cell = &term.buffer()[(x, 1)];
        assert!(!cell.modifier.contains(Modifier::DIM));
        assert_eq!(cell.bg, crate::theme::palette::ACCENT);
    }
}
