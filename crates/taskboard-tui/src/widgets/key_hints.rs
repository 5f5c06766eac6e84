//! Footer key hints for whatever currently has focus

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use taskboard_app::{AppState, Focus, UiMode};

use crate::theme::styles;

/// Key hints for the current mode and focus
pub struct KeyHints<'a> {
    state: &'a AppState,
}

impl<'a> KeyHints<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.state.ui_mode {
            UiMode::Alert => &[("Enter", "dismiss")],
            UiMode::ConfirmDialog => &[("y", "quit"), ("n", "cancel")],
            UiMode::Normal => match self.state.focus {
                Focus::Input => &[
                    ("Enter", "add"),
                    ("Ctrl+U", "clear"),
                    ("Tab", "next"),
                    ("Ctrl+C", "quit"),
                ],
                Focus::Category => &[
                    ("←/→", "choose"),
                    ("Del", "clear"),
                    ("Enter", "add"),
                    ("Tab", "next"),
                    ("q", "quit"),
                ],
                Focus::AddButton => &[("Enter", "add"), ("Tab", "next"), ("q", "quit")],
                Focus::Tasks if self.state.editing.is_some() => &[
                    ("Enter", "save"),
                    ("Esc", "cancel"),
                    ("↑/↓", "move"),
                    ("Del", "delete"),
                ],
                Focus::Tasks => &[
                    ("↑/↓", "move"),
                    ("e", "edit"),
                    ("d", "delete"),
                    ("Tab", "next"),
                    ("q", "quit"),
                ],
            },
        }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_muted()));
            }
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
