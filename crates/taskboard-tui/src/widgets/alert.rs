//! Blocking alert modal

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use taskboard_app::AlertState;

use super::modal_overlay;
use crate::theme::styles;

const MIN_WIDTH: u16 = 30;

pub struct AlertDialog<'a> {
    state: &'a AlertState,
}

impl<'a> AlertDialog<'a> {
    pub fn new(state: &'a AlertState) -> Self {
        Self { state }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Borders plus one cell of padding each side
        let width = (self.state.message.width() as u16 + 6).max(MIN_WIDTH);
        let modal = modal_overlay::prepare_modal(buf, area, width, 7);

        let title = format!(" {} ", self.state.title);
        let block = styles::modal_block(&title).title_alignment(Alignment::Center);
        let inner = block.inner(modal);
        block.render(modal, buf);

        let chunks = Layout::vertical([
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Message
            Constraint::Length(1), // OK
        ])
        .split(inner);

        Paragraph::new(self.state.message.as_str())
            .style(styles::text_bright())
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(chunks[1], buf);

        Paragraph::new(Line::from(Span::styled("[ OK ]", styles::focused_selected())))
            .alignment(Alignment::Center)
            .render(chunks[2], buf);
    }
}
