//! Header bar widget
//!
//! Application title on the left, task count on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

/// Main header showing the app title and how many tasks exist
pub struct MainHeader<'a> {
    title: &'a str,
    task_count: usize,
}

impl<'a> MainHeader<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            task_count: 0,
        }
    }

    pub fn task_count(mut self, task_count: usize) -> Self {
        self.task_count = task_count;
        self
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let count = match self.task_count {
            1 => "1 task".to_string(),
            n => format!("{} tasks", n),
        };

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.title, styles::accent_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        // Right-aligned count, dropped when it would overlap the title
        let title_width = self.title.width() as u16 + 2;
        let count_width = count.width() as u16 + 1;
        if title_width + count_width <= inner.width {
            let x = inner.x + inner.width - count_width;
            Span::styled(count, styles::text_secondary())
                .render(Rect::new(x, inner.y, count_width, 1), buf);
        }
    }
}
