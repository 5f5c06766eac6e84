//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title bar
    pub header: Rect,

    /// Add-task form (input, category selector, add button)
    pub form: Rect,

    /// Category sections and their tasks
    pub tasks: Rect,

    /// Key hints for the focused element
    pub footer: Rect,
}

/// Split the screen into header, form, task list and footer
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(3), // Form (glass container)
        Constraint::Fill(1),   // Tasks
        Constraint::Length(1), // Footer
    ])
    .split(area);

    ScreenAreas {
        header: chunks[0],
        form: chunks[1],
        tasks: chunks[2],
        footer: chunks[3],
    }
}

/// Form row areas, left to right
#[derive(Debug, Clone, Copy)]
pub struct FormAreas {
    pub input: Rect,
    pub category: Rect,
    pub button: Rect,
}

/// Split the inner form row: the input takes the slack
pub fn form_row(inner: Rect) -> FormAreas {
    let chunks = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Length(22),
        Constraint::Length(1),
        Constraint::Length(7),
    ])
    .split(inner);

    FormAreas {
        input: chunks[0],
        category: chunks[2],
        button: chunks[4],
    }
}
