//! taskboard-tui - Terminal UI for Taskboard
//!
//! This crate provides the ratatui-based terminal interface: it polls
//! crossterm events, feeds them through the taskboard-app update loop, and
//! draws the board after every message.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry points
pub use render::view;
pub use runner::run;
