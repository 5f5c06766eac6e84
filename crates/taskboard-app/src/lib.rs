//! taskboard-app - Application state and orchestration for Taskboard
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`Message`] the events, and
//! [`handler::update`] the transition function. It also owns settings
//! loading and the dialog state models the TUI renders.

pub mod config;
pub mod confirm_dialog;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use confirm_dialog::{AlertState, ConfirmDialogState};
pub use handler::UpdateResult;
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, EditSession, Focus, FormState, TaskRow, UiMode};
