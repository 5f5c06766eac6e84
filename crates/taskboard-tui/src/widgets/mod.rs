//! Custom widget components

mod alert;
mod confirm_dialog;
mod header;
mod key_hints;
pub mod modal_overlay;
mod task_form;
mod task_list;
mod text;

pub use alert::AlertDialog;
pub use confirm_dialog::ConfirmDialog;
pub use header::MainHeader;
pub use key_hints::KeyHints;
pub use task_form::{TaskForm, ADD_BUTTON_LABEL, CATEGORY_PLACEHOLDER, INPUT_PLACEHOLDER};
pub use task_list::{TaskList, CHANGE_LABEL, DELETE_LABEL, EDIT_LABEL, EMPTY_BOARD_TEXT};
pub use text::{tail_to_width, truncate_to_width};
