//! # taskboard-core - Core Domain Types
//!
//! Foundation crate for Taskboard. Provides the task board domain model,
//! error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (thiserror, tracing, toml, dirs).
//!
//! ## Public API
//!
//! ### Board (`board`)
//! - [`Board`] - Ordered categories with pure add/delete/edit-text transitions
//! - [`Category`] - A named task list
//! - [`Task`], [`TaskId`] - A to-do item and its session-unique id
//! - [`IdGenerator`] - Monotonic id source
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use taskboard_core::prelude::*;
//! ```

pub mod board;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use board::{Board, Category, IdGenerator, Task, TaskId, DEFAULT_CATEGORIES};
pub use error::{Error, Result, ResultExt};
pub use types::AppPhase;
