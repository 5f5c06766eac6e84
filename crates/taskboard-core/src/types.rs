//! Shared lifecycle types

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Event loop is processing input
    #[default]
    Running,
    /// Application is shutting down
    Quitting,
}
