//! Main TUI runner - entry point and event loop

use taskboard_app::config::Settings;
use taskboard_app::process;
use taskboard_app::state::AppState;
use taskboard_core::prelude::*;

use super::{event, render, terminal};

/// Run the TUI until the user quits
pub fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    info!(
        "Starting board with categories: {}",
        settings.board.categories.join(", ")
    );

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mut state = AppState::with_settings(settings);

    let result = run_loop(&mut term, &mut state);

    let restored = ratatui::try_restore().map_err(|e| Error::TerminalRestore(e.to_string()));

    info!("Board closed with {} tasks", state.board.task_count());
    result.and(restored)
}

fn run_loop(terminal: &mut ratatui::DefaultTerminal, state: &mut AppState) -> Result<()> {
    while !state.should_quit() {
        terminal.draw(|frame| render::view(frame, state))?;

        if let Some(message) = event::poll()? {
            process::process_message(state, message);
        }
    }

    Ok(())
}
