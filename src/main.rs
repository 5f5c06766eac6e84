//! Taskboard - A categorized to-do list for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::{Path, PathBuf};

use clap::Parser;
use taskboard_app::config::{self, Settings};
use taskboard_core::prelude::*;
use taskboard_core::{logging, DEFAULT_CATEGORIES};

/// Taskboard - A categorized to-do list for the terminal
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(about = "A categorized to-do list for the terminal", long_about = None)]
struct Args {
    /// Settings file [default: <config_dir>/taskboard/config.toml]
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Category to show; repeat for several. Replaces the configured list.
    #[arg(long = "category", value_name = "NAME")]
    categories: Vec<String>,

    /// Write a default settings file (if none exists) and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    logging::init()?;

    let config_path = args.config.unwrap_or_else(config::default_config_path);

    if args.init_config {
        config::init_config_file(&config_path).context("Failed to write default config")?;
        println!("Config file: {}", config_path.display());
        return Ok(());
    }

    let settings = resolve_settings(&config_path, args.categories);

    let result = taskboard_tui::run(settings);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
        if e.is_fatal() {
            eprintln!(
                "taskboard: {} (log: {})",
                e,
                logging::get_current_log_file().display()
            );
        }
    }

    info!("Taskboard exiting");
    result
}

/// Load settings, apply `--category` overrides, and fall back to the default
/// categories when the resulting list is unusable
fn resolve_settings(config_path: &Path, categories: Vec<String>) -> Settings {
    let mut settings = config::load_settings(config_path);

    if !categories.is_empty() {
        settings.board.categories = categories;
    }

    if let Err(e) = settings.validate() {
        warn!("{}; using default categories", e);
        settings.board.categories = DEFAULT_CATEGORIES.iter().map(|s| s.to_string()).collect();
    }

    settings
}
