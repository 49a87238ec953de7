//! `LayerDeck` CLI - Command-line interface for `LayerDeck` scene files
//!
//! Inspects the drag-and-drop containers of a scene, replays drag gestures
//! against it, toggles split mode and reports per-pane viewports.

mod cli;
mod commands;
mod error;
mod util;

use clap::Parser;
use cli::Cli;
use layerdeck_core::init_tracing;

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    let settings = match util::load_settings(config_path) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    if !cli.quiet {
        let tracing_config = settings.logging.tracing_config(cli.verbose);
        if let Err(e) = init_tracing(&tracing_config) {
            eprintln!("Warning: logging disabled: {e}");
        }
    }

    let result = commands::dispatch(&settings, cli.command);

    if let Err(e) = result {
        if !cli.quiet {
            eprintln!("Error: {e}");
        }
        std::process::exit(e.exit_code());
    }
}
