//! Command handler modules for the CLI.

mod completions;
mod drag;
mod show;
mod split;
mod viewports;

use layerdeck_core::AppSettings;

use crate::cli::Commands;
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(settings: &AppSettings, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Show { scene, format } => show::cmd_show(&scene, format),
        Commands::Drag {
            scene,
            active,
            over,
            output,
        } => drag::cmd_drag(&scene, &active, over.as_deref(), output.as_deref()),
        Commands::Split {
            scene,
            panes,
            output,
        } => split::cmd_split(settings, &scene, panes, output.as_deref()),
        Commands::Viewports { scene, format } => viewports::cmd_viewports(&scene, format),
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
