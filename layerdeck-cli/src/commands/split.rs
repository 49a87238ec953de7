//! Split mode toggle command.

use std::path::Path;

use layerdeck_core::{AppSettings, LayerDeck};

use crate::error::CliError;
use crate::util::{format_ids, load_state, save_state};

/// Split command handler
pub fn cmd_split(
    settings: &AppSettings,
    scene: &Path,
    panes: Option<usize>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let mut state = load_state(scene)?;
    let entering = !state.is_split();
    let pane_count = panes.unwrap_or(settings.split.pane_count);

    state
        .toggle_split(pane_count)
        .map_err(|e| CliError::State(e.to_string()))?;
    if entering {
        state.set_viewport_synced(settings.split.viewport_synced);
        tracing::debug!(
            synced = settings.split.viewport_synced,
            "Applied viewport sync setting to new split"
        );
        println!("Entered split mode with {pane_count} panes");
    } else {
        println!("Left split mode");
    }

    let mut deck = LayerDeck::new(state);
    let items = deck.dnd_items()?;
    for index in 0..items.pane_count() {
        if let Some(pane) = items.pane(index) {
            println!("Pane {index}: {}", format_ids(pane));
        }
    }

    if let Some(path) = output {
        save_state(deck.state(), path)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}
