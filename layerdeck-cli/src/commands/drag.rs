//! Drag gesture replay command.

use std::path::Path;

use layerdeck_core::{DndId, DragEvent, LayerDeck};

use crate::error::CliError;
use crate::util::{format_ids, load_state, save_state};

/// Drag command handler
///
/// Runs one start/end gesture, prints the commands that changed the scene
/// and the resulting containers.
pub fn cmd_drag(
    scene: &Path,
    active: &str,
    over: Option<&str>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let state = load_state(scene)?;
    let mut deck = LayerDeck::new(state);
    let active_id = DndId::parse(active);
    tracing::info!(scene = %scene.display(), active, ?over, "Replaying drag gesture");

    let mut applied = deck.handle_drag(DragEvent::Start {
        item_id: active_id.clone(),
    })?;
    if deck.active_layer().is_none() {
        println!("'{active}' is not a draggable layer");
    }
    applied.extend(deck.handle_drag(DragEvent::End {
        active_id,
        over_id: over.map(DndId::parse),
    })?);

    if applied.is_empty() {
        println!("No changes");
    } else {
        println!("Applied:");
        for command in &applied {
            println!("  {command}");
        }
    }

    let items = deck.dnd_items()?;
    println!("Order: {}", format_ids(items.sortable_list()));
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
