//! Show scene containers command.

use std::path::Path;

use layerdeck_core::{LayerDeck, MapState};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::{format_ids, load_state, print_json};

/// Show scene containers command handler
pub fn cmd_show(scene: &Path, format: OutputFormat) -> Result<(), CliError> {
    let state = load_state(scene)?;
    let mut deck = LayerDeck::new(state);

    match format {
        OutputFormat::Json => print_json(deck.dnd_items()?),
        OutputFormat::Table => {
            let rows: Vec<(String, String)> = deck
                .dnd_items()?
                .containers()
                .map(|(container, items)| (container.to_string(), format_ids(items)))
                .collect();
            print_layers(deck.state());
            println!();
            println!("Containers:");
            for (container, items) in rows {
                println!("  {container:<14} {items}");
            }
            Ok(())
        }
    }
}

/// Print the layer table in global order
fn print_layers(state: &MapState) {
    println!("{:<12} {:<10} {:<8} LABEL", "ID", "TYPE", "VISIBLE");
    for id in state.layer_order() {
        if let Some(layer) = state.layer(id) {
            let visible = if layer.config.is_visible { "yes" } else { "no" };
            let layer_type = layer.layer_type.to_string();
            println!(
                "{:<12} {layer_type:<10} {visible:<8} {}",
                layer.id.as_str(),
                layer.config.label
            );
        }
    }
}
