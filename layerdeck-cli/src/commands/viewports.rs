//! Split viewport report command.

use std::path::Path;

use layerdeck_core::{AuxPanelProps, ViewportState};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::util::{load_state, print_json};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViewportReport {
    is_split: bool,
    is_disjoint: bool,
    aux_panel_count: usize,
    viewports: Vec<ViewportState>,
    aux_panels: Vec<AuxPanelProps>,
}

/// Viewports command handler
pub fn cmd_viewports(scene: &Path, format: OutputFormat) -> Result<(), CliError> {
    let state = load_state(scene)?;
    let policy = state.sync_policy();
    let report = ViewportReport {
        is_split: policy.is_split,
        is_disjoint: policy.is_disjoint(),
        aux_panel_count: policy.aux_panel_count(),
        viewports: policy.effective_viewports(state.viewport(), state.split_maps()),
        aux_panels: policy.aux_panels(state.viewport(), state.split_maps()),
    };

    match format {
        OutputFormat::Json => print_json(&report),
        OutputFormat::Table => {
            let mode = if report.is_disjoint { "disjoint" } else { "synced" };
            println!("Mode:             {mode}");
            println!("Auxiliary panels: {}", report.aux_panel_count);
            println!();
            println!("{:<6} {:>10} {:>11} {:>6}", "PANE", "LATITUDE", "LONGITUDE", "ZOOM");
            for (index, view) in report.viewports.iter().enumerate() {
                println!(
                    "{index:<6} {:>10.4} {:>11.4} {:>6.2}",
                    view.latitude, view.longitude, view.zoom
                );
            }
            Ok(())
        }
    }
}
