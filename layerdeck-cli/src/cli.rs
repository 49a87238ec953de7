//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// `LayerDeck` command-line interface for map layer scenes
#[derive(Parser)]
#[command(name = "layerdeck-cli")]
#[command(author, version, about = "LayerDeck command-line interface")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "LAYERDECK_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the drag-and-drop containers of a scene
    #[command(about = "Show which layers each drop container lists")]
    Show {
        /// Scene file (.json, .toml, .yaml)
        scene: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Replay a drag gesture against a scene
    #[command(about = "Drag a layer onto a layer or pane and print the result")]
    Drag {
        /// Scene file (.json, .toml, .yaml)
        scene: PathBuf,

        /// Id of the dragged layer
        #[arg(short, long)]
        active: String,

        /// Drop target: a layer id, a pane index or `sortablelist`.
        /// Omit to release over empty space.
        #[arg(short, long)]
        over: Option<String>,

        /// Write the resulting scene to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Enter or leave split mode
    #[command(about = "Toggle split mode on a scene")]
    Split {
        /// Scene file (.json, .toml, .yaml)
        scene: PathBuf,

        /// Number of panes when entering split mode (defaults to the
        /// `split.pane_count` setting)
        #[arg(short, long)]
        panes: Option<usize>,

        /// Write the resulting scene to this file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Show the effective viewport of every pane
    #[command(about = "Report synced or disjoint viewports of a scene")]
    Viewports {
        /// Scene file (.json, .toml, .yaml)
        scene: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Generate shell completions
    #[command(about = "Generate shell completions for bash, zsh, fish, etc.")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Display as formatted table
    Table,
    /// Output as JSON
    Json,
}
