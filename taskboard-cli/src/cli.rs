//! CLI definition for the Taskboard command-line interface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Taskboard - inspect kanban boards and replay drag gestures.
///
/// Boards come from a file on disk or from the board API
/// (`GET {api_root}/v1/boards/{id}`).
#[derive(Parser, Debug)]
#[command(name = "taskboard")]
#[command(version)]
#[command(about = "Inspect kanban boards and replay drag gestures")]
#[command(
    long_about = "Taskboard loads a kanban board, puts its columns and cards in display order, \
    and replays drag-and-drop gestures against it.\n\n\
    Configuration is read from ~/.taskboard/config.* and ./.taskboard/config.*.\n\n\
    Environment variables:\n  \
    TASKBOARD_API_ROOT   Override the board API root\n  \
    TASKBOARD_SENSORS__POINTER__DISTANCE  Override the pointer activation distance\n  \
    RUST_LOG             Log filter when --debug is not given"
)]
pub struct Cli {
    /// Enable debug output to stderr
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Extra configuration file, applied above the discovered ones
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Board API root, overriding every configuration source
    #[arg(long, global = true, value_name = "URL")]
    pub api_root: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a board and print it in display order
    Show {
        #[command(flatten)]
        source: BoardSource,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Replay a drag script against a board and print the final order
    Replay {
        /// Board file (JSON or YAML)
        #[arg(long, value_name = "PATH")]
        file: PathBuf,
        /// Drag script (JSON or YAML list of start/over/end steps)
        #[arg(long, value_name = "PATH")]
        script: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration
    Config,
}

/// Where `show` gets its board from
#[derive(Args, Debug, Clone)]
pub struct BoardSource {
    /// Board file (JSON or YAML)
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with = "board",
        required_unless_present = "board"
    )]
    pub file: Option<PathBuf>,
    /// Board id, fetched from the API (or from --dir)
    #[arg(long, value_name = "ID")]
    pub board: Option<String>,
    /// Directory of `<id>.json|yaml|yml` board files to use instead of the API
    #[arg(long, value_name = "DIR", requires = "board", conflicts_with = "file")]
    pub dir: Option<PathBuf>,
}
