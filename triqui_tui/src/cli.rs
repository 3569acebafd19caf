//! Command-line interface for the triqui terminal host.

use clap::Parser;
use std::path::PathBuf;

/// Triqui - terminal tic-tac-toe with saved sessions
#[derive(Parser, Debug)]
#[command(name = "triqui")]
#[command(about = "Play triqui in the terminal, saving and resuming games", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Save file for the session
    #[arg(short, long, default_value = "partida.triqui")]
    pub save_path: PathBuf,

    /// Load the save file at startup instead of starting fresh
    #[arg(long)]
    pub resume: bool,

    /// Log file (tracing output is kept off the terminal)
    #[arg(long, default_value = "triqui_tui.log")]
    pub log_file: PathBuf,
}
