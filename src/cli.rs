//! Command-line interface for tictactoe_classic.

use clap::Parser;
use std::path::PathBuf;

/// TicTacToe Classic - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_classic")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Write logs to this file. The TUI owns the terminal, so without
    /// this flag logging is disabled entirely.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
