//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};

/// Strictly Minimax - tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Tic-tac-toe against an exhaustive minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Path to the play configuration file
        #[arg(short, long, default_value = "strictly_minimax.toml")]
        config: std::path::PathBuf,

        /// Let the computer place the first mark
        #[arg(long)]
        computer_first: bool,
    },

    /// Print the engine's evaluation of a position as JSON
    Analyze {
        /// Board in row-major order, e.g. "XX./OO./..." (X = computer, O = human)
        board: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
}
