//! Strictly Minimax - Unified CLI
//!
//! Play tic-tac-toe against the engine or ask it to evaluate a position.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_minimax::{Board, FirstPlayer, PlayConfig, analyze, run_tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            computer_first,
        } => run_play(&config, computer_first),
        Command::Analyze { board, pretty } => run_analyze(&board, pretty),
    }
}

/// Run an interactive game, logging to a file so the terminal stays clean
fn run_play(config_path: &std::path::Path, computer_first: bool) -> Result<()> {
    let mut config = PlayConfig::load_or_default(config_path)?;
    if computer_first {
        config = config.with_first_player(FirstPlayer::Computer);
    }

    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file()))?;
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(config = ?config, "Starting Strictly Minimax");
    run_tui(&config)
}

/// Evaluate a board and print the report as JSON
fn run_analyze(board: &str, pretty: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(default_filter())
        .with_writer(std::io::stderr)
        .init();

    println!("{}", analyze_notation(board, pretty)?);
    Ok(())
}

/// Parse board notation, search it, and render the report as JSON
#[instrument(skip(pretty))]
fn analyze_notation(board: &str, pretty: bool) -> Result<String> {
    let board: Board = board.parse().context("Invalid board notation")?;
    info!(%board, "Analyzing position");

    let report = analyze(&board);
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

fn default_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,strictly_minimax=debug"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_minimax::{Move, SearchReport};

    #[test]
    fn test_analyze_notation_reports_winning_move() {
        let json = analyze_notation("XX./OO./...", false).unwrap();
        assert!(json.contains(r#""best":{"row":0,"col":2}"#));

        let report: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.best, Some(Move::new(0, 2)));
        assert_eq!(report.score, 10);
        assert_eq!(report.scored_moves.len(), 5);
    }

    #[test]
    fn test_analyze_notation_pretty_output_parses() {
        let json = analyze_notation("XOX/OXO/OXO", true).unwrap();
        assert!(json.contains('\n'));

        let report: SearchReport = serde_json::from_str(&json).unwrap();
        assert_eq!(report.best, None);
        assert!(report.scored_moves.is_empty());
    }

    #[test]
    fn test_analyze_notation_rejects_bad_notation() {
        let err = analyze_notation("XXZ/OO./...", false).unwrap_err();
        assert!(err.to_string().contains("Invalid board notation"));
        assert!(analyze_notation("XX./OO", false).is_err());
    }
}
