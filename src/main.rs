//! Unbeatable tic-tac-toe - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;
use unbeatable_tictactoe::terminal::{LineSource, TerminalGame};
use unbeatable_tictactoe::{Board, COMPUTER, HUMAN, PlayConfig, Position, analyze, best_candidate};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            show_analysis,
        } => run_play(config, show_analysis),
        Command::Analyze { board, json } => run_analyze(&board, json),
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins over the configured filter.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
fn run_play(config_path: Option<PathBuf>, show_analysis: bool) -> Result<()> {
    let config = PlayConfig::load(config_path.as_deref())?;
    let config = if show_analysis {
        config.with_show_analysis(true)
    } else {
        config
    };
    init_tracing(config.log_filter());

    info!(?config, "Starting play");

    let stdin = io::stdin();
    let source = LineSource::new("stdin", stdin.lock());
    let stdout = io::stdout();
    let mut game = TerminalGame::new(source, stdout.lock(), config);
    game.run()?;
    Ok(())
}

/// Print the best move for `O` on a given board
#[instrument]
fn run_analyze(notation: &str, as_json: bool) -> Result<()> {
    init_tracing("warn");

    let mut board: Board = notation.parse().context("Failed to read board")?;

    if board.outcome().is_terminal() {
        bail!("Board is already decided: {}", board.outcome());
    }
    if board.count(HUMAN) != board.count(COMPUTER) + 1 {
        bail!("It is {}'s turn; the engine only plays {}", HUMAN, COMPUTER);
    }

    let candidates = analyze(&mut board)?;
    let result = best_candidate(&candidates);

    let mut out = BufWriter::new(io::stdout().lock());
    if as_json {
        let report = json!({
            "board": board.notation(),
            "result": result,
            "candidates": candidates,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        writeln!(out, "{}\n", board)?;
        for candidate in &candidates {
            writeln!(
                out,
                "  ({}, {}) scores {}",
                candidate.row + 1,
                candidate.col + 1,
                candidate.score
            )?;
        }
        if let Some((row, col)) = result.best_move {
            let label = Position::from_coords(row, col)
                .map(|p| p.label())
                .unwrap_or("?");
            writeln!(
                out,
                "Best move for {}: {} ({} {}), score {}",
                COMPUTER,
                label,
                row + 1,
                col + 1,
                result.score
            )?;
        }
    }
    out.flush()?;
    Ok(())
}
