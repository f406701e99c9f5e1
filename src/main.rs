//! Unbeatable Tic-Tac-Toe - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde_json::json;
use std::io;
use tracing::{debug, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use unbeatable_tictactoe::{Board, PlayConfig, analyze, choose_move, evaluate, terminal};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = PlayConfig::load_or_default(&cli.config)?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    debug!(?cli, "Parsed command line");

    match cli.command {
        Command::Play => run_play(&config),
        Command::Evaluate { board, json } => run_evaluate(&board, json),
        Command::BestMove { board, json } => run_best_move(&board, json),
        Command::Analyze { board, json } => run_analyze(&board, json),
    }
}

fn parse_board(notation: &str) -> Result<Board> {
    notation
        .parse()
        .with_context(|| format!("Invalid board {:?}", notation))
}

/// Run an interactive game on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: &PlayConfig) -> Result<()> {
    let stdin = io::stdin();
    terminal::run(config, stdin.lock(), io::stdout().lock())?;
    Ok(())
}

/// Print the verdict for a board
#[instrument]
fn run_evaluate(notation: &str, as_json: bool) -> Result<()> {
    let board = parse_board(notation)?;
    let verdict = evaluate(&board);

    if as_json {
        println!(
            "{}",
            serde_json::to_string(&json!({ "board": board.to_string(), "verdict": verdict }))?
        );
    } else {
        println!("{}\n\n{}", board.display(false), verdict);
    }
    Ok(())
}

/// Print the engine's move for a board
#[instrument]
fn run_best_move(notation: &str, as_json: bool) -> Result<()> {
    let board = parse_board(notation)?;
    let best = choose_move(&board);

    if as_json {
        let index = best.map(|pos| pos.to_index());
        println!(
            "{}",
            serde_json::to_string(&json!({ "board": board.to_string(), "move": index }))?
        );
    } else {
        match best {
            Some(pos) => println!("{} ({})", pos.to_index(), pos),
            None => println!("none"),
        }
    }
    Ok(())
}

/// Print every engine candidate with its score
#[instrument]
fn run_analyze(notation: &str, as_json: bool) -> Result<()> {
    let board = parse_board(notation)?;
    let report = analyze(&board);

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}\n", board.display(true));
    for candidate in report.candidates() {
        let marker = if Some(*candidate) == *report.best() { "*" } else { " " };
        println!(
            "{} {} {:<14} {:>3}",
            marker,
            candidate.position.to_index(),
            candidate.position.label(),
            candidate.score
        );
    }
    println!("\n{} nodes searched", report.nodes());
    Ok(())
}
