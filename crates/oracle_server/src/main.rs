//! Tic-tac-toe oracle - unified CLI
//!
//! Runs the HTTP service, or answers a single board from the command line.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use oracle_server::{MoveResponse, ServerConfig};
use oracle_tictactoe::{Algorithm, Board, analyze};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    match cli.command.unwrap_or_default() {
        Command::Serve {
            port,
            host,
            algorithm,
        } => run_server(host, port, algorithm).await,
        Command::Solve { board, algorithm } => solve(&board, algorithm),
    }
}

/// Run the HTTP server
async fn run_server(
    host: Option<String>,
    port: Option<u16>,
    algorithm: Option<Algorithm>,
) -> Result<()> {
    let config = ServerConfig::from_env()?.with_overrides(host, port, algorithm);
    info!(
        addr = %config.bind_addr(),
        algorithm = %config.algorithm(),
        "Starting tic-tac-toe oracle"
    );
    oracle_server::serve(config).await?;
    Ok(())
}

/// Analyze one board and print the JSON response to stdout
#[instrument(skip(board))]
fn solve(board: &str, algorithm: Algorithm) -> Result<()> {
    let board: Board = serde_json::from_str(board)
        .context("Board must be a 3x3 JSON array of \"\", \"X\" or \"O\"")?;
    info!(%algorithm, "Solving board\n{}", board);

    let response = MoveResponse::from_outcome(board, analyze(&board, algorithm));
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

/// Logs go to stderr so `solve` output stays clean JSON.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,oracle_server=debug")),
        )
        .with_writer(std::io::stderr)
        .init();
}
