//! Command-line interface for oracle_server.

use clap::{Parser, Subcommand};
use oracle_tictactoe::Algorithm;

/// Tic-tac-toe oracle - optimal moves by exhaustive search
#[derive(Parser, Debug)]
#[command(name = "oracle_server")]
#[command(about = "Optimal tic-tac-toe moves over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP server
    Serve {
        /// Port to bind to (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Default search algorithm: minimax or alpha-beta (overrides ORACLE_ALGORITHM)
        #[arg(short, long)]
        algorithm: Option<Algorithm>,
    },

    /// Analyze one board given as JSON and print the response
    Solve {
        /// Board as JSON, e.g. '[["X","O","X"],["O","X","O"],["","",""]]'
        board: String,

        /// Search algorithm: minimax or alpha-beta
        #[arg(short, long, default_value_t = Algorithm::Minimax)]
        algorithm: Algorithm,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Serve {
            port: None,
            host: None,
            algorithm: None,
        }
    }
}
