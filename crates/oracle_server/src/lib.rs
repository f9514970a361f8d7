//! HTTP front end for the tic-tac-toe oracle.
//!
//! # Architecture
//!
//! - **Config**: host, port and default algorithm from the environment
//! - **API**: request and response bodies for `POST /move`
//! - **Server**: axum router with CORS and request logging
//!
//! # Example
//!
//! ```no_run
//! use oracle_server::{ServerConfig, serve};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! serve(config).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod api;
mod config;
mod server;

pub use api::{ApiError, ErrorBody, MoveQuery, MoveResponse};
pub use config::{ConfigError, DEFAULT_HOST, DEFAULT_PORT, ServerConfig};
pub use server::{AppState, router, serve};
