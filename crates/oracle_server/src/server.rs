//! HTTP server setup.

use crate::api::{ApiError, MoveQuery, MoveResponse};
use crate::config::ServerConfig;
use axum::extract::{Query, Request, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use oracle_tictactoe::{Algorithm, Board, analyze};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, instrument, warn};

/// Shared state handed to every handler.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    algorithm: Algorithm,
}

impl AppState {
    /// State whose requests default to `algorithm`.
    pub fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/move", post(optimal_move))
        .route("/health", get(health))
        .layer(ServiceBuilder::new().layer(cors).map_request(log_request))
        .with_state(state)
}

/// Binds `config`'s address and serves until Ctrl+C.
#[instrument(skip(config), fields(addr = %config.bind_addr(), algorithm = %config.algorithm()))]
pub async fn serve(config: ServerConfig) -> std::io::Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server ready at http://{}/", config.bind_addr());

    axum::serve(listener, router(AppState::new(*config.algorithm())))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

fn log_request(req: Request) -> Request {
    info!(method = %req.method(), uri = %req.uri(), "Incoming HTTP request");
    req
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Could not listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}

/// Returns the optimal move for the submitted board.
#[instrument(skip(state, board), fields(algorithm = tracing::field::Empty))]
async fn optimal_move(
    State(state): State<AppState>,
    Query(query): Query<MoveQuery>,
    Json(board): Json<Board>,
) -> Result<Json<MoveResponse>, ApiError> {
    let algorithm = query.algorithm.unwrap_or(state.algorithm);
    tracing::Span::current().record("algorithm", tracing::field::display(algorithm));

    // The search is CPU-bound; each task owns its own copy of the board.
    let outcome = tokio::task::spawn_blocking(move || analyze(&board, algorithm))
        .await
        .map_err(|e| {
            error!(error = %e, "Search task failed");
            ApiError::SearchFailed(e.to_string())
        })?;

    if let Err(game_over) = &outcome {
        info!(outcome = %game_over, "Refusing to search a decided game");
    }

    Ok(Json(MoveResponse::from_outcome(board, outcome)))
}

async fn health() -> &'static str {
    "ok"
}
