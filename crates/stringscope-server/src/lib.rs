//! stringscope-server — HTTP/JSON transport for the stringscope engine.
//!
//! | Method & path                                  | Handler                              |
//! |------------------------------------------------|--------------------------------------|
//! | `GET /`                                        | endpoint listing                     |
//! | `GET /health`                                  | liveness                             |
//! | `POST /strings`                                | analyse and store (create-or-fetch)  |
//! | `GET /strings`                                 | structured filter                    |
//! | `GET /strings/filter-by-natural-language`      | natural-language filter              |
//! | `GET /strings/{id_or_value}`                   | single record                        |
//! | `DELETE /strings/{id_or_value}`                | delete                               |

pub mod dto;
pub mod error;
mod routes;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use stringscope_core::config::ServerConfig;
use stringscope_core::StringStore;
use tokio::net::TcpListener;

pub use error::ApiError;

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn StringStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn StringStore>) -> Self {
        Self { store }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::root))
        .route("/health", get(routes::health))
        .route(
            "/strings",
            get(routes::list_strings).post(routes::create_string),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(routes::filter_by_natural_language),
        )
        .route(
            "/strings/{key}",
            get(routes::get_string).delete(routes::delete_string),
        )
        .with_state(state)
}

/// Bind to `config.bind_addr()` and serve until Ctrl-C.
pub async fn serve(config: &ServerConfig, store: Arc<dyn StringStore>) -> anyhow::Result<()> {
    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "stringscope listening");

    axum::serve(listener, router(AppState::new(store)))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
