//! trivia-server: HTTP API over a question store.
//!
//! Every response body is an [`envelope::Envelope`]. Core errors are mapped
//! onto statuses in [`error::ApiError`]; an exhausted quiz is a `200` with an
//! empty `data` object, not an error.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::routing::{delete, get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use trivia_core::QuestionStore;

pub mod config;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;

pub use config::TriviaConfig;
pub use state::AppState;

use routes::{categories, questions, quizzes};

/// Build the API router without middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/categories", get(categories::list_categories))
        .route(
            "/categories/{id}/questions",
            get(categories::questions_by_category),
        )
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search", post(questions::search))
        .route("/questions/{id}", delete(questions::delete_question))
        .route("/quizzes", post(quizzes::play_quiz))
        .method_not_allowed_fallback(routes::method_not_allowed)
        .fallback(routes::not_found)
        .with_state(state)
}

/// Build the full application: router plus CORS and request tracing.
pub fn app(state: AppState, config: &TriviaConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .max_age(Duration::from_secs(config.cors_max_age_secs));

    router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Serve the API on `config.bind` until Ctrl+C or SIGTERM.
pub async fn serve(config: TriviaConfig, store: Arc<dyn QuestionStore>) -> Result<()> {
    let state = AppState::new(store, config.questions_per_page);
    let app = app(state, &config);

    info!("Binding to {}", config.bind);
    let listener = TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    let address = listener.local_addr().context("listener has no local address")?;
    info!("Server running on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
