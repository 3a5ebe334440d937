//! HTTP serving layer.
//!
//! One operator, one form: `POST /scrape` runs a scrape and stores the
//! record, `GET /download/:format` serves the current record as an
//! attachment. Domain errors are translated to status codes and
//! operator-facing messages here and nowhere else.

mod handlers;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::{AppContext, Result};

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<AppContext>,
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::index))
        .route("/scrape", post(handlers::scrape))
        .route("/download/:format", get(handlers::download))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until shutdown.
pub async fn run(ctx: Arc<AppContext>, bind: &str) -> Result<()> {
    let router = create_router(AppState { ctx });
    let listener = tokio::net::TcpListener::bind(bind).await?;
    info!("listening on http://{}", bind);
    axum::serve(listener, router).await?;
    Ok(())
}
