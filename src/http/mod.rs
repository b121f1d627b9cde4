//! HTTP surface: one analysis route plus a health probe.

pub mod error;
pub mod handlers;

use crate::ContentLens;
use axum::{
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub lens: Arc<ContentLens>,
}

/// Build the router. CORS is open to any origin.
pub fn router(lens: Arc<ContentLens>) -> Router {
    Router::new()
        .route("/api/analyze-content", post(handlers::analyze_content))
        .route("/health", get(handlers::health))
        .with_state(AppState { lens })
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve until `shutdown` resolves.
pub async fn serve(
    lens: Arc<ContentLens>,
    addr: SocketAddr,
    shutdown: impl std::future::Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "contentlens listening");
    axum::serve(listener, router(lens))
        .with_graceful_shutdown(shutdown)
        .await
}
