//! HTTP layer exposing the sentiment and recommendation services.

pub mod error;
pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{recommend::Recommender, sentiment::SentimentEngine};

/// `POST /analyze`, `GET /health`.
pub fn sentiment_router(engine: Arc<SentimentEngine>) -> Router {
    Router::new()
        .route("/analyze", post(routes::analyze))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(engine)
}

/// `POST /recommend` (also mounted at `/recommend-products`), `GET /health`.
pub fn recommend_router(recommender: Recommender) -> Router {
    Router::new()
        .route("/recommend", post(routes::recommend))
        .route("/recommend-products", post(routes::recommend))
        .route("/health", get(routes::health))
        .layer(TraceLayer::new_for_http())
        .with_state(recommender)
}

pub async fn serve(router: Router, host: &str, port: u16) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving hyodream-ai API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
