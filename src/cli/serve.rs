//! CLI entry-point for serving the sentiment API.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api, config::Settings, sentiment::SentimentEngine};

/// Run the Axum server.
#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port to bind (default 8000).
    #[arg(long, default_value_t = 8000)]
    pub port: u16,
    /// Host address, defaults to localhost.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let engine = SentimentEngine::load(&settings).context("loading sentiment artifacts")?;
    api::serve(api::sentiment_router(Arc::new(engine)), &args.host, args.port).await
}
