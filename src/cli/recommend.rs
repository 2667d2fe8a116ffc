//! CLI entry-point for serving the recommendation API.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{
    api,
    config::Settings,
    recommend::{OpenAiClient, Recommender},
};

#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Port to bind (default 8001).
    #[arg(long, default_value_t = 8001)]
    pub port: u16,
    /// Host address, defaults to localhost.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let client = OpenAiClient::from_settings(&settings).context("configuring completion client")?;
    let recommender = Recommender::new(Arc::new(client));
    api::serve(api::recommend_router(recommender), &args.host, args.port).await
}
