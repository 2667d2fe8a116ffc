//! Command-line interface wiring for hyodream-ai.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod analyze;
pub mod recommend;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Review sentiment and product recommendation services", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::ServeRecommend(args) => recommend::run(args, settings).await,
            Commands::Analyze(args) => analyze::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the review sentiment API.
    Serve(serve::Args),
    /// Serve the product recommendation API.
    ServeRecommend(recommend::Args),
    /// Analyze a batch of reviews once and print the summary as JSON.
    Analyze(analyze::Args),
}
