//! CLI entry-point for one-shot batch analysis.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args as ClapArgs;
use csv::ReaderBuilder;
use tracing::{info, instrument};

use crate::{config::Settings, sentiment::SentimentEngine};

#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Reviews file: `.csv` (see --column) or one review per line.
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// CSV column holding review text.
    #[arg(long, default_value = "content")]
    pub column: String,
    /// Reviews given inline, appended after file reviews.
    pub reviews: Vec<String>,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let mut reviews = match &args.input {
        Some(path) => read_reviews(path, &args.column)?,
        None => Vec::new(),
    };
    reviews.extend(args.reviews);
    info!(count = reviews.len(), "collected reviews");

    let engine = SentimentEngine::load(&settings).context("loading sentiment artifacts")?;
    let result = engine.analyze(&reviews)?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

/// Read reviews from a CSV column or from non-blank lines of a text file.
pub fn read_reviews(path: &Path, column: &str) -> Result<Vec<String>> {
    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if !is_csv {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        return Ok(text
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(str::to_string)
            .collect());
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let Some(idx) = reader.headers()?.iter().position(|h| h == column) else {
        bail!("column {column:?} not found in {}", path.display());
    };
    let mut out = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(text) = record.get(idx) {
            out.push(text.to_string());
        }
    }
    Ok(out)
}
