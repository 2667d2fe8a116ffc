//! Thresholding and batch tallies.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Scores strictly above this are positive; the threshold itself is negative.
pub const POSITIVE_THRESHOLD: f32 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    pub fn from_score(score: f32) -> Self {
        if score > POSITIVE_THRESHOLD {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Summary returned for a batch of reviews.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub total_reviews: usize,
    pub positive_percent: f64,
    pub negative_percent: f64,
    pub positive_count: usize,
    pub negative_count: usize,
}

/// Order-independent running counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
}

impl Tally {
    pub fn record(&mut self, label: Sentiment) {
        match label {
            Sentiment::Positive => self.positive += 1,
            Sentiment::Negative => self.negative += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    /// Percentages rounded to two decimals. An empty tally is an [`AnalysisError::EmptyBatch`].
    pub fn finish(self) -> Result<AnalysisResult, AnalysisError> {
        let total = self.total();
        if total == 0 {
            return Err(AnalysisError::EmptyBatch);
        }
        Ok(AnalysisResult {
            total_reviews: total,
            positive_percent: percent(self.positive, total),
            negative_percent: percent(self.negative, total),
            positive_count: self.positive,
            negative_count: self.negative,
        })
    }
}

impl FromIterator<Sentiment> for Tally {
    fn from_iter<I: IntoIterator<Item = Sentiment>>(iter: I) -> Self {
        let mut tally = Tally::default();
        for label in iter {
            tally.record(label);
        }
        tally
    }
}

fn percent(part: usize, total: usize) -> f64 {
    round2(part as f64 / total as f64 * 100.0)
}

/// Correctly rounded from the exact binary value, ties to even (3.125 → 3.12).
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
