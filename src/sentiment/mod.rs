//! Batch sentiment analysis over loaded, read-only model state.

pub mod aggregate;

use std::sync::Arc;

use tracing::{debug, info, instrument};

pub use aggregate::{AnalysisResult, Sentiment, Tally, POSITIVE_THRESHOLD};

use crate::{
    config::Settings,
    error::{AnalysisError, ArtifactError, ClassifierError},
    nlp::{self, classifier, Classifier, EncodedSequence, Morphs, StopwordSet, Vocabulary},
};

/// Process-wide handle holding everything a request needs. Built once at start-up
/// and shared behind an `Arc`; nothing mutates it afterwards.
pub struct SentimentEngine {
    analyzer: Arc<dyn Morphs>,
    stopwords: StopwordSet,
    vocab: Vocabulary,
    classifier: Arc<dyn Classifier>,
}

impl SentimentEngine {
    pub fn new(
        analyzer: Arc<dyn Morphs>,
        stopwords: StopwordSet,
        vocab: Vocabulary,
        classifier: Arc<dyn Classifier>,
    ) -> Self {
        Self {
            analyzer,
            stopwords,
            vocab,
            classifier,
        }
    }

    /// Load the analyzer, stopwords, vocabulary and weights from the configured artifacts.
    #[instrument(skip_all)]
    pub fn load(settings: &Settings) -> Result<Self, ArtifactError> {
        let analyzer = nlp::default_analyzer()?;
        let stopwords = StopwordSet::load(&settings.stopwords_file())?;
        let vocab = Vocabulary::load(&settings.vocab_file())?;
        let classifier = classifier::load_model(&settings.model_file())?;
        info!("sentiment engine ready");
        Ok(Self::new(analyzer, stopwords, vocab, classifier))
    }

    pub fn preprocess(&self, text: &str) -> EncodedSequence {
        nlp::preprocess(self.analyzer.as_ref(), &self.stopwords, &self.vocab, text)
    }

    pub fn score(&self, text: &str) -> Result<f32, ClassifierError> {
        self.classifier.score(&self.preprocess(text))
    }

    pub fn classify(&self, text: &str) -> Result<Sentiment, ClassifierError> {
        self.score(text).map(Sentiment::from_score)
    }

    /// Classify every review in input order. The first inference failure aborts
    /// the batch; an empty batch is rejected before any model call.
    #[instrument(skip_all, fields(batch = reviews.len()))]
    pub fn analyze<S: AsRef<str>>(&self, reviews: &[S]) -> Result<AnalysisResult, AnalysisError> {
        if reviews.is_empty() {
            return Err(AnalysisError::EmptyBatch);
        }
        let labels = reviews
            .iter()
            .enumerate()
            .map(|(index, review)| -> Result<Sentiment, AnalysisError> {
                let score = self
                    .score(review.as_ref())
                    .map_err(|source| AnalysisError::Inference { index, source })?;
                debug!(index, score, "scored review");
                Ok(Sentiment::from_score(score))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let result = labels.into_iter().collect::<Tally>().finish()?;
        info!(
            total = result.total_reviews,
            positive = result.positive_count,
            negative = result.negative_count,
            "analyzed reviews"
        );
        Ok(result)
    }
}
