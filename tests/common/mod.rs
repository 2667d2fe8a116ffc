#![allow(dead_code)]

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use hyodream_ai::{
    error::ClassifierError,
    nlp::{Classifier, EncodedSequence, StopwordSet, SuffixAnalyzer, Vocabulary},
    sentiment::SentimentEngine,
};

/// Returns pre-set scores in call order, ignoring its input.
pub struct ScriptedClassifier {
    scores: Mutex<VecDeque<f32>>,
}

impl ScriptedClassifier {
    pub fn new(scores: &[f32]) -> Self {
        Self {
            scores: Mutex::new(scores.iter().copied().collect()),
        }
    }
}

impl Classifier for ScriptedClassifier {
    fn score(&self, _seq: &EncodedSequence) -> Result<f32, ClassifierError> {
        self.scores
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClassifierError::Runtime("script exhausted".into()))
    }
}

pub fn engine_with_scores(scores: &[f32]) -> SentimentEngine {
    SentimentEngine::new(
        Arc::new(SuffixAnalyzer),
        StopwordSet::new(["정말"]),
        Vocabulary::from_pairs([("좋", 1), ("아요", 2), ("별로", 3), ("예요", 4)]),
        Arc::new(ScriptedClassifier::new(scores)),
    )
}
