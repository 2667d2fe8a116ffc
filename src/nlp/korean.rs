//! Dictionary-backed Korean analyzer (MeCab ko-dic via `lindera`).

use lindera::{
    dictionary::{load_embedded_dictionary, DictionaryKind},
    mode::Mode,
    segmenter::Segmenter,
    tokenizer::Tokenizer,
};
use tracing::{info, warn};

use super::tokenize::{Morphs, SuffixAnalyzer};
use crate::error::ArtifactError;

const DICTIONARY: &str = "embedded://ko-dic";

pub struct LinderaAnalyzer {
    tokenizer: Tokenizer,
}

impl LinderaAnalyzer {
    pub fn new() -> Result<Self, ArtifactError> {
        let dictionary = load_embedded_dictionary(DictionaryKind::KoDic).map_err(|e| {
            ArtifactError::Unsupported {
                path: DICTIONARY.into(),
                reason: e.to_string(),
            }
        })?;
        let segmenter = Segmenter::new(Mode::Normal, dictionary, None);
        info!(dictionary = DICTIONARY, "loaded korean analyzer");
        Ok(Self {
            tokenizer: Tokenizer::new(segmenter),
        })
    }
}

impl Morphs for LinderaAnalyzer {
    fn morphs(&self, text: &str) -> Vec<String> {
        match self.tokenizer.tokenize(text) {
            Ok(tokens) => tokens
                .iter()
                .map(|token| token.surface.trim())
                .filter(|surface| !surface.is_empty())
                .map(str::to_string)
                .collect(),
            Err(err) => {
                warn!(error = %err, "segmentation failed; using suffix fallback");
                SuffixAnalyzer.morphs(text)
            }
        }
    }
}
