//! Token → id mapping loaded from a Keras `Tokenizer.to_json()` artifact.

use std::{collections::HashMap, path::Path};

use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::error::ArtifactError;

/// Immutable vocabulary. Ids start at 1; 0 is reserved for padding.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_index: HashMap<String, u32>,
    num_words: Option<usize>,
    oov_id: Option<u32>,
    lower: bool,
}

#[derive(Debug, Deserialize)]
struct KerasTokenizerDoc {
    config: KerasTokenizerConfig,
}

#[derive(Debug, Deserialize)]
struct KerasTokenizerConfig {
    #[serde(default)]
    num_words: Option<usize>,
    #[serde(default = "default_lower")]
    lower: bool,
    #[serde(default)]
    oov_token: Option<String>,
    word_index: Value,
}

fn default_lower() -> bool {
    true
}

impl Vocabulary {
    /// Build a vocabulary without an oov token, size cap or lowercasing.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            word_index: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            num_words: None,
            oov_id: None,
            lower: false,
        }
    }

    /// Route unknown tokens to `token`, which must already be in the index.
    pub fn with_oov_token(mut self, token: &str) -> Option<Self> {
        self.oov_id = Some(*self.word_index.get(token)?);
        Some(self)
    }

    /// Treat ids `>= num_words` as unknown.
    pub fn with_num_words(mut self, num_words: usize) -> Self {
        self.num_words = Some(num_words);
        self
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ArtifactError::io(path, e))?;
        let vocab =
            Self::from_json_str(&raw).map_err(|reason| ArtifactError::malformed(path, reason))?;
        info!(
            path = %path.display(),
            entries = vocab.len(),
            oov = vocab.oov_id.is_some(),
            num_words = ?vocab.num_words,
            "loaded vocabulary"
        );
        Ok(vocab)
    }

    /// Parse any of: the Keras tokenizer document, that document wrapped in a
    /// JSON string, or a bare `{token: id}` object.
    pub fn from_json_str(raw: &str) -> Result<Self, String> {
        let doc = match serde_json::from_str::<Value>(raw).map_err(|e| e.to_string())? {
            Value::String(inner) => serde_json::from_str(&inner).map_err(|e| e.to_string())?,
            other => other,
        };
        if !doc.is_object() {
            return Err("expected a JSON object".into());
        }

        let vocab = if doc.get("config").is_some() {
            let parsed: KerasTokenizerDoc =
                serde_json::from_value(doc).map_err(|e| e.to_string())?;
            let config = parsed.config;
            let word_index = parse_word_index(config.word_index)?;
            let oov_id = match config.oov_token {
                Some(token) => Some(
                    *word_index
                        .get(&token)
                        .ok_or_else(|| format!("oov token {token:?} missing from word_index"))?,
                ),
                None => None,
            };
            Self {
                word_index,
                // Keras treats a zero cap as no cap.
                num_words: config.num_words.filter(|&n| n > 0),
                oov_id,
                lower: config.lower,
            }
        } else {
            Self::from_pairs(parse_word_index(doc)?)
        };

        vocab.validate()?;
        Ok(vocab)
    }

    fn validate(&self) -> Result<(), String> {
        if self.word_index.is_empty() {
            return Err("word_index is empty".into());
        }
        if let Some((token, _)) = self.word_index.iter().find(|(_, id)| **id == 0) {
            return Err(format!("token {token:?} uses reserved padding id 0"));
        }
        Ok(())
    }

    /// Id for a single token following the artifact's own unknown-token rule:
    /// the oov id when one is configured, otherwise `None` (the token is dropped).
    pub fn lookup(&self, token: &str) -> Option<u32> {
        let key = if self.lower {
            std::borrow::Cow::Owned(token.to_lowercase())
        } else {
            std::borrow::Cow::Borrowed(token)
        };
        match self.word_index.get(key.as_ref()) {
            Some(&id) if self.num_words.map_or(true, |n| (id as usize) < n) => Some(id),
            _ => self.oov_id,
        }
    }

    /// Map tokens to ids in order, dropping those without one.
    pub fn ids<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<u32> {
        tokens
            .iter()
            .filter_map(|token| self.lookup(token.as_ref()))
            .collect()
    }

    pub fn oov_id(&self) -> Option<u32> {
        self.oov_id
    }

    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }
}

fn parse_word_index(value: Value) -> Result<HashMap<String, u32>, String> {
    match value {
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(|e| e.to_string()),
        other => serde_json::from_value(other).map_err(|e| e.to_string()),
    }
}
