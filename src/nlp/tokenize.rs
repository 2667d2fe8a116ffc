//! Morphological splitting and stopword filtering.

use std::{collections::HashSet, path::Path, sync::Arc};

use once_cell::sync::Lazy;
use tracing::{info, warn};

use crate::error::ArtifactError;

/// Morphological analyzer capability. Implementations split already-normalized
/// text into morphemes in reading order.
pub trait Morphs: Send + Sync {
    fn morphs(&self, text: &str) -> Vec<String>;
}

/// Particles and verbal endings split off the end of an eojeol.
const SUFFIXES: &[&str] = &[
    "었습니다", "았습니다", "습니다", "입니다", "였어요", "었어요", "았어요", "이에요", "에서는",
    "으로는", "에게서", "한테서", "이라서", "에요", "예요", "어요", "아요", "네요", "해요", "지만",
    "는데", "어서", "아서", "었다", "았다", "까지", "부터", "에서", "에게", "한테", "으로", "보다",
    "처럼", "만큼", "이랑", "하고", "은", "는", "이", "가", "을", "를", "에", "의", "도", "만", "로",
    "와", "과", "랑", "요",
];

static SUFFIXES_LONGEST_FIRST: Lazy<Vec<&'static str>> = Lazy::new(|| {
    let mut suffixes = SUFFIXES.to_vec();
    suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
    suffixes
});

/// Dictionary-free analyzer: splits on whitespace, then separates one trailing
/// particle or ending from each eojeol when a non-empty stem remains. Used when
/// the `korean` feature is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuffixAnalyzer;

impl Morphs for SuffixAnalyzer {
    fn morphs(&self, text: &str) -> Vec<String> {
        let mut out = Vec::new();
        for eojeol in text.split_whitespace() {
            match split_suffix(eojeol) {
                Some((stem, suffix)) => {
                    out.push(stem.to_string());
                    out.push(suffix.to_string());
                }
                None => out.push(eojeol.to_string()),
            }
        }
        out
    }
}

fn split_suffix(eojeol: &str) -> Option<(&str, &str)> {
    SUFFIXES_LONGEST_FIRST.iter().find_map(|suffix| {
        eojeol
            .strip_suffix(suffix)
            .filter(|stem| !stem.is_empty())
            .map(|stem| (stem, &eojeol[stem.len()..]))
    })
}

/// Analyzer used by the sentiment engine: ko-dic segmentation with the `korean`
/// feature, the suffix splitter otherwise.
pub fn default_analyzer() -> Result<Arc<dyn Morphs>, ArtifactError> {
    #[cfg(feature = "korean")]
    {
        Ok(Arc::new(super::korean::LinderaAnalyzer::new()?))
    }
    #[cfg(not(feature = "korean"))]
    {
        Ok(Arc::new(SuffixAnalyzer))
    }
}

/// Immutable set of tokens excluded from model input.
#[derive(Debug, Clone, Default)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a UTF-8 list with one token per line; blank lines are ignored.
    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read(path).map_err(|e| ArtifactError::io(path, e))?;
        let text = String::from_utf8(raw).map_err(|e| ArtifactError::malformed(path, e))?;
        let set = Self::new(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        );
        if set.is_empty() {
            warn!(path = %path.display(), "stopword list is empty");
        }
        info!(path = %path.display(), count = set.len(), "loaded stopwords");
        Ok(set)
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Split normalized text with `analyzer` and drop stopwords, keeping order.
pub fn tokenize(analyzer: &dyn Morphs, stopwords: &StopwordSet, text: &str) -> Vec<String> {
    analyzer
        .morphs(text)
        .into_iter()
        .filter(|token| !stopwords.contains(token))
        .collect()
}
