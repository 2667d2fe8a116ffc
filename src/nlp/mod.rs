//! Text preprocessing and model scoring for Korean reviews.

pub mod classifier;
#[cfg(feature = "korean")]
pub mod korean;
pub mod normalize;
pub mod sequence;
pub mod tokenize;
pub mod vocab;

pub use classifier::{Classifier, PooledLinearModel};
pub use normalize::normalize;
pub use sequence::{encode, pad_front, EncodedSequence, MAX_LEN, PAD_ID};
pub use tokenize::{default_analyzer, tokenize, Morphs, StopwordSet, SuffixAnalyzer};
pub use vocab::Vocabulary;

#[cfg(feature = "korean")]
pub use korean::LinderaAnalyzer;

/// Normalize, split, filter and encode one raw review.
pub fn preprocess(
    analyzer: &dyn Morphs,
    stopwords: &StopwordSet,
    vocab: &Vocabulary,
    text: &str,
) -> EncodedSequence {
    let normalized = normalize(text);
    let tokens = tokenize(analyzer, stopwords, &normalized);
    encode(vocab, &tokens)
}
