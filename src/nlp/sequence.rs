//! Fixed-length sequence alignment for model input.

use super::vocab::Vocabulary;

/// Length of every sequence fed to the classifier.
pub const MAX_LEN: usize = 80;

/// Reserved id written into padded positions.
pub const PAD_ID: u32 = 0;

/// Vocabulary ids aligned to exactly [`MAX_LEN`] positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedSequence([u32; MAX_LEN]);

impl EncodedSequence {
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Ids that are not padding, in order.
    pub fn tokens(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied().filter(|&id| id != PAD_ID)
    }
}

/// Pre-padding with front truncation: short inputs are left-padded with
/// [`PAD_ID`]; long inputs keep their last [`MAX_LEN`] ids.
pub fn pad_front(ids: &[u32]) -> EncodedSequence {
    let mut out = [PAD_ID; MAX_LEN];
    let kept = &ids[ids.len().saturating_sub(MAX_LEN)..];
    out[MAX_LEN - kept.len()..].copy_from_slice(kept);
    EncodedSequence(out)
}

/// Look tokens up in `vocab` and align them with [`pad_front`].
pub fn encode<S: AsRef<str>>(vocab: &Vocabulary, tokens: &[S]) -> EncodedSequence {
    pad_front(&vocab.ids(tokens))
}
