//! Typed error taxonomy shared by the sentiment and recommendation services.

use std::path::PathBuf;

/// Failure to load one of the start-up artifacts. Fatal: the process must not serve.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed artifact {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    #[error("unsupported artifact {}: {reason}", path.display())]
    Unsupported { path: PathBuf, reason: String },
}

impl ArtifactError {
    pub(crate) fn malformed(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Malformed {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Map an I/O failure, distinguishing a missing file from other read errors.
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::Missing { path }
        } else {
            Self::Io { path, source }
        }
    }
}

/// Failure raised by a classifier backend for a single encoded sequence.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("token id {id} outside embedding table of {rows} rows")]
    IdOutOfRange { id: u32, rows: usize },

    #[error("model runtime error: {0}")]
    Runtime(String),

    #[error("model lock poisoned")]
    Poisoned,
}

/// Failure of a batch analysis request.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("reviews must contain at least one entry")]
    EmptyBatch,

    #[error("inference failed for review {index}: {source}")]
    Inference {
        index: usize,
        #[source]
        source: ClassifierError,
    },
}

/// Failure while obtaining or validating an upstream recommendation.
#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("OPENAI_API_KEY is not configured")]
    MissingApiKey,

    #[error("completion request failed: {0}")]
    Transport(String),

    #[error("completion service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion reply had no content")]
    EmptyReply,

    #[error("completion reply is not valid JSON: {0}")]
    MalformedReply(String),

    #[error("product id is not an integer: {0}")]
    NotAnInteger(String),

    #[error("expected exactly 5 product ids, got {0}")]
    WrongCount(usize),

    #[error("duplicate product id {0}")]
    Duplicate(i64),
}
