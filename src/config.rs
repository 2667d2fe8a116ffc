//! Runtime configuration utilities for hyodream-ai.

use std::{
    env,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Base folder for relative artifact paths.
    pub artifacts_dir: PathBuf,
    /// Classifier weights (`.json` pooled-linear or `.onnx`).
    pub model_path: PathBuf,
    /// Keras tokenizer JSON holding the word index.
    pub vocab_path: PathBuf,
    /// Stopword list, one token per line.
    pub stopwords_path: PathBuf,
    /// Completion service credentials; only the recommend service needs them.
    pub openai_api_key: Option<String>,
    pub openai_base_url: String,
    pub openai_model: String,
    pub openai_temperature: f32,
    pub openai_timeout_secs: u64,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let artifacts_dir = env::var("ARTIFACTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./artifacts"));
        let model_path = path_var("SENTIMENT_MODEL", "model.json");
        let vocab_path = path_var("SENTIMENT_VOCAB", "tokenizer.json");
        let stopwords_path = path_var("SENTIMENT_STOPWORDS", "stopwords.txt");
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let openai_base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
        let openai_model = env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string());
        let openai_temperature = env::var("OPENAI_TEMPERATURE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.2);
        let openai_timeout_secs = env::var("OPENAI_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(60);

        Ok(Self {
            artifacts_dir,
            model_path,
            vocab_path,
            stopwords_path,
            openai_api_key,
            openai_base_url,
            openai_model,
            openai_temperature,
            openai_timeout_secs,
        })
    }

    /// Defaults rooted at `dir`, with no completion credentials.
    pub fn with_artifacts_dir<P: Into<PathBuf>>(dir: P) -> Self {
        Self {
            artifacts_dir: dir.into(),
            model_path: PathBuf::from("model.json"),
            vocab_path: PathBuf::from("tokenizer.json"),
            stopwords_path: PathBuf::from("stopwords.txt"),
            openai_api_key: None,
            openai_base_url: "https://api.openai.com/v1".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_temperature: 0.2,
            openai_timeout_secs: 60,
        }
    }

    /// Resolve an artifact path; absolute paths are returned unchanged.
    pub fn join_artifact<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.artifacts_dir.join(path)
    }

    pub fn model_file(&self) -> PathBuf {
        self.join_artifact(&self.model_path)
    }

    pub fn vocab_file(&self) -> PathBuf {
        self.join_artifact(&self.vocab_path)
    }

    pub fn stopwords_file(&self) -> PathBuf {
        self.join_artifact(&self.stopwords_path)
    }

    pub fn openai_timeout(&self) -> Duration {
        Duration::from_secs(self.openai_timeout_secs)
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
