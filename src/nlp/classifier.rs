//! Pretrained scoring backends mapping an encoded review to P(positive).

use std::{path::Path, sync::Arc};

use ndarray::{Array1, Array2};
use serde::Deserialize;
use tracing::info;

use super::sequence::EncodedSequence;
use crate::error::{ArtifactError, ClassifierError};

/// Opaque scoring model. Implementations must be safe to share across request threads.
pub trait Classifier: Send + Sync {
    fn score(&self, seq: &EncodedSequence) -> Result<f32, ClassifierError>;
}

/// Load the backend matching the model file extension.
pub fn load_model(path: &Path) -> Result<Arc<dyn Classifier>, ArtifactError> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Arc::new(PooledLinearModel::load(path)?) as Arc<dyn Classifier>),
        #[cfg(feature = "onnx")]
        Some("onnx") => Ok(Arc::new(onnx::OnnxModel::load(path)?) as Arc<dyn Classifier>),
        #[cfg(not(feature = "onnx"))]
        Some("onnx") => Err(ArtifactError::Unsupported {
            path: path.to_path_buf(),
            reason: "ONNX models require the `onnx` feature".into(),
        }),
        _ => Err(ArtifactError::Unsupported {
            path: path.to_path_buf(),
            reason: "expected a .json or .onnx model".into(),
        }),
    }
}

pub(crate) fn check_probability(score: f32) -> Result<f32, ClassifierError> {
    if (0.0..=1.0).contains(&score) {
        Ok(score)
    } else {
        Err(ClassifierError::Runtime(format!(
            "score {score} outside [0, 1]"
        )))
    }
}

#[derive(Debug, Deserialize)]
struct PooledLinearWeights {
    embedding: Vec<Vec<f32>>,
    weights: Vec<f32>,
    bias: f32,
}

/// Embedding-bag model: mean of the embedding rows of non-padding ids, a dense
/// projection and a sigmoid.
#[derive(Debug, Clone)]
pub struct PooledLinearModel {
    embedding: Array2<f32>,
    weights: Array1<f32>,
    bias: f32,
}

impl PooledLinearModel {
    pub fn new(embedding: Vec<Vec<f32>>, weights: Vec<f32>, bias: f32) -> Result<Self, String> {
        let rows = embedding.len();
        let dim = embedding.first().map(Vec::len).unwrap_or(0);
        if rows == 0 || dim == 0 {
            return Err("embedding table is empty".into());
        }
        if let Some(row) = embedding.iter().position(|r| r.len() != dim) {
            return Err(format!("embedding row {row} does not have width {dim}"));
        }
        if weights.len() != dim {
            return Err(format!(
                "weights have length {}, embedding width is {dim}",
                weights.len()
            ));
        }
        let flat: Vec<f32> = embedding.into_iter().flatten().collect();
        let embedding = Array2::from_shape_vec((rows, dim), flat).map_err(|e| e.to_string())?;
        Ok(Self {
            embedding,
            weights: Array1::from(weights),
            bias,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ArtifactError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ArtifactError::io(path, e))?;
        let parsed: PooledLinearWeights =
            serde_json::from_str(&raw).map_err(|e| ArtifactError::malformed(path, e))?;
        let model = Self::new(parsed.embedding, parsed.weights, parsed.bias)
            .map_err(|reason| ArtifactError::malformed(path, reason))?;
        info!(
            path = %path.display(),
            rows = model.embedding.nrows(),
            dim = model.embedding.ncols(),
            "loaded pooled-linear classifier"
        );
        Ok(model)
    }
}

impl Classifier for PooledLinearModel {
    fn score(&self, seq: &EncodedSequence) -> Result<f32, ClassifierError> {
        let rows = self.embedding.nrows();
        let mut pooled = Array1::<f32>::zeros(self.embedding.ncols());
        let mut count = 0usize;
        for id in seq.tokens() {
            if id as usize >= rows {
                return Err(ClassifierError::IdOutOfRange { id, rows });
            }
            pooled += &self.embedding.row(id as usize);
            count += 1;
        }
        if count > 0 {
            pooled /= count as f32;
        }
        let logit = self.weights.dot(&pooled) + self.bias;
        check_probability(1.0 / (1.0 + (-logit).exp()))
    }
}

#[cfg(feature = "onnx")]
mod onnx {
    use std::{path::Path, sync::Mutex};

    use ort::{session::Session, value::Tensor};
    use tracing::info;

    use super::{check_probability, Classifier};
    use crate::{
        error::{ArtifactError, ClassifierError},
        nlp::sequence::{EncodedSequence, MAX_LEN},
    };

    /// ONNX Runtime session over a converted Keras model taking `f32[1, MAX_LEN]`.
    pub struct OnnxModel {
        session: Mutex<Session>,
    }

    impl OnnxModel {
        pub fn load(path: &Path) -> Result<Self, ArtifactError> {
            if !path.exists() {
                return Err(ArtifactError::Missing {
                    path: path.to_path_buf(),
                });
            }
            let session = Session::builder()
                .map_err(|e| ArtifactError::malformed(path, e))?
                .commit_from_file(path)
                .map_err(|e| ArtifactError::malformed(path, e))?;
            info!(path = %path.display(), "loaded onnx classifier");
            Ok(Self {
                session: Mutex::new(session),
            })
        }
    }

    impl Classifier for OnnxModel {
        fn score(&self, seq: &EncodedSequence) -> Result<f32, ClassifierError> {
            let input: Vec<f32> = seq.as_slice().iter().map(|&id| id as f32).collect();
            let tensor = Tensor::from_array(([1i64, MAX_LEN as i64], input.into_boxed_slice()))
                .map_err(|e| ClassifierError::Runtime(e.to_string()))?;
            let mut session = self.session.lock().map_err(|_| ClassifierError::Poisoned)?;
            let outputs = session
                .run(ort::inputs![tensor])
                .map_err(|e| ClassifierError::Runtime(e.to_string()))?;
            let (_, data) = outputs[0]
                .try_extract_tensor::<f32>()
                .map_err(|e| ClassifierError::Runtime(e.to_string()))?;
            let score = data
                .first()
                .copied()
                .ok_or_else(|| ClassifierError::Runtime("empty model output".into()))?;
            check_probability(score)
        }
    }
}
