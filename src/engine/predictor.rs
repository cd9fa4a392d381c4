//! Prediction pipeline
//!
//! tokenize → pad/truncate → one forward pass → argmax → label.

use anyhow::{anyhow, Result};

use super::sentiment::{argmax, Prediction, Sentiment};
use crate::config::PreprocessConfig;
use crate::loader::Artifacts;
use crate::model::{BoxedClassifier, SequenceClassifier};
use crate::preprocess::pad_sequences;
use crate::tokenizer::Tokenizer;

/// Predictor
///
/// Owns the read-only tokenizer and classifier; shared across requests.
pub struct Predictor {
    tokenizer: Tokenizer,
    model: BoxedClassifier,
    preprocess: PreprocessConfig,
}

impl Predictor {
    /// Create a new predictor.
    ///
    /// The classifier must produce one probability per [`Sentiment`] label.
    pub fn new<M: SequenceClassifier + 'static>(
        tokenizer: Tokenizer,
        model: M,
        preprocess: PreprocessConfig,
    ) -> Result<Self> {
        if model.num_classes() != Sentiment::ALL.len() {
            return Err(anyhow!(
                "model has {} output classes, expected {} (negative, neutral, positive)",
                model.num_classes(),
                Sentiment::ALL.len()
            ));
        }
        if preprocess.max_len == 0 {
            return Err(anyhow!("preprocess.max_len must be greater than zero"));
        }

        Ok(Self {
            tokenizer,
            model: Box::new(model),
            preprocess,
        })
    }

    /// Create a predictor from loaded artifacts
    pub fn from_artifacts(artifacts: Artifacts, preprocess: PreprocessConfig) -> Result<Self> {
        Self::new(artifacts.tokenizer, artifacts.model, preprocess)
    }

    /// Convert comments to fixed-length id rows
    pub fn encode<S: AsRef<str>>(&self, comments: &[S]) -> Vec<Vec<u32>> {
        let sequences = self.tokenizer.texts_to_sequences(comments);
        pad_sequences(&sequences, &self.preprocess)
    }

    /// Classify comments, preserving input order.
    ///
    /// Either every comment gets a label or an error is returned.
    pub fn predict<S: AsRef<str>>(&self, comments: &[S]) -> Result<Vec<Prediction>> {
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let batch = self.encode(comments);
        let probabilities = self.model.predict_proba(&batch)?;

        if probabilities.len() != comments.len() {
            return Err(anyhow!(
                "model returned {} rows for {} comments",
                probabilities.len(),
                comments.len()
            ));
        }

        comments
            .iter()
            .zip(probabilities.iter())
            .map(|(comment, row)| {
                let sentiment = argmax(row)
                    .and_then(Sentiment::from_index)
                    .ok_or_else(|| anyhow!("model output {:?} has no valid label", row))?;
                Ok(Prediction {
                    comment: comment.as_ref().to_string(),
                    sentiment,
                })
            })
            .collect()
    }
}
