//! SafeTensors model loading

use std::time::Instant;

use anyhow::Result;
use candle_core::Device;

use super::detect::ModelSource;
use crate::model::{ClassifierConfig, LstmClassifier};

/// Load the LSTM classifier described by `source`.
///
/// Dimensions come from the config file when there is one and are checked
/// against the stored tensors; otherwise they are read off the tensor shapes.
pub fn load_safetensors(source: &ModelSource, device: &Device) -> Result<LstmClassifier> {
    let start = Instant::now();

    let config = match &source.config_path {
        Some(path) => {
            tracing::debug!("Reading model config from {}", path.display());
            Some(ClassifierConfig::from_json(path)?)
        }
        None => None,
    };

    let size = std::fs::metadata(&source.weights_path)
        .map(|m| m.len())
        .unwrap_or(0);
    tracing::info!(
        "Loading model {} ({:.2} MB)",
        source.weights_path.display(),
        size as f64 / (1024.0 * 1024.0)
    );

    let model = LstmClassifier::from_safetensors(&source.weights_path, config, device)?;

    let dims = model.config();
    tracing::info!(
        vocab_size = dims.vocab_size,
        embedding_dim = dims.embedding_dim,
        hidden_size = dims.hidden_size,
        num_classes = dims.num_classes,
        "Model loaded in {:.2?}",
        start.elapsed()
    );

    Ok(model)
}
