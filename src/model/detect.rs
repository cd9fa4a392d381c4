//! Dimension detection from stored tensors

use std::collections::HashMap;

use anyhow::{anyhow, Result};
use candle_core::Tensor;

use super::config::ClassifierConfig;

pub const EMBEDDING_WEIGHT: &str = "embedding.weight";
pub const LSTM_WEIGHT_IH: &str = "lstm.weight_ih_l0";
pub const LSTM_WEIGHT_HH: &str = "lstm.weight_hh_l0";
pub const LSTM_BIAS_IH: &str = "lstm.bias_ih_l0";
pub const LSTM_BIAS_HH: &str = "lstm.bias_hh_l0";
pub const CLASSIFIER_WEIGHT: &str = "classifier.weight";
pub const CLASSIFIER_BIAS: &str = "classifier.bias";

/// Every tensor the classifier needs
pub const REQUIRED_TENSORS: &[&str] = &[
    EMBEDDING_WEIGHT,
    LSTM_WEIGHT_IH,
    LSTM_WEIGHT_HH,
    LSTM_BIAS_IH,
    LSTM_BIAS_HH,
    CLASSIFIER_WEIGHT,
    CLASSIFIER_BIAS,
];

fn dims2(tensors: &HashMap<String, Tensor>, name: &str) -> Result<(usize, usize)> {
    let tensor = tensors
        .get(name)
        .ok_or_else(|| anyhow!("missing tensor '{}'", name))?;
    tensor
        .dims2()
        .map_err(|e| anyhow!("tensor '{}' must be 2-D: {}", name, e))
}

/// Work out classifier dimensions from tensor names and shapes
pub fn detect_config(tensors: &HashMap<String, Tensor>) -> Result<ClassifierConfig> {
    if let Some(missing) = REQUIRED_TENSORS.iter().find(|n| !tensors.contains_key(**n)) {
        return Err(anyhow!("missing tensor '{}'", missing));
    }

    let (vocab_size, embedding_dim) = dims2(tensors, EMBEDDING_WEIGHT)?;
    let (gates, lstm_in) = dims2(tensors, LSTM_WEIGHT_IH)?;
    let (num_classes, classifier_in) = dims2(tensors, CLASSIFIER_WEIGHT)?;

    if gates % 4 != 0 {
        return Err(anyhow!(
            "'{}' has {} rows, expected a multiple of 4",
            LSTM_WEIGHT_IH,
            gates
        ));
    }
    let hidden_size = gates / 4;

    if lstm_in != embedding_dim {
        return Err(anyhow!(
            "LSTM input width {} does not match embedding width {}",
            lstm_in,
            embedding_dim
        ));
    }
    if classifier_in != hidden_size {
        return Err(anyhow!(
            "classifier input width {} does not match LSTM hidden size {}",
            classifier_in,
            hidden_size
        ));
    }

    let config = ClassifierConfig {
        vocab_size,
        embedding_dim,
        hidden_size,
        num_classes,
    };
    config.validate()?;
    Ok(config)
}
