#![allow(dead_code)]

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Result};
use candle_core::{DType, Device, Tensor};

use sentr::model::{detect, ClassifierConfig};
use sentr::{LstmClassifier, PreprocessConfig, Predictor, SequenceClassifier, Tokenizer};

pub const TOKENIZER_JSON: &str = r##"{
    "class_name": "Tokenizer",
    "config": {
        "num_words": 20,
        "filters": "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n",
        "lower": true,
        "split": " ",
        "char_level": false,
        "oov_token": "<OOV>",
        "document_count": 4,
        "word_index": "{\"<OOV>\": 1, \"the\": 2, \"product\": 3, \"great\": 4, \"awful\": 5, \"okay\": 6}"
    }
}"##;

pub fn config() -> ClassifierConfig {
    ClassifierConfig {
        vocab_size: 20,
        embedding_dim: 4,
        hidden_size: 3,
        num_classes: 3,
    }
}

/// Zero weights except for the output bias, so every comment gets the
/// class with the largest bias
pub fn weights(config: &ClassifierConfig, bias: [f32; 3]) -> HashMap<String, Tensor> {
    let dev = Device::Cpu;
    let h = config.hidden_size;
    let z = |shape: &[usize]| Tensor::zeros(shape, DType::F32, &dev).unwrap();
    HashMap::from([
        (
            detect::EMBEDDING_WEIGHT.to_string(),
            z(&[config.vocab_size, config.embedding_dim]),
        ),
        (
            detect::LSTM_WEIGHT_IH.to_string(),
            z(&[4 * h, config.embedding_dim]),
        ),
        (detect::LSTM_WEIGHT_HH.to_string(), z(&[4 * h, h])),
        (detect::LSTM_BIAS_IH.to_string(), z(&[4 * h])),
        (detect::LSTM_BIAS_HH.to_string(), z(&[4 * h])),
        (
            detect::CLASSIFIER_WEIGHT.to_string(),
            z(&[config.num_classes, h]),
        ),
        (
            detect::CLASSIFIER_BIAS.to_string(),
            Tensor::new(&bias, &dev).unwrap(),
        ),
    ])
}

/// Write a model and tokenizer pair into `dir`
pub fn write_artifacts(dir: &Path, bias: [f32; 3]) {
    candle_core::safetensors::save(
        &weights(&config(), bias),
        dir.join("lstm_model.safetensors"),
    )
    .unwrap();
    std::fs::write(dir.join("lstm_tokenizer.json"), TOKENIZER_JSON).unwrap();
}

pub fn lstm_predictor(bias: [f32; 3]) -> Predictor {
    let model = LstmClassifier::from_tensors(weights(&config(), bias), None, &Device::Cpu).unwrap();
    let tokenizer = Tokenizer::from_json_str(TOKENIZER_JSON).unwrap();
    Predictor::new(tokenizer, model, PreprocessConfig::default()).unwrap()
}

/// A classifier that always fails, standing in for a broken model
pub struct BrokenModel;

impl SequenceClassifier for BrokenModel {
    fn predict_proba(&self, batch: &[Vec<u32>]) -> Result<Vec<Vec<f32>>> {
        Err(anyhow!(
            "expected input shape (None, 50), got ({}, 100)",
            batch.len()
        ))
    }

    fn num_classes(&self) -> usize {
        3
    }
}

pub fn broken_predictor() -> Predictor {
    let tokenizer = Tokenizer::from_json_str(TOKENIZER_JSON).unwrap();
    Predictor::new(tokenizer, BrokenModel, PreprocessConfig::default()).unwrap()
}
