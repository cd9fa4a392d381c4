//! Embedding → LSTM → Dense sentiment classifier
//!
//! The final hidden state of a single-layer forward LSTM is projected onto
//! the class logits and normalised with softmax. Padding ids are fed through
//! the recurrence like any other id; there is no masking.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use candle_core::{DType, Device, Tensor, D};
use candle_nn::rnn::{lstm, LSTMConfig, LSTM, RNN};
use candle_nn::{embedding, linear, Embedding, Linear, Module, VarBuilder};

use super::config::ClassifierConfig;
use super::detect::detect_config;
use super::SequenceClassifier;

/// LSTM text classifier running on candle
pub struct LstmClassifier {
    embedding: Embedding,
    lstm: LSTM,
    classifier: Linear,
    config: ClassifierConfig,
    device: Device,
}

impl LstmClassifier {
    /// Build the network from a var builder holding
    /// `embedding.*`, `lstm.*` and `classifier.*` weights
    pub fn load(vb: VarBuilder, config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;
        let device = vb.device().clone();

        let embedding = embedding(config.vocab_size, config.embedding_dim, vb.pp("embedding"))
            .context("failed to load embedding weights")?;
        let lstm = lstm(
            config.embedding_dim,
            config.hidden_size,
            LSTMConfig::default(),
            vb.pp("lstm"),
        )
        .context("failed to load LSTM weights")?;
        let classifier = linear(config.hidden_size, config.num_classes, vb.pp("classifier"))
            .context("failed to load classifier weights")?;

        Ok(Self {
            embedding,
            lstm,
            classifier,
            config: config.clone(),
            device,
        })
    }

    /// Build from an in-memory tensor map, detecting dimensions if no
    /// config is supplied
    pub fn from_tensors(
        tensors: HashMap<String, Tensor>,
        config: Option<ClassifierConfig>,
        device: &Device,
    ) -> Result<Self> {
        let detected = detect_config(&tensors)?;
        let config = match config {
            Some(config) if config != detected => {
                return Err(anyhow!(
                    "model config {:?} does not match stored weights {:?}",
                    config,
                    detected
                ));
            }
            Some(config) => config,
            None => detected,
        };

        let vb = VarBuilder::from_tensors(tensors, DType::F32, device);
        Self::load(vb, &config)
    }

    /// Load weights from a SafeTensors file
    pub fn from_safetensors<P: AsRef<Path>>(
        path: P,
        config: Option<ClassifierConfig>,
        device: &Device,
    ) -> Result<Self> {
        let path = path.as_ref();
        let tensors = candle_core::safetensors::load(path, device)
            .with_context(|| format!("failed to read SafeTensors {}", path.display()))?;
        Self::from_tensors(tensors, config, device)
            .with_context(|| format!("failed to load model {}", path.display()))
    }

    /// Model dimensions
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    fn forward(&self, ids: &Tensor) -> Result<Tensor> {
        let embedded = self.embedding.forward(ids)?;
        let states = self.lstm.seq(&embedded)?;
        let last = states
            .last()
            .ok_or_else(|| anyhow!("cannot run the LSTM over an empty sequence"))?;
        let logits = self.classifier.forward(last.h())?;
        Ok(candle_nn::ops::softmax(&logits, D::Minus1)?)
    }
}

impl SequenceClassifier for LstmClassifier {
    fn predict_proba(&self, batch: &[Vec<u32>]) -> Result<Vec<Vec<f32>>> {
        let Some(first) = batch.first() else {
            return Ok(Vec::new());
        };
        let seq_len = first.len();

        if let Some(row) = batch.iter().position(|row| row.len() != seq_len) {
            return Err(anyhow!(
                "sequence {} has length {}, expected {}",
                row,
                batch[row].len(),
                seq_len
            ));
        }
        let vocab_size = self.config.vocab_size;
        if let Some(&id) = batch.iter().flatten().find(|&&id| id as usize >= vocab_size) {
            return Err(anyhow!(
                "token id {} is outside the embedding table (vocab_size {})",
                id,
                self.config.vocab_size
            ));
        }

        let flat: Vec<u32> = batch.iter().flatten().copied().collect();
        let ids = Tensor::from_vec(flat, (batch.len(), seq_len), &self.device)?;
        let probs = self.forward(&ids)?;
        Ok(probs.to_vec2::<f32>()?)
    }

    fn num_classes(&self) -> usize {
        self.config.num_classes
    }
}
