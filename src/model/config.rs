//! Classifier dimensions

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Dimensions of the Embedding → LSTM → Dense classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Rows in the embedding table (largest token id + 1)
    pub vocab_size: usize,
    /// Width of each embedding vector
    pub embedding_dim: usize,
    /// LSTM hidden state width
    #[serde(alias = "lstm_units")]
    pub hidden_size: usize,
    /// Output classes
    #[serde(default = "default_num_classes")]
    pub num_classes: usize,
}

fn default_num_classes() -> usize {
    3
}

impl ClassifierConfig {
    /// Load from a JSON file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read model config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse model config {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject degenerate dimensions
    pub fn validate(&self) -> Result<()> {
        let dims = [
            ("vocab_size", self.vocab_size),
            ("embedding_dim", self.embedding_dim),
            ("hidden_size", self.hidden_size),
            ("num_classes", self.num_classes),
        ];
        for (name, value) in dims {
            if value == 0 {
                return Err(anyhow!("model config field '{}' must be non-zero", name));
            }
        }
        Ok(())
    }
}
