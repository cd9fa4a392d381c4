//! Artifact location settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Environment variable overriding the model weights path
pub const MODEL_ENV: &str = "SENTR_MODEL";
/// Environment variable overriding the tokenizer path
pub const TOKENIZER_ENV: &str = "SENTR_TOKENIZER";

/// Where the model and tokenizer artifacts live on disk
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactConfig {
    /// Path to the classifier weights (SafeTensors)
    #[serde(default = "default_model_path")]
    pub model_path: PathBuf,

    /// Path to the classifier config (dimensions). Looked up next to the
    /// weights when unset.
    #[serde(default)]
    pub model_config_path: Option<PathBuf>,

    /// Path to the fitted tokenizer (Keras `Tokenizer.to_json()` output)
    #[serde(default = "default_tokenizer_path")]
    pub tokenizer_path: PathBuf,
}

fn default_model_path() -> PathBuf {
    PathBuf::from("lstm_model.safetensors")
}

fn default_tokenizer_path() -> PathBuf {
    PathBuf::from("lstm_tokenizer.json")
}

impl Default for ArtifactConfig {
    fn default() -> Self {
        Self {
            model_path: default_model_path(),
            model_config_path: None,
            tokenizer_path: default_tokenizer_path(),
        }
    }
}

impl ArtifactConfig {
    /// Apply `SENTR_MODEL` / `SENTR_TOKENIZER` overrides
    pub fn apply_env(&mut self) {
        if let Ok(path) = std::env::var(MODEL_ENV) {
            self.model_path = PathBuf::from(path);
        }
        if let Ok(path) = std::env::var(TOKENIZER_ENV) {
            self.tokenizer_path = PathBuf::from(path);
        }
    }

    /// Apply explicit overrides (e.g. from CLI flags)
    pub fn with_overrides(mut self, model: Option<PathBuf>, tokenizer: Option<PathBuf>) -> Self {
        if let Some(model) = model {
            self.model_path = model;
        }
        if let Some(tokenizer) = tokenizer {
            self.tokenizer_path = tokenizer;
        }
        self
    }
}
