//! Artifact loading
//!
//! Reads the classifier weights and the fitted tokenizer once at startup.
//! A missing or malformed artifact is an error; callers treat it as fatal.

mod detect;
mod safetensors;

pub use detect::{detect_model_source, ModelSource};
pub use safetensors::load_safetensors;

use anyhow::{anyhow, Result};
use candle_core::Device;

use crate::config::ArtifactConfig;
use crate::model::LstmClassifier;
use crate::tokenizer::{load_tokenizer, Tokenizer};

/// The two process-wide artifacts
pub struct Artifacts {
    pub model: LstmClassifier,
    pub tokenizer: Tokenizer,
}

/// Load model and tokenizer from the configured paths.
///
/// Both paths are checked before anything is parsed so a missing file is
/// reported immediately.
pub fn load_artifacts(config: &ArtifactConfig, device: &Device) -> Result<Artifacts> {
    if !config.model_path.exists() {
        return Err(anyhow!("Model not found at {}", config.model_path.display()));
    }
    if !config.tokenizer_path.exists() {
        return Err(anyhow!(
            "Tokenizer not found at {}",
            config.tokenizer_path.display()
        ));
    }

    let source = detect_model_source(&config.model_path, config.model_config_path.as_deref())?;
    let model = load_safetensors(&source, device)?;

    let tokenizer = load_tokenizer(&config.tokenizer_path)?;
    tracing::info!(
        entries = tokenizer.num_entries(),
        num_words = ?tokenizer.num_words(),
        oov_token = ?tokenizer.oov_token(),
        "Tokenizer loaded from {}",
        config.tokenizer_path.display()
    );

    let model_vocab = model.config().vocab_size;
    if exceeds_embedding(&tokenizer, model_vocab) {
        tracing::warn!(
            "Tokenizer can emit ids up to {} but the embedding table has {} rows; \
             comments using those ids will fail",
            tokenizer.vocab_size() - 1,
            model_vocab
        );
    }

    Ok(Artifacts { model, tokenizer })
}

/// Whether the tokenizer can emit ids past the last embedding row
pub fn exceeds_embedding(tokenizer: &Tokenizer, model_vocab: usize) -> bool {
    tokenizer.vocab_size() > model_vocab
}
