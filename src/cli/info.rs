//! Artifact info command

use anyhow::Result;
use candle_core::Device;

use super::ArtifactArgs;
use crate::config::SentrConfig;
use crate::loader::{detect_model_source, exceeds_embedding, load_artifacts};

/// Show model and tokenizer information
pub async fn info(artifacts: ArtifactArgs) -> Result<()> {
    let config = artifacts.resolve()?;
    let source = detect_model_source(
        &config.artifacts.model_path,
        config.artifacts.model_config_path.as_deref(),
    )?;
    let loaded = load_artifacts(&config.artifacts, &Device::Cpu)?;

    println!("Model: {}", source.weights_path.display());
    match &source.config_path {
        Some(path) => println!("  Config: {}", path.display()),
        None => println!("  Config: (detected from tensor shapes)"),
    }
    let dims = loaded.model.config();
    println!("  Vocab size: {}", dims.vocab_size);
    println!("  Embedding dim: {}", dims.embedding_dim);
    println!("  LSTM hidden size: {}", dims.hidden_size);
    println!("  Classes: {}", dims.num_classes);

    let tokenizer = &loaded.tokenizer;
    println!();
    println!("Tokenizer: {}", config.artifacts.tokenizer_path.display());
    println!("  Entries: {}", tokenizer.num_entries());
    println!("  Max index: {}", tokenizer.max_index());
    match tokenizer.num_words() {
        Some(n) => println!("  Num words: {}", n),
        None => println!("  Num words: unlimited"),
    }
    println!("  OOV token: {}", tokenizer.oov_token().unwrap_or("(none)"));
    println!(
        "  Level: {}",
        if tokenizer.is_char_level() {
            "char"
        } else {
            "word"
        }
    );

    print_preprocess(&config);

    if exceeds_embedding(tokenizer, dims.vocab_size) {
        println!();
        println!(
            "Warning: tokenizer ids reach {} but the embedding table has {} rows",
            tokenizer.vocab_size() - 1,
            dims.vocab_size
        );
    }

    Ok(())
}

fn print_preprocess(config: &SentrConfig) {
    let preprocess = &config.preprocess;
    println!();
    println!("Preprocessing:");
    println!("  Sequence length: {}", preprocess.max_len);
    println!("  Padding: {:?}", preprocess.padding);
    println!("  Truncating: {:?}", preprocess.truncating);
}
