//! On-disk format of a fitted Keras `Tokenizer`.
//!
//! `Tokenizer.to_json()` wraps the settings in `{"class_name", "config"}` and
//! stores the vocabulary tables as JSON-encoded strings. Hand-written files
//! often inline them as objects instead; both are accepted.

use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Characters Keras strips from text by default
pub const DEFAULT_FILTERS: &str = "!\"#$%&()*+,-./:;<=>?@[\\]^_`{|}~\t\n";

#[derive(Deserialize)]
#[serde(untagged)]
enum TokenizerFile {
    Wrapped {
        #[allow(dead_code)]
        #[serde(default)]
        class_name: Option<String>,
        config: KerasTokenizerConfig,
    },
    Bare(KerasTokenizerConfig),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WordIndex {
    Encoded(String),
    Inline(HashMap<String, u32>),
}

/// The subset of Keras tokenizer settings that affect `texts_to_sequences`
#[derive(Deserialize)]
pub(crate) struct KerasTokenizerConfig {
    #[serde(default)]
    pub num_words: Option<usize>,
    #[serde(default = "default_filters")]
    pub filters: String,
    #[serde(default = "default_true")]
    pub lower: bool,
    #[serde(default = "default_split")]
    pub split: String,
    #[serde(default)]
    pub char_level: bool,
    #[serde(default)]
    pub oov_token: Option<String>,
    word_index: WordIndex,
}

fn default_filters() -> String {
    DEFAULT_FILTERS.to_string()
}

fn default_true() -> bool {
    true
}

fn default_split() -> String {
    " ".to_string()
}

impl KerasTokenizerConfig {
    /// Decode the vocabulary, unwrapping the string-encoded form if needed
    pub fn word_index(&self) -> Result<HashMap<String, u32>> {
        match &self.word_index {
            WordIndex::Inline(map) => Ok(map.clone()),
            WordIndex::Encoded(raw) => {
                serde_json::from_str(raw).context("word_index is not a valid JSON object")
            }
        }
    }
}

/// Parse tokenizer JSON in either the wrapped or the bare layout
pub(crate) fn parse(content: &str) -> Result<KerasTokenizerConfig> {
    let file: TokenizerFile = serde_json::from_str(content)
        .context("tokenizer JSON does not contain a usable word_index")?;

    Ok(match file {
        TokenizerFile::Wrapped { config, .. } => config,
        TokenizerFile::Bare(config) => config,
    })
}
