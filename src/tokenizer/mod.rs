//! Word-index tokenizer
//!
//! Reproduces Keras `Tokenizer.texts_to_sequences` for a tokenizer fitted
//! during training, so the ids fed to the classifier match what it saw.

mod keras_json;

pub use keras_json::DEFAULT_FILTERS;

use std::collections::{HashMap, HashSet};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

/// A fitted text → integer-sequence mapping
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word_index: HashMap<String, u32>,
    num_words: Option<usize>,
    filters: HashSet<char>,
    lower: bool,
    split: String,
    char_level: bool,
    oov_token: Option<String>,
    oov_index: Option<u32>,
}

impl Tokenizer {
    /// Load a tokenizer from a JSON file written by `Tokenizer.to_json()`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read tokenizer {}", path.display()))?;
        Self::from_json_str(&content)
            .with_context(|| format!("failed to parse tokenizer {}", path.display()))
    }

    /// Parse a tokenizer from its JSON representation
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config = keras_json::parse(content)?;
        let word_index = config.word_index()?;

        if config.split.is_empty() && !config.char_level {
            return Err(anyhow!("tokenizer split string must not be empty"));
        }

        let oov_index = match &config.oov_token {
            Some(token) => Some(
                *word_index
                    .get(token)
                    .ok_or_else(|| anyhow!("oov_token '{}' is missing from word_index", token))?,
            ),
            None => None,
        };

        Ok(Self {
            word_index,
            // Keras treats num_words=0 the same as "no limit"
            num_words: config.num_words.filter(|&n| n > 0),
            filters: config.filters.chars().collect(),
            lower: config.lower,
            split: config.split,
            char_level: config.char_level,
            oov_token: config.oov_token,
            oov_index,
        })
    }

    /// Build a tokenizer directly from a vocabulary with Keras defaults
    pub fn from_word_index(word_index: HashMap<String, u32>) -> Self {
        Self {
            word_index,
            num_words: None,
            filters: DEFAULT_FILTERS.chars().collect(),
            lower: true,
            split: " ".to_string(),
            char_level: false,
            oov_token: None,
            oov_index: None,
        }
    }

    /// Split text into words: lower-case, replace filtered characters by the
    /// split string, split, drop empty pieces.
    pub fn text_to_word_sequence(&self, text: &str) -> Vec<String> {
        let text = if self.lower {
            text.to_lowercase()
        } else {
            text.to_string()
        };

        let translated: String = text
            .chars()
            .map(|c| {
                if self.filters.contains(&c) {
                    self.split.clone()
                } else {
                    c.to_string()
                }
            })
            .collect();

        translated
            .split(self.split.as_str())
            .filter(|piece| !piece.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Convert a single text to token ids
    pub fn text_to_sequence(&self, text: &str) -> Vec<u32> {
        let pieces = if self.char_level {
            let text = if self.lower {
                text.to_lowercase()
            } else {
                text.to_string()
            };
            text.chars().map(|c| c.to_string()).collect()
        } else {
            self.text_to_word_sequence(text)
        };

        pieces
            .iter()
            .filter_map(|piece| self.lookup(piece))
            .collect()
    }

    /// Convert a batch of texts to token ids, preserving order
    pub fn texts_to_sequences<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<u32>> {
        texts
            .iter()
            .map(|text| self.text_to_sequence(text.as_ref()))
            .collect()
    }

    fn lookup(&self, word: &str) -> Option<u32> {
        match self.word_index.get(word) {
            Some(&index) => match self.num_words {
                Some(limit) if index as usize >= limit => self.oov_index,
                _ => Some(index),
            },
            None => self.oov_index,
        }
    }

    /// Number of distinct ids this tokenizer can emit, including padding id 0
    pub fn vocab_size(&self) -> usize {
        let full = self.max_index() as usize + 1;
        match self.num_words {
            Some(limit) => limit.min(full),
            None => full,
        }
    }

    /// Largest id present in the vocabulary
    pub fn max_index(&self) -> u32 {
        self.word_index.values().copied().max().unwrap_or(0)
    }

    /// Number of words in the fitted vocabulary
    pub fn num_entries(&self) -> usize {
        self.word_index.len()
    }

    /// Configured word limit, if any
    pub fn num_words(&self) -> Option<usize> {
        self.num_words
    }

    /// Out-of-vocabulary token, if any
    pub fn oov_token(&self) -> Option<&str> {
        self.oov_token.as_deref()
    }

    /// Whether the tokenizer works on characters rather than words
    pub fn is_char_level(&self) -> bool {
        self.char_level
    }
}

/// Load a tokenizer from disk
pub fn load_tokenizer<P: AsRef<Path>>(path: P) -> Result<Tokenizer> {
    Tokenizer::from_file(path)
}
