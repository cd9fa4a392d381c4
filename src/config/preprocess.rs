//! Preprocessing configuration settings

use serde::{Deserialize, Serialize};

/// Which end of a sequence padding or truncation applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Before the content
    Pre,
    /// After the content
    Post,
}

/// How token sequences are shaped before inference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Fixed sequence length fed to the model
    #[serde(default = "default_max_len")]
    pub max_len: usize,

    /// Where padding goes for short sequences
    #[serde(default = "default_side")]
    pub padding: Side,

    /// Which end is cut from long sequences
    #[serde(default = "default_side")]
    pub truncating: Side,

    /// Filler token id
    #[serde(default)]
    pub pad_value: u32,
}

fn default_max_len() -> usize {
    100
}

fn default_side() -> Side {
    Side::Post
}

impl Default for PreprocessConfig {
    fn default() -> Self {
        Self {
            max_len: default_max_len(),
            padding: default_side(),
            truncating: default_side(),
            pad_value: 0,
        }
    }
}
