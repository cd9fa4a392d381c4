//! Sequence padding and truncation
//!
//! Shapes variable-length token sequences into the fixed-length rows the
//! classifier expects, the way Keras `pad_sequences` does.

use crate::config::{PreprocessConfig, Side};

/// Pad or truncate one sequence to exactly `config.max_len` ids
pub fn pad_sequence(sequence: &[u32], config: &PreprocessConfig) -> Vec<u32> {
    let max_len = config.max_len;

    let kept = if sequence.len() > max_len {
        match config.truncating {
            Side::Pre => &sequence[sequence.len() - max_len..],
            Side::Post => &sequence[..max_len],
        }
    } else {
        sequence
    };

    let filler = std::iter::repeat(config.pad_value).take(max_len - kept.len());
    match config.padding {
        Side::Pre => filler.chain(kept.iter().copied()).collect(),
        Side::Post => kept.iter().copied().chain(filler).collect(),
    }
}

/// Pad or truncate a batch of sequences, preserving order
pub fn pad_sequences(sequences: &[Vec<u32>], config: &PreprocessConfig) -> Vec<Vec<u32>> {
    sequences
        .iter()
        .map(|sequence| pad_sequence(sequence, config))
        .collect()
}
