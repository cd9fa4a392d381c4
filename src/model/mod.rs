//! Sequence classifier models.
//!
//! The predictor only sees the [`SequenceClassifier`] trait; the shipped
//! implementation is the candle LSTM in [`LstmClassifier`].

mod config;
pub mod detect;
mod lstm;

pub use config::ClassifierConfig;
pub use detect::{detect_config, REQUIRED_TENSORS};
pub use lstm::LstmClassifier;

use anyhow::Result;

/// A model mapping fixed-length token id rows to class probabilities
pub trait SequenceClassifier: Send + Sync {
    /// Run one forward pass over the batch, returning one probability row
    /// per input sequence
    fn predict_proba(&self, batch: &[Vec<u32>]) -> Result<Vec<Vec<f32>>>;

    /// Number of classes in each probability row
    fn num_classes(&self) -> usize;
}

/// Boxed classifier type for use in the predictor
pub type BoxedClassifier = Box<dyn SequenceClassifier>;
