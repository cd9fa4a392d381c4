//! Core inference engine
//!
//! This module provides the prediction pipeline:
//! - Predictor: tokenizes, pads and classifies comments
//! - Sentiment: output labels and per-label summaries

mod predictor;
mod sentiment;

pub use predictor::Predictor;
pub use sentiment::{argmax, Prediction, Sentiment, SentimentSummary};
