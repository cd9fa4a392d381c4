//! Sentr - sentiment classification server for comments
//!
//! Sentr loads a fitted word-index tokenizer and an LSTM classifier once at
//! startup and serves `POST /predict`, labelling each comment as negative,
//! neutral or positive.
//!
//! # Architecture
//!
//! - **tokenizer**: text → word ids, matching Keras `texts_to_sequences`
//! - **preprocess**: fixed-length padding and truncation
//! - **model**: candle Embedding → LSTM → Dense classifier
//! - **engine**: the predictor tying the pieces together
//! - **server** / **cli**: HTTP and command line front ends
//!
//! # Example
//!
//! ```bash
//! # Start server on $PORT (default 5500)
//! sentr serve --model lstm_model.safetensors --tokenizer lstm_tokenizer.json
//!
//! # Classify from the shell
//! sentr predict "great product" "never again"
//! ```

pub mod cli;
pub mod config;
pub mod engine;
pub mod loader;
pub mod model;
pub mod preprocess;
pub mod server;
pub mod tokenizer;

// Re-export key types
pub use config::{PreprocessConfig, SentrConfig, ServerConfig};
pub use engine::{Prediction, Predictor, Sentiment};
pub use loader::{load_artifacts, Artifacts};
pub use model::{LstmClassifier, SequenceClassifier};
pub use tokenizer::Tokenizer;
