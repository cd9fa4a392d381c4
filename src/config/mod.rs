//! Configuration system for sentr
//!
//! `SentrConfig` groups artifact locations, preprocessing and server
//! settings. It can be read from YAML or JSON, and the usual environment
//! variables (`PORT`, `SENTR_MODEL`, `SENTR_TOKENIZER`) are layered on top.

mod artifacts;
mod preprocess;
mod server;

pub use artifacts::{ArtifactConfig, MODEL_ENV, TOKENIZER_ENV};
pub use preprocess::{PreprocessConfig, Side};
pub use server::{ServerConfig, PORT_ENV};

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable pointing at a config file
pub const CONFIG_ENV: &str = "SENTR_CONFIG";

/// Sentr configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SentrConfig {
    /// Model and tokenizer locations
    #[serde(default)]
    pub artifacts: ArtifactConfig,

    /// Sequence shaping before inference
    #[serde(default)]
    pub preprocess: PreprocessConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl SentrConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a file, picking the parser by extension
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        let config = match ext {
            "yaml" | "yml" => Self::from_yaml(path),
            "json" => Self::from_json(path),
            _ => return Err(anyhow!("Unsupported config file format: .{}", ext)),
        };
        config.with_context(|| format!("failed to load config from {}", path.display()))
    }

    /// Resolve the effective configuration.
    ///
    /// Starts from `path` (or `SENTR_CONFIG`, or defaults), then applies
    /// environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_ENV).ok();
        let path = path.or(from_env.as_deref().map(Path::new));

        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides
    pub fn apply_env(&mut self) -> Result<()> {
        self.artifacts.apply_env();
        self.server.apply_env()
    }

    /// Reject configurations the predictor cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.preprocess.max_len == 0 {
            return Err(anyhow!("preprocess.max_len must be greater than zero"));
        }
        Ok(())
    }
}
