//! CLI commands

mod info;
mod predict;
mod serve;

pub use info::info;
pub use predict::predict;
pub use serve::serve;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::config::SentrConfig;

/// Sentr - sentiment classification server for comments
#[derive(Parser)]
#[command(name = "sentr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to find configuration and artifacts
#[derive(Args, Debug, Clone, Default)]
pub struct ArtifactArgs {
    /// Config file (YAML or JSON); falls back to $SENTR_CONFIG
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Model weights (.safetensors file or directory)
    #[arg(long, short)]
    pub model: Option<PathBuf>,

    /// Fitted tokenizer JSON
    #[arg(long, short)]
    pub tokenizer: Option<PathBuf>,
}

impl ArtifactArgs {
    /// Resolve config file, environment and flags into one configuration.
    /// Flags take precedence.
    pub fn resolve(&self) -> Result<SentrConfig> {
        let mut config = SentrConfig::load(self.config.as_deref())?;
        config.artifacts = config
            .artifacts
            .with_overrides(self.model.clone(), self.tokenizer.clone());
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the prediction server
    Serve {
        #[command(flatten)]
        artifacts: ArtifactArgs,

        /// Port to listen on (default: $PORT or 5500)
        #[arg(long)]
        port: Option<u16>,

        /// Host to bind to (default: 0.0.0.0)
        #[arg(long)]
        host: Option<String>,
    },

    /// Classify comments from the command line
    Predict {
        #[command(flatten)]
        artifacts: ArtifactArgs,

        /// Print the same JSON body the server would return
        #[arg(long)]
        json: bool,

        /// Comments to classify
        #[arg(required = true)]
        comments: Vec<String>,
    },

    /// Show model and tokenizer information
    Info {
        #[command(flatten)]
        artifacts: ArtifactArgs,
    },
}
