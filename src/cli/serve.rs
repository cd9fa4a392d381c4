//! HTTP server command

use std::sync::Arc;

use anyhow::{Context, Result};
use candle_core::Device;

use super::ArtifactArgs;
use crate::engine::Predictor;
use crate::loader::load_artifacts;
use crate::server;

/// Load the artifacts and start the prediction server.
///
/// Any loading error is returned before the listener is bound.
pub async fn serve(artifacts: ArtifactArgs, port: Option<u16>, host: Option<String>) -> Result<()> {
    let mut config = artifacts.resolve()?;
    if let Some(port) = port {
        config.server.port = port;
    }
    if let Some(host) = host {
        config.server.host = host;
    }

    let device = Device::Cpu;
    let loaded = load_artifacts(&config.artifacts, &device)
        .context("failed to load artifacts, refusing to start")?;
    let predictor = Arc::new(Predictor::from_artifacts(loaded, config.preprocess.clone())?);

    tracing::info!(
        max_len = config.preprocess.max_len,
        padding = ?config.preprocess.padding,
        truncating = ?config.preprocess.truncating,
        "Predictor ready"
    );

    server::start(predictor, config.server).await
}
