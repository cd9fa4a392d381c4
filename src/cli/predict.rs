//! Offline classification command

use anyhow::Result;
use candle_core::Device;

use super::ArtifactArgs;
use crate::engine::{Predictor, Sentiment, SentimentSummary};
use crate::loader::load_artifacts;
use crate::server::PredictResponse;

/// Classify `comments` and print the results
pub async fn predict(artifacts: ArtifactArgs, comments: Vec<String>, json: bool) -> Result<()> {
    let config = artifacts.resolve()?;
    let loaded = load_artifacts(&config.artifacts, &Device::Cpu)?;
    let predictor = Predictor::from_artifacts(loaded, config.preprocess)?;

    let predictions = tokio::task::spawn_blocking(move || predictor.predict(&comments)).await??;

    if json {
        let body = PredictResponse { predictions };
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    for prediction in &predictions {
        println!("{:<8}  {}", prediction.sentiment, prediction.comment);
    }

    let summary = SentimentSummary::from_predictions(&predictions);
    println!();
    println!("{} comments", summary.total);
    for sentiment in Sentiment::ALL {
        println!(
            "  {:<8} {:>5}  {:>6.2}%",
            sentiment,
            summary.count(sentiment),
            summary.percentage(sentiment)
        );
    }

    Ok(())
}
