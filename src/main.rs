use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sentr::cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sentr=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            artifacts,
            port,
            host,
        } => {
            sentr::cli::serve(artifacts, port, host).await?;
        }
        Commands::Predict {
            artifacts,
            json,
            comments,
        } => {
            sentr::cli::predict(artifacts, comments, json).await?;
        }
        Commands::Info { artifacts } => {
            sentr::cli::info(artifacts).await?;
        }
    }

    Ok(())
}
