mod orchestrator;

use botlift_core::{BotliftConfig, Params};
use std::path::Path;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let tokens: Vec<String> = std::env::args().skip(1).collect();
    let params = match Params::resolve(&tokens) {
        Ok(params) => params,
        Err(e) => {
            eprintln!("usage: botlift --project_id <id> --peo_access_key <key>");
            return Err(e.into());
        }
    };

    let config = BotliftConfig::load(Path::new("."))?;

    orchestrator::run(&params, &config).await
}
