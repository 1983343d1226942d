use anyhow::Result;
use tracing_subscriber::EnvFilter;

use cityatlas::config::AtlasConfig;
use cityatlas::web;

fn init_tracing(config: &AtlasConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = AtlasConfig::load()?;
    init_tracing(&config);

    tracing::info!(version = cityatlas::VERSION, "starting cityatlas");
    web::run(config).await
}
