use anyhow::Result;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

use snapshots_api::constants::defaults;
use snapshots_api::web::start_web_server;
use snapshots_api::{ConfigManager, SnapshotService};

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = EnvFilter::from_default_env()
        .add_directive("snapshots_api=info".parse()?)
        .add_directive("tower_http=warn".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting snapshots API");

    let config_dir =
        std::env::var("SNAPSHOTS_CONFIG_DIR").unwrap_or_else(|_| defaults::CONFIG_DIR.to_string());
    let config_manager = ConfigManager::new(config_dir).await?;
    let config = config_manager.get_current_config();

    if config.api_keys.is_empty() {
        warn!("No API keys configured - full snapshots will not be served to any client");
        warn!("Set API_KEYS or add 'api_keys = [...]' to config/secrets.toml");
    }

    let snapshot_service = Arc::new(SnapshotService::from_config(&config)?);
    info!("Snapshot service initialized for bucket {}", config.bucket_name);

    start_web_server(config, snapshot_service).await?;

    Ok(())
}
