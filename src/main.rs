//! Earnings Estimator server.
//!
//! Usage: `earnings-estimator [CONFIG]`. The configuration path may also be
//! given through `EARNINGS_CONFIG`; without either, built-in defaults are used.

use std::path::PathBuf;

use chrono::Local;
use tracing::{Level, info, warn};

use earnings_estimator::api::{AppState, create_router};
use earnings_estimator::config::{ConfigLoader, EstimatorConfig};
use earnings_estimator::error::EstimatorResult;
use earnings_estimator::models::UuidIds;
use earnings_estimator::store::{FileStore, KeyValueStore, MemoryStore};
use earnings_estimator::tracker::Tracker;

fn load_config() -> EstimatorResult<EstimatorConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("EARNINGS_CONFIG").ok())
        .map(PathBuf::from);

    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_config()),
        None => Ok(EstimatorConfig::default()),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config()?;

    let level = config.logging.max_level();
    tracing_subscriber::fmt()
        .with_max_level(level.unwrap_or(Level::INFO))
        .init();
    if level.is_none() {
        warn!(level = %config.logging.level, "Unknown logging level, using info");
    }

    let backend: Box<dyn KeyValueStore> = match &config.storage.directory {
        Some(directory) => Box::new(FileStore::new(directory)),
        None => Box::new(MemoryStore::new()),
    };

    let tracker = Tracker::from_config(
        &config,
        backend,
        Box::new(UuidIds),
        Local::now().date_naive(),
    );
    info!(
        records = tracker.records().len(),
        mode = ?tracker.mode(),
        slot = %config.storage.slot,
        "Loaded record log"
    );

    let router = create_router(AppState::new(tracker));
    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    info!(bind = %config.server.bind, "Earnings estimator listening");
    axum::serve(listener, router).await?;

    Ok(())
}
