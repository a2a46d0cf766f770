//! Common test data and constants

use std::sync::Arc;
use std::time::Duration;

use snapshots_api::web::{create_router, AppState};
use snapshots_api::{BucketFetcher, Config, SnapshotService};

pub const DOWNLOAD_BASE: &str = "https://storage.googleapis.com/taraxa-snapshot";

pub const VALID_API_KEY: &str = "valid-api-key";

/// Bucket objects for mainnet and testnet plus non-snapshot noise
pub mod objects {
    pub const MAINNET_FULL: [&str; 5] = [
        "mainnet-full-db-block-500-20250705-100000.tar.gz",
        "mainnet-full-db-block-400-20250704-100000.tar.gz",
        "mainnet-full-db-block-300-20250703-100000.tar.gz",
        "mainnet-full-db-block-200-20250702-100000.tar.gz",
        "mainnet-full-db-block-100-20250701-100000.tar.gz",
    ];

    pub const MAINNET_LIGHT: [&str; 3] = [
        "mainnet-light-db-block-510-20250705-120000.tar.gz",
        "mainnet-light-db-block-410-20250704-120000.tar.gz",
        "mainnet-light-db-block-310-20250703-120000.tar.gz",
    ];

    pub const TESTNET_LIGHT: [&str; 1] = ["testnet-light-db-block-42-20250706-143000.tar.gz"];

    pub const NOISE: [&str; 4] = [
        "bogus.txt",
        "mainnet-full-db-block-abc-20250706-143000.tar.gz",
        "mainnet-full-db-block-1-20250230-143000.tar.gz",
        "archive/mainnet-full-db-block-999-20250706-143000.tar.gz",
    ];

    /// Everything above, in bucket order
    pub fn all() -> Vec<&'static str> {
        NOISE
            .iter()
            .chain(MAINNET_LIGHT.iter())
            .chain(MAINNET_FULL.iter().rev())
            .chain(TESTNET_LIGHT.iter())
            .copied()
            .collect()
    }
}

pub fn test_config(api_keys: &[&str]) -> Config {
    Config {
        api_keys: api_keys.iter().map(|k| k.to_string()).collect(),
        ..Config::default()
    }
}

pub fn snapshot_service(listing_url: &str, cache_ttl: Duration) -> SnapshotService {
    let fetcher = BucketFetcher::new(listing_url, Duration::from_secs(5)).unwrap();
    SnapshotService::new(fetcher, DOWNLOAD_BASE, cache_ttl, Duration::from_secs(5))
}

pub fn test_router(listing_url: &str, cache_ttl: Duration) -> axum::Router {
    let state = AppState::new(
        Arc::new(test_config(&[VALID_API_KEY])),
        Arc::new(snapshot_service(listing_url, cache_ttl)),
    );
    create_router(state)
}
