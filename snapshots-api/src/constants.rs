//! Central repository for timeouts, limits and default configuration values
//!
//! Constants are grouped by category so the cache, the fetcher and the
//! configuration loader all read from a single source of truth.

use std::time::Duration;

/// HTTP client constants for the bucket listing call
pub mod http {
    use super::Duration;

    /// Upper bound for a whole bucket listing request
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Timeout for establishing the connection to the bucket endpoint
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Snapshot cache constants
pub mod cache {
    use super::Duration;

    /// How long a resolved listing is served before a refresh is triggered
    pub const DEFAULT_TTL: Duration = Duration::from_secs(300);
}

/// Snapshot naming and resolution constants
pub mod snapshots {
    /// Number of older snapshots kept per network and kind
    pub const MAX_PREVIOUS: usize = 3;

    /// Suffix every snapshot archive carries
    pub const ARCHIVE_SUFFIX: &str = ".tar.gz";

    /// Listing endpoint suffix trimmed from the base URL when building download links
    pub const LISTING_SUFFIX: &str = "/o";

    /// Output format for snapshot timestamps in API responses
    pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
}

/// Default configuration values
pub mod defaults {
    pub const HOST: &str = "0.0.0.0";

    pub const PORT: u16 = 8080;

    pub const BUCKET_NAME: &str = "taraxa-snapshot";

    pub const BUCKET_URL: &str = "https://storage.googleapis.com/storage/v1/b/taraxa-snapshot/o";

    /// Public download host; the bucket name is appended to it
    pub const DOWNLOAD_HOST: &str = "https://storage.googleapis.com";

    pub const CACHE_TTL_SECONDS: u64 = super::cache::DEFAULT_TTL.as_secs();

    pub const REQUEST_TIMEOUT_SECONDS: u64 = super::http::REQUEST_TIMEOUT.as_secs();

    pub const CONFIG_DIR: &str = "config";
}

/// Service identity reported by the probes
pub mod service {
    pub const NAME: &str = "snapshots-api";
}
