//! Cached access to the resolved snapshot listing
//!
//! The service keeps one resolved view of the bucket for all networks. Reads
//! within the TTL are served from memory; the first read after the TTL runs a
//! single refresh that every concurrent caller waits on.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;
use tracing::{debug, info, instrument, warn};

use super::bucket_fetcher::{BucketFetcher, SnapshotFetcher};
use crate::config::Config;
use crate::errors::{FetchError, SnapshotsError};
use crate::snapshot::{self, Network, NetworkSnapshotSet, SnapshotDescriptor};

/// One resolved view of the bucket, replaced wholesale on refresh
#[derive(Debug)]
struct CacheState {
    entries: BTreeMap<Network, NetworkSnapshotSet>,
    captured_at: DateTime<Utc>,
    refreshed_at: Instant,
}

impl CacheState {
    fn is_fresh(&self, ttl: Duration) -> bool {
        self.refreshed_at.elapsed() < ttl
    }
}

pub struct SnapshotService<F = BucketFetcher> {
    inner: Arc<CacheInner<F>>,
}

/// Everything a refresh task needs, shared between the service and the
/// detached task running the refresh
struct CacheInner<F> {
    fetcher: F,
    base_url: String,
    cache_ttl: Duration,
    fetch_timeout: Duration,
    cache: RwLock<Option<Arc<CacheState>>>,
    // Held for the whole fetch/parse/resolve cycle so only one refresh runs at a time
    refresh_lock: Mutex<()>,
}

impl SnapshotService<BucketFetcher> {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let request_timeout = Duration::from_secs(config.request_timeout_seconds);
        let fetcher = BucketFetcher::new(config.bucket_url.clone(), request_timeout)?;

        info!(
            "Snapshot service listing {} with a {}s cache",
            fetcher.listing_url(),
            config.cache_ttl_seconds
        );

        Ok(Self::new(
            fetcher,
            config.download_base_url(),
            Duration::from_secs(config.cache_ttl_seconds),
            request_timeout,
        ))
    }
}

impl<F: SnapshotFetcher + 'static> SnapshotService<F> {
    pub fn new(
        fetcher: F,
        base_url: impl Into<String>,
        cache_ttl: Duration,
        fetch_timeout: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(CacheInner {
                fetcher,
                base_url: base_url.into(),
                cache_ttl,
                fetch_timeout,
                cache: RwLock::new(None),
                refresh_lock: Mutex::new(()),
            }),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        self.inner.cache_ttl
    }

    /// Snapshots for a network as seen by an authenticated caller
    pub async fn get_snapshots(&self, network: Network) -> Result<NetworkSnapshotSet, SnapshotsError> {
        self.get_snapshots_with_auth(network, true).await
    }

    /// Snapshots for a network; full snapshots are withheld from unauthenticated callers
    pub async fn get_snapshots_with_auth(
        &self,
        network: Network,
        authenticated: bool,
    ) -> Result<NetworkSnapshotSet, SnapshotsError> {
        let state = match self.inner.fresh_state().await {
            Some(state) => {
                debug!("Serving {} snapshots from cache", network);
                state
            }
            None => self.refresh().await?,
        };

        let snapshots = state.entries.get(&network).cloned().unwrap_or_default();
        if authenticated {
            Ok(snapshots)
        } else {
            Ok(snapshots.redacted())
        }
    }

    pub fn is_valid_network(&self, raw: &str) -> bool {
        snapshot::is_valid_network(raw)
    }

    pub fn list_networks(&self) -> &'static [Network] {
        &Network::ALL
    }

    /// Runs the refresh on its own task: dropping the caller (for example a
    /// disconnected HTTP client) does not cancel a refresh other callers wait on.
    async fn refresh(&self) -> Result<Arc<CacheState>, SnapshotsError> {
        let inner = self.inner.clone();
        tokio::spawn(inner.refresh())
            .await
            .map_err(|e| SnapshotsError::RefreshAborted {
                reason: e.to_string(),
            })?
    }
}

impl<F: SnapshotFetcher + 'static> CacheInner<F> {
    async fn fresh_state(&self) -> Option<Arc<CacheState>> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|state| state.is_fresh(self.cache_ttl))
            .cloned()
    }

    #[instrument(skip(self))]
    async fn refresh(self: Arc<Self>) -> Result<Arc<CacheState>, SnapshotsError> {
        let _refresh_guard = self.refresh_lock.lock().await;

        // Another caller may have refreshed while we waited for the lock
        if let Some(state) = self.fresh_state().await {
            debug!("Cache refreshed by a concurrent request");
            return Ok(state);
        }

        let names = match tokio::time::timeout(self.fetch_timeout, self.fetcher.list_objects()).await
        {
            Ok(Ok(names)) => names,
            Ok(Err(e)) => {
                warn!("Snapshot listing failed, keeping previous cache: {}", e);
                return Err(e.into());
            }
            Err(_) => {
                let e = FetchError::Timeout {
                    after: self.fetch_timeout,
                };
                warn!("Snapshot listing failed, keeping previous cache: {}", e);
                return Err(e.into());
            }
        };

        let descriptors = self.parse_names(&names);
        let entries = snapshot::resolve(&descriptors);

        let state = Arc::new(CacheState {
            entries,
            captured_at: Utc::now(),
            refreshed_at: Instant::now(),
        });
        *self.cache.write().await = Some(state.clone());

        info!(
            "Snapshot cache refreshed at {}: {} objects, {} snapshots, {} networks",
            state.captured_at.to_rfc3339(),
            names.len(),
            descriptors.len(),
            state.entries.len()
        );

        Ok(state)
    }

    fn parse_names(&self, names: &[String]) -> Vec<SnapshotDescriptor> {
        names
            .iter()
            .filter_map(|name| match snapshot::parse_snapshot_name(name, &self.base_url) {
                Ok(descriptor) => Some(descriptor),
                Err(e) => {
                    debug!("Skipping bucket object: {}", e);
                    None
                }
            })
            .collect()
    }
}
