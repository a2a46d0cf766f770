use reqwest::Client;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

use crate::constants::http::CONNECT_TIMEOUT;
use crate::errors::FetchError;

/// Source of raw object names for the snapshot cache
pub trait SnapshotFetcher: Send + Sync {
    fn list_objects(&self) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}

/// Google Cloud Storage JSON listing response
#[derive(Debug, Deserialize)]
struct BucketListing {
    /// Absent when the bucket is empty
    #[serde(default)]
    items: Vec<BucketObject>,
}

#[derive(Debug, Deserialize)]
struct BucketObject {
    name: String,
}

/// Lists a public bucket through its JSON listing endpoint
pub struct BucketFetcher {
    client: Client,
    listing_url: String,
}

impl BucketFetcher {
    pub fn new(listing_url: impl Into<String>, request_timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            listing_url: listing_url.into(),
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }
}

impl SnapshotFetcher for BucketFetcher {
    async fn list_objects(&self) -> Result<Vec<String>, FetchError> {
        debug!("Listing snapshot bucket: {}", self.listing_url);

        let response = self
            .client
            .get(&self.listing_url)
            .send()
            .await
            .map_err(|e| FetchError::RequestFailed {
                url: self.listing_url.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Bucket listing {} returned {}", self.listing_url, status);
            return Err(FetchError::UnexpectedStatus {
                url: self.listing_url.clone(),
                status: status.as_u16(),
            });
        }

        let listing: BucketListing =
            response.json().await.map_err(|e| FetchError::InvalidBody {
                url: self.listing_url.clone(),
                reason: e.to_string(),
            })?;

        debug!("Bucket listing returned {} objects", listing.items.len());
        Ok(listing.items.into_iter().map(|item| item.name).collect())
    }
}
