pub mod bucket_fetcher;
pub mod snapshot_service;

pub use bucket_fetcher::{BucketFetcher, SnapshotFetcher};
pub use snapshot_service::SnapshotService;
