pub mod config;
pub mod constants;
pub mod errors;
pub mod services;
pub mod snapshot;
pub mod web;

// Re-export commonly used types
pub use config::{Config, ConfigManager};
pub use errors::{FetchError, ParseError, SnapshotsError};
pub use services::{BucketFetcher, SnapshotFetcher, SnapshotService};
pub use snapshot::{Network, NetworkSnapshotSet, SnapshotDescriptor, SnapshotKind, SnapshotSummary};
