//! Snapshot resolution engine
//!
//! Turns the flat list of object names found in the snapshot bucket into the
//! per-network view served by the API.
//!
//! # Pipeline
//!
//! 1. [`parser`] converts each object name into a [`SnapshotDescriptor`];
//!    names that are not snapshots are dropped
//! 2. [`resolver`] groups descriptors by network and kind and picks the latest
//!    snapshot plus a short history for each group
//!
//! Both steps are pure; caching and I/O live in
//! [`crate::services::SnapshotService`].

pub mod parser;
pub mod resolver;
pub mod types;

pub use parser::{is_valid_network, parse_snapshot_name};
pub use resolver::resolve;
pub use types::{Network, NetworkSnapshotSet, SnapshotDescriptor, SnapshotKind, SnapshotSummary};
