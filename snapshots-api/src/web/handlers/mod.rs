//! HTTP request handlers for the snapshots API.
//!
//! - `common` - Shared error type and query structs
//! - `health` - Liveness, readiness and network listing
//! - `snapshots` - Snapshot lookup per network

pub mod common;
pub mod health;
pub mod snapshots;

pub use health::*;
pub use snapshots::*;
