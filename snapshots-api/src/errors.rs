//! Custom error types for the snapshots API
//!
//! Provides structured error handling with context for the different failure
//! scenarios of the resolution pipeline.

use std::fmt;
use std::time::Duration;

/// Main error type returned by the snapshot service
#[derive(Debug)]
pub enum SnapshotsError {
    /// Bucket listing failed; the cache was left untouched
    Fetch(FetchError),

    /// Caller supplied a network that is not supported
    InvalidNetwork { network: String },

    /// Refresh task ended without producing a result (panic or runtime shutdown)
    RefreshAborted { reason: String },
}

/// Bucket listing error variants
#[derive(Debug)]
pub enum FetchError {
    /// Transport-level failure (DNS, connection refused, TLS...)
    RequestFailed { url: String, reason: String },

    /// Bucket endpoint answered with a non-success status
    UnexpectedStatus { url: String, status: u16 },

    /// Response body could not be decoded as a listing
    InvalidBody { url: String, reason: String },

    /// Listing did not finish within the allowed time
    Timeout { after: Duration },
}

/// Object name rejection reasons
///
/// A parse error only means "this object is not a snapshot"; it never reaches
/// API callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Name does not follow `<network>-<kind>-db-block-<block>-<date>-<time>.tar.gz`
    UnrecognizedName { name: String },

    /// Block segment is not a 64-bit unsigned integer
    InvalidBlock { name: String, block: String },

    /// Date/time segment is not a real calendar instant
    InvalidTimestamp { name: String, timestamp: String },
}

/// Configuration error variants
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to read a configuration file
    LoadFailed { path: String, reason: String },

    /// Configuration file is not valid TOML for the expected shape
    ParseError { path: String, reason: String },

    /// Invalid configuration value
    InvalidValue { field: String, reason: String },
}

impl fmt::Display for SnapshotsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotsError::Fetch(e) => write!(f, "Failed to fetch snapshots: {}", e),
            SnapshotsError::InvalidNetwork { network } => write!(
                f,
                "Invalid network '{}'. Supported networks: mainnet, testnet, devnet",
                network
            ),
            SnapshotsError::RefreshAborted { reason } => {
                write!(f, "Snapshot refresh aborted: {}", reason)
            }
        }
    }
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::RequestFailed { url, reason } => {
                write!(f, "Request to {} failed: {}", url, reason)
            }
            FetchError::UnexpectedStatus { url, status } => {
                write!(f, "Bucket listing {} returned status {}", url, status)
            }
            FetchError::InvalidBody { url, reason } => {
                write!(f, "Failed to decode listing from {}: {}", url, reason)
            }
            FetchError::Timeout { after } => {
                write!(f, "Bucket listing timed out after {}s", after.as_secs())
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnrecognizedName { name } => {
                write!(f, "Invalid snapshot filename format: {}", name)
            }
            ParseError::InvalidBlock { name, block } => {
                write!(f, "Invalid block number '{}' in {}", block, name)
            }
            ParseError::InvalidTimestamp { name, timestamp } => {
                write!(f, "Invalid timestamp '{}' in {}", timestamp, name)
            }
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::LoadFailed { path, reason } => {
                write!(f, "Failed to load config from '{}': {}", path, reason)
            }
            ConfigError::ParseError { path, reason } => {
                write!(f, "Failed to parse config '{}': {}", path, reason)
            }
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for SnapshotsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotsError::Fetch(e) => Some(e),
            SnapshotsError::InvalidNetwork { .. } | SnapshotsError::RefreshAborted { .. } => None,
        }
    }
}
impl std::error::Error for FetchError {}
impl std::error::Error for ParseError {}
impl std::error::Error for ConfigError {}

impl From<FetchError> for SnapshotsError {
    fn from(err: FetchError) -> Self {
        SnapshotsError::Fetch(err)
    }
}

impl SnapshotsError {
    pub fn is_fetch(&self) -> bool {
        matches!(self, SnapshotsError::Fetch(_))
    }
}
