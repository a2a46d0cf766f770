//! Snapshot domain types and the public response shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::snapshots::TIMESTAMP_DISPLAY_FORMAT;
use crate::errors::SnapshotsError;

/// Blockchain network a snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
    Devnet,
}

impl Network {
    /// Every supported network, in the order they are advertised
    pub const ALL: [Network; 3] = [Network::Mainnet, Network::Testnet, Network::Devnet];

    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Network {
    type Err = SnapshotsError;

    /// Exact, case-sensitive match
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            "devnet" => Ok(Network::Devnet),
            other => Err(SnapshotsError::InvalidNetwork {
                network: other.to_string(),
            }),
        }
    }
}

/// Snapshot variant: complete database or pruned database
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotKind {
    Full,
    Light,
}

impl SnapshotKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SnapshotKind::Full => "full",
            SnapshotKind::Light => "light",
        }
    }

    pub(crate) fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "full" => Some(SnapshotKind::Full),
            "light" => Some(SnapshotKind::Light),
            _ => None,
        }
    }
}

impl fmt::Display for SnapshotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One snapshot object, as parsed from its name in the bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotDescriptor {
    pub network: Network,
    pub kind: SnapshotKind,
    pub block: u64,
    pub captured_at: DateTime<Utc>,
    pub source_url: String,
    pub raw_name: String,
}

impl SnapshotDescriptor {
    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            block: self.block,
            timestamp: self
                .captured_at
                .format(TIMESTAMP_DISPLAY_FORMAT)
                .to_string(),
            url: self.source_url.clone(),
        }
    }
}

/// Externally visible projection of a descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub block: u64,
    /// `YYYY-MM-DD HH:MM`, UTC
    pub timestamp: String,
    pub url: String,
}

/// Latest and previous snapshots of one network
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkSnapshotSet {
    #[serde(rename = "full", default, skip_serializing_if = "Option::is_none")]
    pub latest_full: Option<SnapshotSummary>,

    #[serde(rename = "light", default, skip_serializing_if = "Option::is_none")]
    pub latest_light: Option<SnapshotSummary>,

    #[serde(rename = "previous-full", default, skip_serializing_if = "Vec::is_empty")]
    pub previous_full: Vec<SnapshotSummary>,

    #[serde(rename = "previous-light", default, skip_serializing_if = "Vec::is_empty")]
    pub previous_light: Vec<SnapshotSummary>,
}

impl NetworkSnapshotSet {
    /// View served to callers without a valid API key: full snapshots removed,
    /// light snapshots untouched.
    pub fn redacted(&self) -> Self {
        Self {
            latest_full: None,
            latest_light: self.latest_light.clone(),
            previous_full: Vec::new(),
            previous_light: self.previous_light.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.latest_full.is_none() && self.latest_light.is_none()
    }
}
