//! Snapshot object name parser
//!
//! Object names follow `<network>-<kind>-db-block-<block>-<YYYYMMDD>-<HHMMSS>.tar.gz`.
//! Anything else in the bucket is not a snapshot and is rejected with a
//! [`ParseError`].

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::types::{Network, SnapshotDescriptor, SnapshotKind};
use crate::constants::snapshots::{ARCHIVE_SUFFIX, LISTING_SUFFIX};
use crate::errors::ParseError;

const SEGMENT_COUNT: usize = 7;

/// Parse one object name into a descriptor whose download URL is rooted at `base_url`.
pub fn parse_snapshot_name(name: &str, base_url: &str) -> Result<SnapshotDescriptor, ParseError> {
    let unrecognized = || ParseError::UnrecognizedName {
        name: name.to_string(),
    };

    let stem = name.strip_suffix(ARCHIVE_SUFFIX).ok_or_else(unrecognized)?;
    let segments: Vec<&str> = stem.split('-').collect();
    if segments.len() != SEGMENT_COUNT {
        return Err(unrecognized());
    }

    let network: Network = segments[0].parse().map_err(|_| unrecognized())?;
    let kind = SnapshotKind::from_segment(segments[1]).ok_or_else(unrecognized)?;
    if segments[2] != "db" || segments[3] != "block" {
        return Err(unrecognized());
    }

    let (block_str, date_str, time_str) = (segments[4], segments[5], segments[6]);
    if !is_digits(block_str, None) || !is_digits(date_str, Some(8)) || !is_digits(time_str, Some(6))
    {
        return Err(unrecognized());
    }

    let block = block_str
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidBlock {
            name: name.to_string(),
            block: block_str.to_string(),
        })?;

    let captured_at =
        parse_timestamp(date_str, time_str).ok_or_else(|| ParseError::InvalidTimestamp {
            name: name.to_string(),
            timestamp: format!("{}-{}", date_str, time_str),
        })?;

    Ok(SnapshotDescriptor {
        network,
        kind,
        block,
        captured_at,
        source_url: download_url(base_url, name),
        raw_name: name.to_string(),
    })
}

/// Supported-network check shared with the HTTP layer
pub fn is_valid_network(raw: &str) -> bool {
    raw.parse::<Network>().is_ok()
}

fn download_url(base_url: &str, name: &str) -> String {
    let base = base_url.strip_suffix(LISTING_SUFFIX).unwrap_or(base_url);
    format!("{}/{}", base, name)
}

fn is_digits(segment: &str, exact_len: Option<usize>) -> bool {
    !segment.is_empty()
        && exact_len.is_none_or(|len| segment.len() == len)
        && segment.bytes().all(|b| b.is_ascii_digit())
}

/// `YYYYMMDD` + `HHMMSS`, both already checked to be ASCII digits, read as UTC
fn parse_timestamp(date: &str, time: &str) -> Option<DateTime<Utc>> {
    let num = |s: &str| s.parse::<u32>().ok();

    let year = date[0..4].parse::<i32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, num(&date[4..6])?, num(&date[6..8])?)?;
    let time = NaiveTime::from_hms_opt(num(&time[0..2])?, num(&time[2..4])?, num(&time[4..6])?)?;

    Some(NaiveDateTime::new(date, time).and_utc())
}
