//! Resolution of parsed snapshots into per-network latest/previous sets

use std::cmp::Ordering;
use std::collections::BTreeMap;

use super::types::{Network, NetworkSnapshotSet, SnapshotDescriptor, SnapshotKind, SnapshotSummary};
use crate::constants::snapshots::MAX_PREVIOUS;

/// Group descriptors by network and kind and pick, for each group, the latest
/// snapshot plus up to [`MAX_PREVIOUS`] older ones.
///
/// Networks without any descriptor are absent from the result. The input slice
/// is left untouched.
pub fn resolve(descriptors: &[SnapshotDescriptor]) -> BTreeMap<Network, NetworkSnapshotSet> {
    let mut groups: BTreeMap<Network, BTreeMap<SnapshotKind, Vec<&SnapshotDescriptor>>> =
        BTreeMap::new();

    for descriptor in descriptors {
        groups
            .entry(descriptor.network)
            .or_default()
            .entry(descriptor.kind)
            .or_default()
            .push(descriptor);
    }

    groups
        .into_iter()
        .map(|(network, by_kind)| {
            let mut set = NetworkSnapshotSet::default();

            for (kind, mut snapshots) in by_kind {
                snapshots.sort_by(|a, b| newest_first(a, b));

                let Some((latest, older)) = snapshots.split_first() else {
                    continue;
                };
                let latest = Some(latest.summary());
                let previous: Vec<SnapshotSummary> = older
                    .iter()
                    .take(MAX_PREVIOUS)
                    .map(|s| s.summary())
                    .collect();

                match kind {
                    SnapshotKind::Full => {
                        set.latest_full = latest;
                        set.previous_full = previous;
                    }
                    SnapshotKind::Light => {
                        set.latest_light = latest;
                        set.previous_light = previous;
                    }
                }
            }

            (network, set)
        })
        .collect()
}

/// Highest block first, then most recent capture; the object name settles the
/// rest so the order is total.
fn newest_first(a: &SnapshotDescriptor, b: &SnapshotDescriptor) -> Ordering {
    b.block
        .cmp(&a.block)
        .then_with(|| b.captured_at.cmp(&a.captured_at))
        .then_with(|| a.raw_name.cmp(&b.raw_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::parser::parse_snapshot_name;

    const BASE: &str = "https://storage.googleapis.com/taraxa-snapshot";

    fn parse_all(names: &[&str]) -> Vec<SnapshotDescriptor> {
        names
            .iter()
            .filter_map(|name| parse_snapshot_name(name, BASE).ok())
            .collect()
    }

    fn blocks(summaries: &[SnapshotSummary]) -> Vec<u64> {
        summaries.iter().map(|s| s.block).collect()
    }

    #[test]
    fn test_empty_input_yields_empty_mapping() {
        assert!(resolve(&[]).is_empty());
    }

    #[test]
    fn test_latest_and_previous_with_bogus_entry() {
        let descriptors = parse_all(&[
            "mainnet-full-db-block-200-20250706-110000.tar.gz",
            "mainnet-full-db-block-100-20250706-100000.tar.gz",
            "bogus.txt",
        ]);
        assert_eq!(descriptors.len(), 2);

        let result = resolve(&descriptors);
        assert_eq!(result.len(), 1);

        let mainnet = &result[&Network::Mainnet];
        assert_eq!(mainnet.latest_full.as_ref().unwrap().block, 200);
        assert_eq!(blocks(&mainnet.previous_full), vec![100]);
        assert!(mainnet.latest_light.is_none());
        assert!(mainnet.previous_light.is_empty());
    }

    #[test]
    fn test_previous_is_capped_and_ordered() {
        let descriptors = parse_all(&[
            "mainnet-full-db-block-300-20250703-100000.tar.gz",
            "mainnet-full-db-block-100-20250701-100000.tar.gz",
            "mainnet-full-db-block-500-20250705-100000.tar.gz",
            "mainnet-full-db-block-200-20250702-100000.tar.gz",
            "mainnet-full-db-block-400-20250704-100000.tar.gz",
        ]);

        let mainnet = &resolve(&descriptors)[&Network::Mainnet];
        assert_eq!(mainnet.latest_full.as_ref().unwrap().block, 500);
        assert_eq!(blocks(&mainnet.previous_full), vec![400, 300, 200]);
    }

    #[test]
    fn test_block_wins_over_timestamp() {
        let descriptors = parse_all(&[
            "testnet-light-db-block-100-20250710-100000.tar.gz",
            "testnet-light-db-block-200-20250701-100000.tar.gz",
        ]);

        let testnet = &resolve(&descriptors)[&Network::Testnet];
        let latest = testnet.latest_light.as_ref().unwrap();
        assert_eq!(latest.block, 200);
        assert_eq!(latest.timestamp, "2025-07-01 10:00");
    }

    #[test]
    fn test_equal_blocks_resolved_by_timestamp() {
        let descriptors = parse_all(&[
            "mainnet-light-db-block-500-20250706-090000.tar.gz",
            "mainnet-light-db-block-500-20250706-110000.tar.gz",
            "mainnet-light-db-block-500-20250706-100000.tar.gz",
        ]);

        let mainnet = &resolve(&descriptors)[&Network::Mainnet];
        assert_eq!(
            mainnet.latest_light.as_ref().unwrap().timestamp,
            "2025-07-06 11:00"
        );
        let previous: Vec<&str> = mainnet
            .previous_light
            .iter()
            .map(|s| s.timestamp.as_str())
            .collect();
        assert_eq!(previous, vec!["2025-07-06 10:00", "2025-07-06 09:00"]);
    }

    #[test]
    fn test_single_snapshot_has_no_previous() {
        let descriptors = parse_all(&["devnet-full-db-block-1-20250706-100000.tar.gz"]);

        let devnet = &resolve(&descriptors)[&Network::Devnet];
        assert_eq!(devnet.latest_full.as_ref().unwrap().block, 1);
        assert!(devnet.previous_full.is_empty());
        assert!(devnet.latest_light.is_none());
    }

    #[test]
    fn test_networks_and_kinds_are_kept_apart() {
        let descriptors = parse_all(&[
            "mainnet-full-db-block-10-20250706-100000.tar.gz",
            "mainnet-light-db-block-11-20250706-100000.tar.gz",
            "testnet-full-db-block-20-20250706-100000.tar.gz",
            "testnet-full-db-block-21-20250706-100000.tar.gz",
        ]);

        let result = resolve(&descriptors);
        assert_eq!(result.len(), 2);
        assert!(!result.contains_key(&Network::Devnet));

        let mainnet = &result[&Network::Mainnet];
        assert_eq!(mainnet.latest_full.as_ref().unwrap().block, 10);
        assert_eq!(mainnet.latest_light.as_ref().unwrap().block, 11);

        let testnet = &result[&Network::Testnet];
        assert_eq!(testnet.latest_full.as_ref().unwrap().block, 21);
        assert_eq!(blocks(&testnet.previous_full), vec![20]);
        assert!(testnet.latest_light.is_none());
    }

    #[test]
    fn test_duplicates_are_not_collapsed() {
        let descriptors = parse_all(&[
            "mainnet-full-db-block-10-20250706-100000.tar.gz",
            "mainnet-full-db-block-10-20250706-100000.tar.gz",
        ]);

        let mainnet = &resolve(&descriptors)[&Network::Mainnet];
        assert_eq!(mainnet.latest_full.as_ref().unwrap().block, 10);
        assert_eq!(blocks(&mainnet.previous_full), vec![10]);
    }

    #[test]
    fn test_result_independent_of_input_order() {
        let names = [
            "mainnet-full-db-block-7-20250706-100000.tar.gz",
            "mainnet-full-db-block-007-20250706-100000.tar.gz",
            "mainnet-full-db-block-9-20250705-100000.tar.gz",
            "mainnet-full-db-block-8-20250707-100000.tar.gz",
        ];
        let forward = parse_all(&names);
        let mut reversed = forward.clone();
        reversed.reverse();

        assert_eq!(resolve(&forward), resolve(&reversed));
    }

    #[test]
    fn test_input_is_not_reordered() {
        let descriptors = parse_all(&[
            "mainnet-full-db-block-1-20250706-100000.tar.gz",
            "mainnet-full-db-block-3-20250706-100000.tar.gz",
            "mainnet-full-db-block-2-20250706-100000.tar.gz",
        ]);
        let before = descriptors.clone();

        let _ = resolve(&descriptors);
        assert_eq!(descriptors, before);
    }
}
