//! Comparison store integration tests
//!
//! Exercises the set algebra the report is built on: partition of the path
//! universe into only-A / only-B / common, and the four drift predicates.

use std::collections::HashSet;
use treedrift::{DiffKind, DiffStore, MetaEntry, Side};

// ═══════════════════════════════════════════════════════════
// Test Helpers
// ═══════════════════════════════════════════════════════════

fn entry(path: &str, user: &str, group: &str, mode: &str, size: &str) -> MetaEntry {
    MetaEntry {
        path: path.to_string(),
        file_type: "f".to_string(),
        user: user.to_string(),
        group: group.to_string(),
        mode: mode.to_string(),
        size: size.to_string(),
    }
}

fn build_store(side_a: Vec<MetaEntry>, side_b: Vec<MetaEntry>) -> DiffStore {
    let mut store = DiffStore::new();
    store.load(Side::A, side_a.into_iter().map(Ok)).unwrap();
    store.load(Side::B, side_b.into_iter().map(Ok)).unwrap();
    store
}

fn sample_sides() -> (Vec<MetaEntry>, Vec<MetaEntry>) {
    let side_a = vec![
        entry("etc", "root", "root", "755", "4096"),
        entry("etc/passwd", "root", "root", "644", "1400"),
        entry("srv/app.conf", "app", "app", "640", "220"),
        entry("home/alice", "alice", "staff", "700", "4096"),
    ];
    let side_b = vec![
        entry("etc", "root", "root", "755", "4096"),
        entry("etc/passwd", "root", "root", "600", "1400"),
        entry("srv/app.conf", "app", "wheel", "640", "235"),
        entry("var/cache", "root", "root", "755", "4096"),
    ];
    (side_a, side_b)
}

// ═══════════════════════════════════════════════════════════
// Partition Properties
// ═══════════════════════════════════════════════════════════

#[test]
fn test_only_sets_are_disjoint() {
    let (side_a, side_b) = sample_sides();
    let store = build_store(side_a, side_b);

    let only_a: HashSet<String> = store.only(Side::A).unwrap().into_iter().collect();
    let only_b: HashSet<String> = store.only(Side::B).unwrap().into_iter().collect();

    assert!(only_a.is_disjoint(&only_b));
}

#[test]
fn test_partition_covers_all_paths_without_duplicates() {
    let (side_a, side_b) = sample_sides();

    let mut universe: HashSet<String> = HashSet::new();
    for e in side_a.iter().chain(side_b.iter()) {
        universe.insert(e.path.clone());
    }

    let store = build_store(side_a, side_b);
    let mut combined: Vec<String> = Vec::new();
    combined.extend(store.only(Side::A).unwrap());
    combined.extend(store.only(Side::B).unwrap());
    combined.extend(store.common().unwrap());

    let combined_set: HashSet<String> = combined.iter().cloned().collect();
    assert_eq!(combined_set, universe);
    // No path may appear in more than one of the three sets.
    assert_eq!(combined.len(), combined_set.len());
}

#[test]
fn test_common_membership_is_symmetric() {
    let (side_a, side_b) = sample_sides();

    let forward = build_store(side_a.clone(), side_b.clone());
    let swapped = build_store(side_b, side_a);

    let forward_common: HashSet<String> = forward.common().unwrap().into_iter().collect();
    let swapped_common: HashSet<String> = swapped.common().unwrap().into_iter().collect();

    assert_eq!(forward_common, swapped_common);
}

#[test]
fn test_differing_is_subset_of_common() {
    let (side_a, side_b) = sample_sides();
    let store = build_store(side_a, side_b);

    let common: HashSet<String> = store.common().unwrap().into_iter().collect();
    for kind in [
        DiffKind::Any,
        DiffKind::Owner,
        DiffKind::Permissions,
        DiffKind::Size,
    ] {
        for path in store.differing(kind).unwrap() {
            assert!(common.contains(&path), "{path} differs but is not common");
        }
    }
}

#[test]
fn test_identical_inputs_give_identical_results() {
    let (side_a, side_b) = sample_sides();

    let first = build_store(side_a.clone(), side_b.clone());
    let second = build_store(side_a, side_b);

    assert_eq!(first.only(Side::A).unwrap(), second.only(Side::A).unwrap());
    assert_eq!(first.only(Side::B).unwrap(), second.only(Side::B).unwrap());
    assert_eq!(first.common().unwrap(), second.common().unwrap());
    for kind in [
        DiffKind::Any,
        DiffKind::Owner,
        DiffKind::Permissions,
        DiffKind::Size,
    ] {
        assert_eq!(first.differing(kind).unwrap(), second.differing(kind).unwrap());
    }
}

// ═══════════════════════════════════════════════════════════
// Classification Scenarios
// ═══════════════════════════════════════════════════════════

#[test]
fn test_owner_drift_only_scenario() {
    // A has foo owned by alice; B has foo owned by bob plus an extra bar.
    // Sizes and modes are equal, so only the ownership category fires.
    let side_a = vec![entry("foo", "alice", "staff", "0644", "100")];
    let side_b = vec![
        entry("foo", "bob", "staff", "0644", "100"),
        entry("bar", "alice", "staff", "0644", "50"),
    ];
    let store = build_store(side_a, side_b);

    assert!(store.only(Side::A).unwrap().is_empty());
    assert_eq!(store.only(Side::B).unwrap(), vec!["bar"]);
    assert_eq!(store.common().unwrap(), vec!["foo"]);
    assert_eq!(store.differing(DiffKind::Owner).unwrap(), vec!["foo"]);
    assert!(store.differing(DiffKind::Permissions).unwrap().is_empty());
    // Equal sizes: the size category must stay empty even though other
    // attributes of foo drifted.
    assert!(store.differing(DiffKind::Size).unwrap().is_empty());
}

#[test]
fn test_each_category_fires_independently() {
    let side_a = vec![
        entry("owner", "alice", "staff", "644", "10"),
        entry("perm", "root", "root", "600", "10"),
        entry("size", "root", "root", "644", "10"),
    ];
    let side_b = vec![
        entry("owner", "bob", "staff", "644", "10"),
        entry("perm", "root", "root", "644", "10"),
        entry("size", "root", "root", "644", "20"),
    ];
    let store = build_store(side_a, side_b);

    assert_eq!(store.differing(DiffKind::Owner).unwrap(), vec!["owner"]);
    assert_eq!(store.differing(DiffKind::Permissions).unwrap(), vec!["perm"]);
    assert_eq!(store.differing(DiffKind::Size).unwrap(), vec!["size"]);
    let any = store.differing(DiffKind::Any).unwrap();
    assert_eq!(any, vec!["owner", "perm", "size"]);
}

#[test]
fn test_empty_sides() {
    let store = build_store(vec![], vec![]);

    assert!(store.only(Side::A).unwrap().is_empty());
    assert!(store.only(Side::B).unwrap().is_empty());
    assert!(store.common().unwrap().is_empty());
    assert!(store.differing(DiffKind::Any).unwrap().is_empty());
}

#[test]
fn test_size_stored_as_text_compares_literally() {
    // Sizes are compared as the traversal printed them; "0100" and "100"
    // are different records even though they are numerically equal.
    let side_a = vec![entry("foo", "root", "root", "644", "0100")];
    let side_b = vec![entry("foo", "root", "root", "644", "100")];
    let store = build_store(side_a, side_b);

    assert_eq!(store.differing(DiffKind::Size).unwrap(), vec!["foo"]);
}
