#![allow(dead_code)]

use std::collections::{BTreeSet, HashMap};
use std::path::PathBuf;

use tempfile::TempDir;
use uma_affinity::affinity::types::CharacterId;
use uma_affinity::index::RelationshipIndex;

/// Groups 10 (100 pts) and 20 (50 pts); characters 1 and 5 belong to both,
/// 2 only to 10, 3 only to 20.
pub fn fixture_index() -> RelationshipIndex {
    RelationshipIndex::new(
        HashMap::from([(10, 100), (20, 50)]),
        HashMap::from([
            (1, BTreeSet::from([10, 20])),
            (2, BTreeSet::from([10])),
            (3, BTreeSet::from([20])),
            (5, BTreeSet::from([10, 20])),
        ]),
        HashMap::from([
            (1, "Special Week".to_string()),
            (2, "Silence Suzuka".to_string()),
            (3, "Tokai Teio".to_string()),
            (5, "El Condor Pasa".to_string()),
        ]),
    )
}

/// A denser index for property-style checks: character `n` belongs to every
/// group `g` in 1..=6 where `n % g == 0`, and group `g` is worth `g * 10`.
pub fn divisor_index() -> RelationshipIndex {
    let points = (1..=6).map(|g| (g, g * 10)).collect();
    let relations = (1..=12)
        .map(|n: CharacterId| (n, (1..=6).filter(|g| n % g == 0).collect::<BTreeSet<_>>()))
        .collect();
    let names = (1..=12).map(|n| (n, format!("Character {n}"))).collect();
    RelationshipIndex::new(points, relations, names)
}

/// JSON document equivalent to [`fixture_index`].
pub const FIXTURE_JSON: &str = r#"{
  "relation_points": {"10": 100, "20": 50},
  "chara_relations": {"1": [10, 20], "2": [10], "3": [20], "5": [10, 20]},
  "chara_map": {
    "1": "Special Week",
    "2": "Silence Suzuka",
    "3": "Tokai Teio",
    "5": "El Condor Pasa"
  }
}"#;

/// Write `contents` to `name` inside a fresh temp dir. Keep the dir alive.
pub fn write_data(name: &str, contents: &str) -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    std::fs::write(&path, contents).unwrap();
    (tmp, path)
}
