mod helpers;

use helpers::{fixture_index, write_data, FIXTURE_JSON};
use uma_affinity::affinity::{score_tree, AncestryTree, ParentSlot};
use uma_affinity::index::{load_index, load_with_overlay, IndexError};

#[test]
fn loads_document_into_index() {
    let (_tmp, path) = write_data("affinity_components.json", FIXTURE_JSON);
    let index = load_index(&path).unwrap();
    assert_eq!(index, fixture_index());
}

#[test]
fn loaded_index_scores_like_in_memory_fixture() {
    let (_tmp, path) = write_data("affinity_components.json", FIXTURE_JSON);
    let loaded = load_index(&path).unwrap();
    let tree = AncestryTree::new(1, ParentSlot::new(5, Some(2), None), ParentSlot::bare(3));
    assert_eq!(
        score_tree(&tree, &loaded),
        score_tree(&tree, &fixture_index())
    );
}

#[test]
fn missing_file_is_an_error() {
    let tmp = tempfile::TempDir::new().unwrap();
    let err = load_index(tmp.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, IndexError::Missing { .. }));
}

#[test]
fn corrupt_file_is_a_parse_error() {
    let (_tmp, path) = write_data("broken.json", "{ not json");
    let err = load_index(&path).unwrap_err();
    assert!(matches!(err, IndexError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn overlay_replaces_matching_entries() {
    let (_base_dir, base) = write_data("jp.json", FIXTURE_JSON);
    let (_overlay_dir, overlay) = write_data(
        "global.json",
        r#"{
            "relation_points": {"20": 70},
            "chara_relations": {"3": [10]},
            "chara_map": {"3": "Teio"}
        }"#,
    );

    let index = load_with_overlay(&base, Some(overlay.as_path())).unwrap();
    assert_eq!(index.points_of(10), 100);
    assert_eq!(index.points_of(20), 70);
    assert_eq!(index.name_of(3), Some("Teio"));
    assert_eq!(index.name_of(1), Some("Special Week"));
    assert!(index.groups_of(3).unwrap().contains(&10));
    assert!(!index.groups_of(3).unwrap().contains(&20));
}

#[test]
fn missing_overlay_falls_back_to_base() {
    let (tmp, base) = write_data("jp.json", FIXTURE_JSON);
    let overlay = tmp.path().join("global.json");
    let index = load_with_overlay(&base, Some(overlay.as_path())).unwrap();
    assert_eq!(index, fixture_index());
}

#[test]
fn corrupt_overlay_is_still_an_error() {
    let (tmp, base) = write_data("jp.json", FIXTURE_JSON);
    let overlay = tmp.path().join("global.json");
    std::fs::write(&overlay, r#"{"relation_points": {"10": "lots"}}"#).unwrap();
    let err = load_with_overlay(&base, Some(overlay.as_path())).unwrap_err();
    assert!(matches!(err, IndexError::Parse { .. }));
}

#[test]
fn missing_base_fails_even_with_overlay() {
    let (tmp, overlay) = write_data("global.json", FIXTURE_JSON);
    let base = tmp.path().join("jp.json");
    let err = load_with_overlay(&base, Some(overlay.as_path())).unwrap_err();
    assert!(matches!(err, IndexError::Missing { .. }));
}
