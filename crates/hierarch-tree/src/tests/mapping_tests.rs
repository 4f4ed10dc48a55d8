//! Tests for [`SegmentedMapping`].

use rstest::{fixture, rstest};

use crate::{Lookup, PathError, SegmentedMapping, SetOutcome};

#[fixture]
fn abc_tree() -> SegmentedMapping<i32> {
    let mut tree = SegmentedMapping::new();
    tree.set(&["a", "b", "c"], 5).expect("set a/b/c");
    tree
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_mapping_is_empty() {
    let tree: SegmentedMapping<i32> = SegmentedMapping::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.get(&["a"]).expect("valid path"), None);
}

// ---------------------------------------------------------------------------
// set / get
// ---------------------------------------------------------------------------

#[test]
fn set_then_get_returns_value() {
    let mut tree = SegmentedMapping::new();
    let outcome = tree.set(&["a", "b", "c"], 5).expect("set");
    assert_eq!(outcome, SetOutcome::AddedNew);
    assert_eq!(tree.get(&["a", "b", "c"]).expect("get"), Some(&5));
    assert_eq!(tree.len(), 1);
}

#[rstest]
fn second_set_replaces_existing(mut abc_tree: SegmentedMapping<i32>) {
    let outcome = abc_tree.set(&["a", "b", "c"], 7).expect("set");
    assert_eq!(outcome, SetOutcome::ReplacedExisting);
    assert_eq!(abc_tree.get(&["a", "b", "c"]).expect("get"), Some(&7));
    assert_eq!(abc_tree.len(), 1);
}

#[rstest]
fn every_later_set_reports_replacement(mut abc_tree: SegmentedMapping<i32>) {
    for value in [1, 5, 1] {
        let outcome = abc_tree.set(&["a", "b", "c"], value).expect("set");
        assert_eq!(outcome, SetOutcome::ReplacedExisting);
    }
    assert_eq!(abc_tree.get(&["a", "b", "c"]).expect("get"), Some(&1));
}

#[rstest]
#[case::root_child(&["a"])]
#[case::parent(&["a", "b"])]
#[case::sibling(&["a", "b", "d"])]
#[case::descendant(&["a", "b", "c", "d"])]
#[case::unrelated(&["x", "y"])]
fn get_ignores_related_paths(abc_tree: SegmentedMapping<i32>, #[case] path: &[&str]) {
    assert_eq!(abc_tree.get(path).expect("get"), None);
}

#[rstest]
fn sibling_set_adds_new_and_keeps_existing(mut abc_tree: SegmentedMapping<i32>) {
    let outcome = abc_tree.set(&["a", "b", "d"], 9).expect("set");
    assert_eq!(outcome, SetOutcome::AddedNew);
    assert_eq!(abc_tree.get(&["a", "b", "c"]).expect("get"), Some(&5));
    assert_eq!(abc_tree.get(&["a", "b", "d"]).expect("get"), Some(&9));
    assert_eq!(abc_tree.len(), 2);
}

#[rstest]
fn ancestor_value_is_independent_of_descendant(mut abc_tree: SegmentedMapping<i32>) {
    let outcome = abc_tree.set(&["a"], 1).expect("set");
    assert_eq!(outcome, SetOutcome::AddedNew);
    assert_eq!(abc_tree.get(&["a"]).expect("get"), Some(&1));
    assert_eq!(abc_tree.get(&["a", "b", "c"]).expect("get"), Some(&5));
}

#[test]
fn owned_segments_are_accepted() {
    let mut tree = SegmentedMapping::new();
    let path: Vec<String> = "creature;animal".split(';').map(str::to_owned).collect();
    tree.set(&path, "animal").expect("set");
    assert_eq!(tree.get(&["creature", "animal"]).expect("get"), Some(&"animal"));
}

#[test]
fn empty_path_addresses_the_root() {
    let mut tree = SegmentedMapping::new();
    let root: [&str; 0] = [];
    assert_eq!(tree.set(&root, 3).expect("set"), SetOutcome::AddedNew);
    assert_eq!(tree.get(&root).expect("get"), Some(&3));
    assert_eq!(tree.get(&["a"]).expect("get"), None);
}

// ---------------------------------------------------------------------------
// lookup
// ---------------------------------------------------------------------------

#[rstest]
fn lookup_distinguishes_missing_from_vacant(abc_tree: SegmentedMapping<i32>) {
    assert_eq!(abc_tree.lookup(&["z"]).expect("lookup"), Lookup::Missing);
    assert_eq!(abc_tree.lookup(&["a", "b"]).expect("lookup"), Lookup::Vacant);
    assert_eq!(
        abc_tree.lookup(&["a", "b", "c"]).expect("lookup"),
        Lookup::Occupied(&5)
    );
}

#[rstest]
fn known_path_covers_intermediate_nodes(abc_tree: SegmentedMapping<i32>) {
    assert!(abc_tree.lookup(&["a"]).expect("lookup").is_known_path());
    assert!(!abc_tree.lookup(&["b"]).expect("lookup").is_known_path());
}

// ---------------------------------------------------------------------------
// Invalid paths
// ---------------------------------------------------------------------------

#[rstest]
#[case::only(&[""])]
#[case::leading(&["", "a"])]
#[case::middle(&["a", "", "c"])]
#[case::trailing(&["a", "b", ""])]
fn set_rejects_empty_segments(#[case] path: &[&str]) {
    let mut tree = SegmentedMapping::new();
    let err = tree.set(path, 1).expect_err("empty segment should fail");
    assert!(matches!(err, PathError::EmptySegment { .. }));
    assert!(tree.is_empty());
    assert_eq!(tree.lookup(&["a"]).expect("lookup"), Lookup::Missing);
}

#[rstest]
#[case::only(&[""])]
#[case::middle(&["a", "", "c"])]
fn get_rejects_empty_segments(abc_tree: SegmentedMapping<i32>, #[case] path: &[&str]) {
    let err = abc_tree.get(path).expect_err("empty segment should fail");
    assert!(matches!(err, PathError::EmptySegment { .. }));
}
