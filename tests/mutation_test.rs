//! insert, replace, add, erase and clear

use nodetree::util::testing::{init_test_setup, sample_tree};
use nodetree::{NodeId, NodeTree};
use rstest::{fixture, rstest};

type Sample = (NodeTree<&'static str, i32>, [NodeId; 6]);

#[fixture]
fn sample() -> Sample {
    init_test_setup();
    sample_tree()
}

// ============================================================
// insert
// ============================================================

#[rstest]
fn given_existing_child_key_when_inserting_then_values_merge_in_call_order(sample: Sample) {
    let (mut tree, [root, x, ..]) = sample;
    let before = tree.child_count(root);

    assert_eq!(tree.insert(root, "x", vec![7, 8]), Some(x));
    assert_eq!(tree.insert_value(root, "x", 9), Some(x));

    assert_eq!(tree.values(x), Some(&[1, 7, 8, 9][..]));
    assert_eq!(tree.child_count(root), before);
}

#[rstest]
fn given_new_key_when_inserting_then_appended_as_last_sibling(sample: Sample) {
    let (mut tree, [root, x, y, ..]) = sample;
    let fresh = tree.insert(root, "a", vec![]).unwrap();
    assert_eq!(tree.child_ids(root), vec![x, y, fresh]);
    assert_eq!(tree.node(fresh).unwrap().parent(), Some(root));
    assert_eq!(tree.value_count(fresh), 0);
}

#[rstest]
fn given_key_used_elsewhere_when_inserting_under_other_parent_then_new_node(sample: Sample) {
    let (mut tree, [_, x, _, z, ..]) = sample;
    let nested = tree.insert(z, "x", vec![0]).unwrap();
    assert_ne!(nested, x);
    assert_eq!(tree.path(nested), vec!["root", "y", "z", "x"]);
}

// ============================================================
// replace
// ============================================================

#[rstest]
fn given_node_when_replacing_then_values_overwritten(sample: Sample) {
    let (mut tree, [_, _, _, z, ..]) = sample;
    assert_eq!(tree.replace(z, vec![42]), Some(z));
    assert_eq!(tree.values(z), Some(&[42][..]));
    assert_eq!(tree.replace(z, vec![]), Some(z));
    assert_eq!(tree.value_count(z), 0);
}

// ============================================================
// add
// ============================================================

#[test]
fn given_empty_tree_when_adding_path_then_chain_created() {
    init_test_setup();
    let mut tree: NodeTree<&str, char> = NodeTree::new();
    let c = tree.add(&["A", "B", "C"], vec!['x']).unwrap();

    assert_eq!(tree.len(), 3);
    let a = tree.root().unwrap();
    let b = tree.find(&["A", "B"]).unwrap();
    assert_eq!(tree.value_count(a), 0);
    assert_eq!(tree.value_count(b), 0);
    assert_eq!(tree.values(c), Some(&['x'][..]));
    assert_eq!(tree.find(&["A", "B", "C"]), Some(c));
}

#[rstest]
fn given_existing_path_when_adding_then_values_merge(sample: Sample) {
    let (mut tree, [_, _, _, z, ..]) = sample;
    assert_eq!(tree.add(&["root", "y", "z"], vec![4]), Some(z));
    assert_eq!(tree.add_value(&["root", "y", "z"], 5), Some(z));
    assert_eq!(tree.values(z), Some(&[2, 3, 4, 5][..]));
    assert_eq!(tree.len(), 6);
}

#[rstest]
fn given_partial_path_when_adding_then_suffix_created_valueless(sample: Sample) {
    let (mut tree, [_, _, _, z, ..]) = sample;
    let leaf = tree.add(&["root", "y", "z", "p", "q"], vec![6, 6]).unwrap();

    assert_eq!(tree.len(), 8);
    let p = tree.find(&["root", "y", "z", "p"]).unwrap();
    assert_eq!(tree.child_ids(z), vec![p]);
    assert_eq!(tree.value_count(p), 0);
    assert_eq!(tree.values(leaf), Some(&[6, 6][..]));
}

#[rstest]
fn given_wrong_root_key_when_adding_then_none_and_tree_unchanged(sample: Sample) {
    let (mut tree, _) = sample;
    assert_eq!(tree.add(&["other", "y"], vec![1]), None);
    assert_eq!(tree.add(&["y", "z"], vec![1]), None);
    assert_eq!(tree.len(), 6);
}

#[rstest]
fn given_empty_path_when_adding_then_noop(sample: Sample) {
    let (mut tree, _) = sample;
    assert_eq!(tree.add(&[], vec![1]), None);
    assert_eq!(tree.len(), 6);

    let mut empty: NodeTree<&str, i32> = NodeTree::new();
    assert_eq!(empty.add(&[], vec![1]), None);
    assert!(empty.is_empty());
}

// ============================================================
// erase
// ============================================================

#[rstest]
#[case::leaf_with_next_sibling(1, Some(2))]
#[case::inner_last_child(2, None)]
#[case::leaf_with_sibling_subtree(3, Some(4))]
#[case::last_leaf_climbs_to_end(5, None)]
fn given_non_root_when_erasing_then_returns_pre_order_successor(
    sample: Sample,
    #[case] target: usize,
    #[case] expected: Option<usize>,
) {
    let (mut tree, ids) = sample;
    assert_eq!(tree.erase(ids[target]), expected.map(|i| ids[i]));
}

#[test]
fn given_deep_leaf_when_erasing_then_successor_is_ancestor_sibling() {
    // a
    // ├── b
    // │   └── c
    // └── d
    let mut tree: NodeTree<&str, i32> = NodeTree::new();
    let c = tree.add(&["a", "b", "c"], vec![]).unwrap();
    let d = tree.add(&["a", "d"], vec![]).unwrap();
    assert_eq!(tree.erase(c), Some(d));
    assert_eq!(tree.len(), 3);
}

#[rstest]
fn given_middle_sibling_when_erasing_then_others_keep_order() {
    let mut tree: NodeTree<&str, i32> = NodeTree::with_root("r");
    let r = tree.root().unwrap();
    let ids: Vec<NodeId> = ["a", "b", "c", "d"]
        .into_iter()
        .map(|key| tree.insert(r, key, vec![]).unwrap())
        .collect();

    assert_eq!(tree.erase(ids[1]), Some(ids[2]));
    assert_eq!(tree.child_count(r), 3);
    assert_eq!(tree.child_ids(r), vec![ids[0], ids[2], ids[3]]);

    let keys: Vec<&str> = tree.iter().map(|(_, node)| *node.key()).collect();
    assert_eq!(keys, ["r", "a", "c", "d"]);
}

#[rstest]
fn given_subtree_when_erasing_then_descendants_gone(sample: Sample) {
    let (mut tree, [root, x, y, z, w, wx]) = sample;
    assert_eq!(tree.erase(y), None);
    assert_eq!(tree.len(), 2);
    for id in [y, z, w, wx] {
        assert!(!tree.contains(id));
    }
    assert_eq!(tree.child_ids(root), vec![x]);
    assert_eq!(tree.find(&["root", "y", "z"]), None);
}

#[rstest]
fn given_root_when_erasing_then_tree_empty(sample: Sample) {
    let (mut tree, [root, x, ..]) = sample;
    assert_eq!(tree.erase(root), None);
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.begin(), tree.end());
    assert!(!tree.contains(x));
}

#[rstest]
fn given_cleared_tree_when_adding_then_new_root_accepted(sample: Sample) {
    let (mut tree, [root, ..]) = sample;
    tree.clear();
    assert!(tree.is_empty());
    tree.clear();

    let fresh = tree.add(&["other"], vec![1]).unwrap();
    assert_eq!(tree.root(), Some(fresh));
    assert_ne!(fresh, root);
    assert!(!tree.contains(root));
}

#[test]
fn given_erase_during_traversal_when_continuing_then_visits_remaining_nodes() {
    let (mut tree, [_, _, _, z, w, wx]) = sample_tree();
    // drop every node holding a value of 1 or more than one value
    let mut cursor = tree.begin_mut();
    let mut kept = Vec::new();
    while let Some(id) = cursor.node_id() {
        if cursor.values().is_some_and(|values| values.len() > 1 || values.first() == Some(&1)) {
            cursor.remove_current();
        } else {
            kept.push(id);
            cursor.move_next();
        }
    }
    assert!(!kept.contains(&z));
    assert!(kept.contains(&w) && kept.contains(&wx));
    assert_eq!(kept.len(), tree.len());
}

// ============================================================
// Scale: no recursion on destruction
// ============================================================

#[test]
fn given_very_deep_chain_when_erasing_then_completes() {
    let mut tree: NodeTree<u32, ()> = NodeTree::with_root(0);
    let mut parent = tree.root().unwrap();
    for key in 1..200_000 {
        parent = tree.insert(parent, key, vec![]).unwrap();
    }
    assert_eq!(tree.len(), 200_000);
    let child = tree.node(tree.root().unwrap()).unwrap().first_child().unwrap();

    assert_eq!(tree.erase(child), None);
    assert_eq!(tree.len(), 1);
    assert!(!tree.contains(parent));
}

#[test]
fn given_very_deep_chain_when_dropped_then_completes() {
    let path: Vec<u32> = (0..200_000).collect();
    let mut tree: NodeTree<u32, String> = NodeTree::new();
    let leaf = tree.add(&path, vec!["leaf".into()]).unwrap();
    assert_eq!(tree.path(leaf).len(), path.len());
    assert_eq!(tree.iter().count(), path.len());
    drop(tree);
}

#[test]
fn given_very_wide_tree_when_clearing_then_empty() {
    let mut tree: NodeTree<u32, u32> = NodeTree::with_root(0);
    let root = tree.root().unwrap();
    for key in 1..5_000 {
        tree.insert_value(root, key, key);
    }
    assert_eq!(tree.child_count(root), 4_999);
    tree.clear();
    assert!(tree.is_empty());
}
