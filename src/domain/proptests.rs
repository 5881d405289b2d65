use super::*;

use proptest::prelude::*;
use std::collections::HashSet;

#[derive(Debug, Clone)]
enum Op {
    Add(Vec<u8>, u16),
    Insert(usize, u8, u16),
    Erase(usize),
    Replace(usize, u16),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (prop::collection::vec(0u8..4, 1..5), any::<u16>()).prop_map(|(p, v)| Op::Add(p, v)),
        4 => (any::<usize>(), 0u8..4, any::<u16>()).prop_map(|(n, k, v)| Op::Insert(n, k, v)),
        1 => any::<usize>().prop_map(Op::Erase),
        1 => (any::<usize>(), any::<u16>()).prop_map(|(n, v)| Op::Replace(n, v)),
    ]
}

fn pick(tree: &NodeTree<u8, u16>, n: usize) -> Option<NodeId> {
    let ids: Vec<NodeId> = tree.iter().map(|(id, _)| id).collect();
    (!ids.is_empty()).then(|| ids[n % ids.len()])
}

fn validate_tree(tree: &NodeTree<u8, u16>) {
    let visited: Vec<NodeId> = tree.iter().map(|(id, _)| id).collect();
    assert_eq!(visited.len(), tree.len(), "pre-order must visit every node once");

    let roots = visited
        .iter()
        .filter(|&&id| tree.node(id).unwrap().is_root())
        .count();
    assert_eq!(roots, usize::from(!tree.is_empty()), "exactly one root");

    for &id in &visited {
        let node = tree.node(id).unwrap();
        let keys: HashSet<u8> = tree
            .children(id)
            .map(|child| *tree.key(child).unwrap())
            .collect();
        assert_eq!(keys.len(), node.child_count(), "sibling keys must be distinct");

        let chain = tree.child_ids(id);
        assert_eq!(chain.as_slice(), node.children(), "sibling links match child list");

        assert_eq!(tree.find(&tree.path(id)), Some(id), "path resolves back to node");
        assert_eq!(tree.begin_from(id), tree.begin());
    }
}

proptest! {
    #[test]
    fn random_operations_keep_structure_valid(ops in prop::collection::vec(op(), 1..64)) {
        let mut tree: NodeTree<u8, u16> = NodeTree::new();
        for op in ops {
            let before = tree.len();
            match op {
                Op::Add(path, v) => {
                    let result = tree.add(&path, vec![v]);
                    if result.is_none() {
                        prop_assert_eq!(tree.len(), before);
                    }
                }
                Op::Insert(n, key, v) => {
                    if let Some(parent) = pick(&tree, n) {
                        let child = tree.insert(parent, key, vec![v]).unwrap();
                        prop_assert_eq!(tree.node(child).unwrap().values().last(), Some(&v));
                    }
                }
                Op::Erase(n) => {
                    if let Some(target) = pick(&tree, n) {
                        let expected = tree.iter().map(|(id, _)| id).skip_while(|&id| id != target)
                            .find(|&id| !tree.path(id).starts_with(&tree.path(target)));
                        let subtree = tree.iter_from(target).count();
                        prop_assert_eq!(tree.erase(target), expected);
                        prop_assert_eq!(tree.len(), before - subtree);
                    }
                }
                Op::Replace(n, v) => {
                    if let Some(target) = pick(&tree, n) {
                        tree.replace(target, vec![v]);
                        prop_assert_eq!(tree.values(target), Some(&[v][..]));
                    }
                }
            }
            validate_tree(&tree);
        }
    }
}
