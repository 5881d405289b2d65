//! Key and path lookups.

use tracing::{instrument, trace};

use crate::domain::compare::KeyCompare;
use crate::domain::node::NodeId;
use crate::domain::tree::NodeTree;

impl<K, V, C: KeyCompare<K>> NodeTree<K, V, C> {
    /// First node in the pre-order walk of `subtree` (itself included) whose
    /// key is equivalent to `key`.
    ///
    /// Searches every descendant, not just direct children.
    #[instrument(level = "trace", skip_all, fields(subtree = %subtree))]
    pub fn find_in(&self, subtree: NodeId, key: &K) -> Option<NodeId> {
        self.iter_from(subtree)
            .find(|(_, node)| self.comparator.equivalent(&node.key, key))
            .map(|(id, _)| id)
    }

    /// Node addressed by `path`, a key sequence starting at the root.
    ///
    /// Every element must match; an empty path or an empty tree yields `None`.
    #[instrument(level = "trace", skip_all, fields(depth = path.len()))]
    pub fn find(&self, path: &[K]) -> Option<NodeId> {
        match self.resolve_prefix(path) {
            (Some(id), matched) if matched == path.len() => Some(id),
            _ => None,
        }
    }

    /// First value of the node at `path`.
    pub fn get(&self, path: &[K]) -> Option<&V> {
        self.gets(path)?.first()
    }

    /// All values of the node at `path`.
    pub fn gets(&self, path: &[K]) -> Option<&[V]> {
        self.values(self.find(path)?)
    }

    /// Deepest node matching a prefix of `path` and the prefix length.
    ///
    /// Level 0 scans the root alone, each further level the children of the
    /// node matched one level up.
    pub(crate) fn resolve_prefix(&self, path: &[K]) -> (Option<NodeId>, usize) {
        let mut candidates = self.root;
        let mut matched = None;
        for (depth, key) in path.iter().enumerate() {
            match self.scan_siblings(candidates, key) {
                Some(id) => {
                    matched = Some(id);
                    candidates = self.node(id).and_then(|node| node.first_child());
                }
                None => {
                    trace!(depth, "path diverges from tree");
                    return (matched, depth);
                }
            }
        }
        (matched, path.len())
    }

    /// Walks the sibling chain starting at `first` for a key equivalent to `key`.
    pub(crate) fn scan_siblings(&self, first: Option<NodeId>, key: &K) -> Option<NodeId> {
        let mut current = first;
        while let Some(id) = current {
            let node = self.node(id)?;
            if self.comparator.equivalent(&node.key, key) {
                return Some(id);
            }
            current = node.next_sibling;
        }
        None
    }
}

impl<K, V, C> NodeTree<K, V, C> {
    /// Direct children of `parent` in sibling order.
    pub fn children(&self, parent: NodeId) -> Children<'_, K, V, C> {
        Children {
            tree: self,
            next: self.node(parent).and_then(|node| node.first_child()),
        }
    }

    pub fn child_ids(&self, parent: NodeId) -> Vec<NodeId> {
        self.children(parent).collect()
    }

    /// Keys from the root down to `id`, both ends included.
    ///
    /// A stale handle yields an empty path.
    pub fn path(&self, id: NodeId) -> Vec<K>
    where
        K: Clone,
    {
        let mut keys = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current.and_then(|id| self.node(id)) {
            keys.push(node.key.clone());
            current = node.parent;
        }
        keys.reverse();
        keys
    }
}

/// Iterator over a parent's direct children, following sibling links.
pub struct Children<'a, K, V, C> {
    tree: &'a NodeTree<K, V, C>,
    next: Option<NodeId>,
}

impl<K, V, C> Iterator for Children<'_, K, V, C> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = self.tree.node(current).and_then(|node| node.next_sibling);
        Some(current)
    }
}
