//! Structural edits: insert-or-merge, path add, replace, erase.
//!
//! Each operation either completes or leaves the tree untouched. Failures
//! surface as `None`, never as a panic.

use tracing::{debug, instrument, trace};

use crate::domain::compare::KeyCompare;
use crate::domain::node::NodeId;
use crate::domain::tree::NodeTree;

impl<K, V, C: KeyCompare<K>> NodeTree<K, V, C> {
    /// Adds a child `key` under `parent`, or merges into an existing one.
    ///
    /// If a child with an equivalent key exists, `values` are appended to its
    /// values and that child is returned. Otherwise a new last child is
    /// created. `None` only for a stale `parent`.
    #[instrument(level = "trace", skip_all, fields(parent = %parent))]
    pub fn insert(&mut self, parent: NodeId, key: K, values: Vec<V>) -> Option<NodeId> {
        let first = self.node(parent)?.first_child();
        if let Some(existing) = self.scan_siblings(first, &key) {
            trace!(node = %existing, added = values.len(), "merging into existing child");
            self.node_mut(existing)?.values.extend(values);
            return Some(existing);
        }
        self.attach_child(parent, key, values)
    }

    pub fn insert_value(&mut self, parent: NodeId, key: K, value: V) -> Option<NodeId> {
        self.insert(parent, key, vec![value])
    }

    /// Adds `values` to the node at `path`, creating missing nodes.
    ///
    /// - empty path: no-op, `None`
    /// - empty tree: the first key becomes the root
    /// - full match: values are appended to the existing node
    /// - first key differs from the root key: `None`, tree unchanged
    /// - partial match: the missing suffix is created as a chain of valueless
    ///   nodes and the last one receives `values`
    #[instrument(level = "debug", skip_all, fields(depth = path.len()))]
    pub fn add(&mut self, path: &[K], values: Vec<V>) -> Option<NodeId>
    where
        K: Clone,
    {
        let (first, rest) = path.split_first()?;
        let (mut anchor, missing) = if self.root.is_none() {
            (self.plant_root(first.clone(), Vec::new()), rest)
        } else {
            match self.resolve_prefix(path) {
                (Some(found), matched) if matched == path.len() => {
                    self.node_mut(found)?.values.extend(values);
                    return Some(found);
                }
                (Some(found), matched) => (found, &path[matched..]),
                (None, _) => {
                    debug!("path does not start at the root key");
                    return None;
                }
            }
        };

        for key in missing {
            anchor = self.attach_child(anchor, key.clone(), Vec::new())?;
        }
        trace!(node = %anchor, created = missing.len(), "materialized path");
        self.node_mut(anchor)?.values = values;
        Some(anchor)
    }

    pub fn add_value(&mut self, path: &[K], value: V) -> Option<NodeId>
    where
        K: Clone,
    {
        self.add(path, vec![value])
    }
}

impl<K, V, C> NodeTree<K, V, C> {
    /// Overwrites the values of `id`.
    pub fn replace(&mut self, id: NodeId, values: Vec<V>) -> Option<NodeId> {
        self.node_mut(id)?.values = values;
        Some(id)
    }

    /// Destroys `id` and its whole subtree.
    ///
    /// Returns the pre-order successor of the erased subtree: the next
    /// sibling, else the nearest ancestor's next sibling, else `None`.
    /// Erasing the root empties the tree and returns `None`.
    #[instrument(level = "debug", skip(self))]
    pub fn erase(&mut self, id: NodeId) -> Option<NodeId> {
        let parent = self.node(id)?.parent;
        let Some(parent) = parent else {
            self.clear();
            return None;
        };
        let successor = self.skip_subtree(id);
        self.unlink(parent, id);
        let removed = self.destroy(id);
        debug!(removed, "erased subtree");
        successor
    }

    /// Removes every node; a no-op on an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn clear(&mut self) {
        if let Some(root) = self.root.take() {
            let removed = self.destroy(root);
            debug!(removed, "cleared tree");
        }
    }

    /// Splices `id` out of its parent's child list and sibling chain.
    fn unlink(&mut self, parent: NodeId, id: NodeId) {
        let next = self.node(id).and_then(|node| node.next_sibling);
        let Some(parent_node) = self.node_mut(parent) else {
            return;
        };
        let Some(position) = parent_node.children.iter().position(|&child| child == id) else {
            return;
        };
        parent_node.children.remove(position);
        let previous = position
            .checked_sub(1)
            .map(|index| parent_node.children[index]);
        if let Some(previous) = previous.and_then(|prev| self.node_mut(prev)) {
            previous.next_sibling = next;
        }
    }
}
