use generational_arena::Arena;
use tracing::instrument;

use crate::domain::compare::{KeyCompare, NaturalOrder};
use crate::domain::node::{Node, NodeId};

/// Arena-based tree mapping each key to an ordered sequence of values.
///
/// Children of one parent have pairwise non-equivalent keys under the
/// comparator `C`; keys may repeat across different parents. The tree is
/// either empty or has exactly one parentless node, the root.
///
/// `Clone` performs a deep copy. The clone's arena mirrors the source slot for
/// slot, so a [`NodeId`] taken from the source addresses the corresponding node
/// in the clone.
#[derive(Debug, Clone)]
pub struct NodeTree<K, V, C = NaturalOrder> {
    pub(crate) arena: Arena<Node<K, V>>,
    pub(crate) root: Option<NodeId>,
    pub(crate) comparator: C,
}

impl<K: Ord, V> Default for NodeTree<K, V, NaturalOrder> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> NodeTree<K, V, NaturalOrder> {
    /// An empty tree ordered by `K: Ord`.
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }

    /// A tree holding only a root with no values.
    pub fn with_root(key: K) -> Self {
        Self::with_root_values(key, Vec::new())
    }

    pub fn with_root_value(key: K, value: V) -> Self {
        Self::with_root_values(key, vec![value])
    }

    pub fn with_root_values(key: K, values: Vec<V>) -> Self {
        Self::with_root_and_comparator(key, values, NaturalOrder)
    }
}

impl<K, V, C: KeyCompare<K>> NodeTree<K, V, C> {
    /// An empty tree ordered by a caller-supplied comparator.
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Arena::new(),
            root: None,
            comparator,
        }
    }

    pub fn with_root_and_comparator(key: K, values: Vec<V>, comparator: C) -> Self {
        let mut tree = Self::with_comparator(comparator);
        tree.plant_root(key, values);
        tree
    }
}

impl<K, V, C> NodeTree<K, V, C> {
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Root handle, `None` for an empty tree.
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// True when the tree holds no nodes at all.
    ///
    /// A tree whose root has no values is not empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// True when `id` references a live node of this tree.
    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id.0)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node<K, V>> {
        self.arena.get(id.0)
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<K, V>> {
        self.arena.get_mut(id.0)
    }

    pub fn key(&self, id: NodeId) -> Option<&K> {
        self.node(id).map(Node::key)
    }

    pub fn values(&self, id: NodeId) -> Option<&[V]> {
        self.node(id).map(Node::values)
    }

    /// Mutable access to a node's values. The tree structure stays untouched.
    pub fn values_mut(&mut self, id: NodeId) -> Option<&mut Vec<V>> {
        self.node_mut(id).map(|node| &mut node.values)
    }

    /// Number of direct children of `id`, 0 for a stale handle.
    pub fn child_count(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, Node::child_count)
    }

    /// Number of values held by `id`, 0 for a stale handle.
    pub fn value_count(&self, id: NodeId) -> usize {
        self.node(id).map_or(0, Node::value_count)
    }

    /// Parentless ancestor of `id`, i.e. the root of the tree `id` lives in.
    #[instrument(level = "trace", skip(self))]
    pub fn root_of(&self, id: NodeId) -> Option<NodeId> {
        let mut current = id;
        loop {
            match self.node(current)?.parent {
                Some(parent) => current = parent,
                None => return Some(current),
            }
        }
    }

    /// Number of levels in the subtree rooted at `id`: 1 for a leaf, 0 for a
    /// stale handle.
    pub fn height(&self, id: NodeId) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(id, 1)];
        while let Some((current, level)) = stack.pop() {
            let Some(node) = self.node(current) else {
                continue;
            };
            deepest = deepest.max(level);
            stack.extend(node.children.iter().map(|&child| (child, level + 1)));
        }
        deepest
    }

    pub(crate) fn plant_root(&mut self, key: K, values: Vec<V>) -> NodeId {
        let id = NodeId(self.arena.insert(Node::new(key, values, None)));
        self.root = Some(id);
        id
    }

    /// Appends a new last child under `parent` without checking sibling keys.
    pub(crate) fn attach_child(&mut self, parent: NodeId, key: K, values: Vec<V>) -> Option<NodeId> {
        let previous_last = self.node(parent)?.children.last().copied();
        let id = NodeId(self.arena.insert(Node::new(key, values, Some(parent))));
        if let Some(parent_node) = self.node_mut(parent) {
            parent_node.children.push(id);
        }
        if let Some(previous) = previous_last.and_then(|prev| self.node_mut(prev)) {
            previous.next_sibling = Some(id);
        }
        Some(id)
    }

    /// Removes `id` and every node reachable through its children.
    ///
    /// Uses an explicit stack, so depth is bounded by memory only.
    pub(crate) fn destroy(&mut self, id: NodeId) -> usize {
        let mut stack = vec![id];
        let mut removed = 0;
        while let Some(current) = stack.pop() {
            if let Some(node) = self.arena.remove(current.0) {
                stack.extend(node.children);
                removed += 1;
            }
        }
        removed
    }
}
