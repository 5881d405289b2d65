use std::fmt;

use generational_arena::Index;

/// Handle to a node stored in a [`NodeTree`](crate::NodeTree).
///
/// Handles are cheap to copy and stay valid until the node they reference is
/// erased. A handle to an erased node is stale: every lookup through it
/// returns `None`, even after the arena slot has been reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) Index);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.0.into_raw_parts();
        write!(f, "#{}.{}", slot, generation)
    }
}

/// A key with its ordered value sequence and structural links.
///
/// Links are handles into the owning tree's arena. Only the tree edits them.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) values: Vec<V>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) next_sibling: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, values: Vec<V>, parent: Option<NodeId>) -> Self {
        Self {
            key,
            values,
            parent,
            next_sibling: None,
            children: Vec::new(),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn values(&self) -> &[V] {
        &self.values
    }

    /// Parent handle, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Next node in the parent's child list, `None` for the last child.
    pub fn next_sibling(&self) -> Option<NodeId> {
        self.next_sibling
    }

    pub fn first_child(&self) -> Option<NodeId> {
        self.children.first().copied()
    }

    /// Direct children in sibling order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn value_count(&self) -> usize {
        self.values.len()
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
