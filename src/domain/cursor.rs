//! Pre-order depth-first traversal.
//!
//! Order: a node, then its first child's whole subtree, then the next
//! sibling's subtree. When a node has no further sibling the walk climbs
//! ancestors until one has, or ends.

use std::fmt;
use std::iter::FusedIterator;

use tracing::{instrument, trace};

use crate::domain::compare::KeyCompare;
use crate::domain::node::{Node, NodeId};
use crate::domain::tree::NodeTree;

impl<K, V, C> NodeTree<K, V, C> {
    /// The node visited after `id` in pre-order, `None` at the end.
    pub fn successor(&self, id: NodeId) -> Option<NodeId> {
        let node = self.node(id)?;
        match node.first_child() {
            Some(child) => Some(child),
            None => self.skip_subtree(id),
        }
    }

    /// The node visited after the entire subtree rooted at `id`.
    pub(crate) fn skip_subtree(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.node(id)?;
        loop {
            if let Some(next) = current.next_sibling {
                return Some(next);
            }
            current = self.node(current.parent?)?;
        }
    }

    /// Cursor at the root; equal to [`end`](Self::end) for an empty tree.
    pub fn begin(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            tree: self,
            current: self.root,
        }
    }

    /// The "no node" cursor.
    pub fn end(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            tree: self,
            current: None,
        }
    }

    /// Cursor at the root of the tree `id` belongs to.
    ///
    /// Traversal always starts at the root, whichever node is used to obtain
    /// the cursor.
    pub fn begin_from(&self, id: NodeId) -> Cursor<'_, K, V, C> {
        Cursor {
            tree: self,
            current: self.root_of(id),
        }
    }

    /// Cursor at `id`, or the end cursor for a stale handle.
    pub fn cursor(&self, id: NodeId) -> Cursor<'_, K, V, C> {
        Cursor {
            tree: self,
            current: self.contains(id).then_some(id),
        }
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, K, V, C> {
        let current = self.root;
        CursorMut {
            tree: self,
            current,
        }
    }

    pub fn cursor_mut(&mut self, id: NodeId) -> CursorMut<'_, K, V, C> {
        let current = self.contains(id).then_some(id);
        CursorMut {
            tree: self,
            current,
        }
    }

    /// Every node in pre-order.
    pub fn iter(&self) -> Iter<'_, K, V, C> {
        Iter {
            tree: self,
            next: self.root,
            stop: None,
        }
    }

    /// The subtree rooted at `id` in pre-order, `id` included.
    pub fn iter_from(&self, id: NodeId) -> Iter<'_, K, V, C> {
        if !self.contains(id) {
            return Iter {
                tree: self,
                next: None,
                stop: None,
            };
        }
        Iter {
            tree: self,
            next: Some(id),
            stop: self.skip_subtree(id),
        }
    }
}

/// Read-only position in pre-order, possibly past the end.
///
/// Two cursors compare equal iff they reference the same node, or both
/// reference none.
pub struct Cursor<'a, K, V, C> {
    tree: &'a NodeTree<K, V, C>,
    current: Option<NodeId>,
}

impl<K, V, C> Clone for Cursor<'_, K, V, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V, C> Copy for Cursor<'_, K, V, C> {}

impl<K, V, C> PartialEq for Cursor<'_, K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl<K, V, C> Eq for Cursor<'_, K, V, C> {}

impl<K, V, C> fmt::Debug for Cursor<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cursor").field(&self.current).finish()
    }
}

impl<'a, K, V, C> Cursor<'a, K, V, C> {
    pub fn node_id(&self) -> Option<NodeId> {
        self.current
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn node(&self) -> Option<&'a Node<K, V>> {
        self.tree.node(self.current?)
    }

    pub fn key(&self) -> Option<&'a K> {
        self.node().map(Node::key)
    }

    pub fn values(&self) -> Option<&'a [V]> {
        self.node().map(Node::values)
    }

    /// Advances to the pre-order successor. Stays at the end once there.
    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|id| self.tree.successor(id));
    }

    pub fn peek_next(&self) -> Cursor<'a, K, V, C> {
        let mut next = *self;
        next.move_next();
        next
    }
}

/// Pre-order position with write access to values and structure.
pub struct CursorMut<'a, K, V, C> {
    tree: &'a mut NodeTree<K, V, C>,
    current: Option<NodeId>,
}

impl<K, V, C> fmt::Debug for CursorMut<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CursorMut").field(&self.current).finish()
    }
}

impl<K, V, C> CursorMut<'_, K, V, C> {
    pub fn node_id(&self) -> Option<NodeId> {
        self.current
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    pub fn key(&self) -> Option<&K> {
        self.tree.key(self.current?)
    }

    pub fn values(&self) -> Option<&[V]> {
        self.tree.values(self.current?)
    }

    pub fn values_mut(&mut self) -> Option<&mut Vec<V>> {
        self.tree.values_mut(self.current?)
    }

    pub fn move_next(&mut self) {
        self.current = self.current.and_then(|id| self.tree.successor(id));
    }

    /// Read-only view at the same position.
    pub fn as_cursor(&self) -> Cursor<'_, K, V, C> {
        Cursor {
            tree: &*self.tree,
            current: self.current,
        }
    }

    /// Overwrites the current node's values.
    pub fn replace(&mut self, values: Vec<V>) -> Option<NodeId> {
        self.tree.replace(self.current?, values)
    }

    /// Erases the current subtree and moves to its pre-order successor.
    ///
    /// Erasing the root empties the tree and leaves the cursor at the end.
    #[instrument(level = "trace", skip(self))]
    pub fn remove_current(&mut self) -> Option<NodeId> {
        let removed = self.current?;
        self.current = self.tree.erase(removed);
        trace!(next = ?self.current, "cursor moved past erased subtree");
        self.current
    }
}

impl<K, V, C: KeyCompare<K>> CursorMut<'_, K, V, C> {
    /// Inserts or merges a child of the current node; the cursor stays put.
    pub fn insert_child(&mut self, key: K, values: Vec<V>) -> Option<NodeId> {
        self.tree.insert(self.current?, key, values)
    }
}

/// Iterator over `(handle, node)` pairs in pre-order.
pub struct Iter<'a, K, V, C> {
    tree: &'a NodeTree<K, V, C>,
    next: Option<NodeId>,
    // first node past the iterated subtree
    stop: Option<NodeId>,
}

impl<'a, K, V, C> Iterator for Iter<'a, K, V, C> {
    type Item = (NodeId, &'a Node<K, V>);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if self.next == self.stop {
            self.next = None;
            return None;
        }
        let node = self.tree.node(current)?;
        self.next = self.tree.successor(current);
        Some((current, node))
    }
}

impl<K, V, C> FusedIterator for Iter<'_, K, V, C> {}

impl<'a, K, V, C> IntoIterator for &'a NodeTree<K, V, C> {
    type Item = (NodeId, &'a Node<K, V>);
    type IntoIter = Iter<'a, K, V, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
