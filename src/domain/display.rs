/*
Rendering goes through termtree so that the CLI and Debug-style dumps share one
layout. Labels are produced by a caller closure; the domain knows nothing about
separators or output settings.
 */
use std::fmt::Display;

use itertools::Itertools;
use termtree::Tree;
use tracing::instrument;

use crate::domain::node::{Node, NodeId};
use crate::domain::tree::NodeTree;

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

impl<K, V, C> NodeTree<K, V, C> {
    /// Renders the whole tree, `None` when empty.
    pub fn render<F>(&self, label: F) -> Option<Tree<String>>
    where
        F: Fn(&Node<K, V>) -> String,
    {
        self.render_from(self.root?, label)
    }

    /// Renders the subtree rooted at `id`.
    ///
    /// Built with an explicit stack. The returned `Tree` still nests once per
    /// level and drops recursively, so callers bound the depth they render
    /// (see [`height`](NodeTree::height)).
    #[instrument(level = "trace", skip(self, label))]
    pub fn render_from<F>(&self, id: NodeId, label: F) -> Option<Tree<String>>
    where
        F: Fn(&Node<K, V>) -> String,
    {
        let top = self.node(id)?;
        // frames: a started subtree and the children not yet rendered
        let mut stack = vec![(Tree::new(label(top)), top.children.iter())];
        while let Some((_, pending)) = stack.last_mut() {
            match pending.next() {
                Some(&child) => {
                    if let Some(node) = self.node(child) {
                        stack.push((Tree::new(label(node)), node.children.iter()));
                    }
                }
                None => {
                    let (done, _) = stack.pop()?;
                    match stack.last_mut() {
                        Some((parent, _)) => {
                            parent.push(done);
                        }
                        None => return Some(done),
                    }
                }
            }
        }
        None
    }
}

impl<K: Display, V: Display, C> TreeDisplay for NodeTree<K, V, C> {
    fn to_tree_string(&self) -> Tree<String> {
        self.render(|node| {
            if node.values.is_empty() {
                node.key.to_string()
            } else {
                format!("{} = {}", node.key, node.values.iter().join(", "))
            }
        })
        .unwrap_or_else(|| Tree::new("Empty tree".to_string()))
    }
}
