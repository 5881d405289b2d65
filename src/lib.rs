//! Hierarchical key-to-multi-value container.
//!
//! A [`NodeTree`] is a tree in which every node holds a key and an ordered
//! sequence of values. Children of one parent have distinct keys under a
//! caller-supplied ordering; the same key may appear under different parents.
//! Nodes are addressed by [`NodeId`] handles or by key paths from the root.
//!
//! ```
//! use nodetree::NodeTree;
//!
//! let mut tree: NodeTree<&str, u32> = NodeTree::new();
//! let c = tree.add(&["a", "b", "c"], vec![1]).unwrap();
//! tree.add(&["a", "b", "c"], vec![2]);
//!
//! assert_eq!(tree.find(&["a", "b", "c"]), Some(c));
//! assert_eq!(tree.gets(&["a", "b", "c"]), Some(&[1, 2][..]));
//! assert_eq!(tree.path(c), vec!["a", "b", "c"]);
//!
//! let keys: Vec<&str> = tree.iter().map(|(_, node)| *node.key()).collect();
//! assert_eq!(keys, ["a", "b", "c"]);
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod util;

pub use domain::{
    Children, Cursor, CursorMut, Iter, KeyCompare, NaturalOrder, Node, NodeId, NodeTree,
    TreeDisplay,
};
