//! Domain layer: the tree container and its traversal protocol
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod compare;
pub mod cursor;
pub mod display;
pub mod mutation;
pub mod node;
pub mod resolver;
pub mod tree;

#[cfg(test)]
mod proptests;

pub use compare::{KeyCompare, NaturalOrder};
pub use cursor::{Cursor, CursorMut, Iter};
pub use display::TreeDisplay;
pub use node::{Node, NodeId};
pub use resolver::Children;
pub use tree::NodeTree;
