//! Plain-text outlines.
//!
//! One entry per line: `PATH [= VALUES]`. `PATH` is keys joined by the key
//! separator, `VALUES` a list split on the value separator. Blank lines and
//! lines starting with `#` are skipped.
//!
//! ```text
//! # services
//! app/db = primary, replica
//! app/cache
//! app/db/pool = 16
//! ```

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use itertools::Itertools;
use tracing::{debug, instrument};

use crate::application::error_ext::IoResultExt;
use crate::application::{ApplicationError, ApplicationResult};
use crate::config::Settings;
use crate::domain::{Node, NodeId, NodeTree};

pub type OutlineTree = NodeTree<String, String>;

/// Separators used to read and print outline entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineFormat {
    pub key_separator: String,
    pub value_separator: String,
}

impl Default for OutlineFormat {
    fn default() -> Self {
        Self {
            key_separator: "/".into(),
            value_separator: ",".into(),
        }
    }
}

impl From<&Settings> for OutlineFormat {
    fn from(settings: &Settings) -> Self {
        Self {
            key_separator: settings.key_separator.clone(),
            value_separator: settings.value_separator.clone(),
        }
    }
}

impl OutlineFormat {
    /// Splits `text` into keys; `None` if the path or any segment is empty.
    pub fn split_path(&self, text: &str) -> Option<Vec<String>> {
        let keys: Vec<String> = text
            .trim()
            .split(self.key_separator.as_str())
            .map(|key| key.trim().to_string())
            .collect();
        keys.iter().all(|key| !key.is_empty()).then_some(keys)
    }

    /// Splits `text` into trimmed values, dropping empty items.
    pub fn split_values(&self, text: &str) -> Vec<String> {
        text.split(self.value_separator.as_str())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(String::from)
            .collect()
    }

    pub fn join_path(&self, keys: &[String]) -> String {
        keys.iter().join(&self.key_separator)
    }

    pub fn join_values(&self, values: &[String]) -> String {
        values.iter().join(&format!("{} ", self.value_separator))
    }
}

/// How `show` prints a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub show_values: bool,
    pub empty_label: String,
    pub max_depth: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for RenderOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            show_values: settings.show_values,
            empty_label: settings.empty_label.clone(),
            max_depth: settings.max_render_depth,
        }
    }
}

/// One parsed outline line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: usize,
    pub path: Vec<String>,
    pub values: Vec<String>,
}

/// A tree built from outline entries, together with the format it was read in.
#[derive(Debug, Clone)]
pub struct Outline {
    format: OutlineFormat,
    tree: OutlineTree,
}

impl Outline {
    pub fn new(format: OutlineFormat) -> Self {
        Self {
            format,
            tree: NodeTree::new(),
        }
    }

    #[instrument(level = "debug", skip(text))]
    pub fn parse(text: &str, format: OutlineFormat) -> ApplicationResult<Self> {
        let mut outline = Self::new(format);
        for (index, line) in text.lines().enumerate() {
            if let Some(entry) = outline.parse_entry(index + 1, line)? {
                outline.apply(entry)?;
            }
        }
        debug!(nodes = outline.tree.len(), "outline parsed");
        Ok(outline)
    }

    /// Reads an outline from `source`, or from stdin when `None`.
    #[instrument(level = "debug")]
    pub fn read(source: Option<&Path>, format: OutlineFormat) -> ApplicationResult<Self> {
        let text = match source {
            Some(path) => fs::read_to_string(path).with_path_context("read outline", path)?,
            None => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .with_context("read outline from stdin")?;
                buffer
            }
        };
        Self::parse(&text, format)
    }

    /// Parses a single line; `Ok(None)` for blank and comment lines.
    pub fn parse_entry(&self, line: usize, text: &str) -> ApplicationResult<Option<Entry>> {
        let trimmed = text.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }
        let (path_text, values) = match trimmed.split_once('=') {
            Some((path, values)) => (path, self.format.split_values(values)),
            None => (trimmed, Vec::new()),
        };
        let path = self
            .format
            .split_path(path_text)
            .ok_or_else(|| ApplicationError::parse(line, format!("empty key in path '{}'", path_text.trim())))?;
        Ok(Some(Entry { line, path, values }))
    }

    /// Adds an entry to the tree.
    pub fn apply(&mut self, entry: Entry) -> ApplicationResult<NodeId> {
        let Entry { line, path, values } = entry;
        self.tree.add(&path, values).ok_or_else(|| {
            let root = self
                .tree
                .root()
                .and_then(|root| self.tree.key(root))
                .cloned()
                .unwrap_or_default();
            ApplicationError::RootMismatch {
                line,
                root,
                found: path.first().cloned().unwrap_or_default(),
            }
        })
    }

    pub fn format(&self) -> &OutlineFormat {
        &self.format
    }

    pub fn tree(&self) -> &OutlineTree {
        &self.tree
    }

    pub fn into_tree(self) -> OutlineTree {
        self.tree
    }

    /// Node at the textual `path`.
    pub fn lookup(&self, path: &str) -> ApplicationResult<NodeId> {
        self.format
            .split_path(path)
            .and_then(|keys| self.tree.find(&keys))
            .ok_or_else(|| ApplicationError::PathNotFound(path.to_string()))
    }

    /// First node named `key` anywhere below `under` (default: the root).
    pub fn search(&self, key: &str, under: Option<&str>) -> ApplicationResult<NodeId> {
        let start = match under {
            Some(path) => self.lookup(path)?,
            None => self
                .tree
                .root()
                .ok_or_else(|| ApplicationError::KeyNotFound(key.to_string()))?,
        };
        self.tree
            .find_in(start, &key.to_string())
            .ok_or_else(|| ApplicationError::KeyNotFound(key.to_string()))
    }

    pub fn path_string(&self, id: NodeId) -> String {
        self.format.join_path(&self.tree.path(id))
    }

    /// Display label of a node: the key, optionally followed by its values.
    pub fn label(&self, node: &Node<String, String>, show_values: bool) -> String {
        if show_values && !node.values().is_empty() {
            format!("{} = {}", node.key(), self.format.join_values(node.values()))
        } else {
            node.key().clone()
        }
    }

    /// Renders the subtree at `id` with termtree.
    ///
    /// Subtrees deeper than `options.max_depth` are rejected before any
    /// rendering starts.
    #[instrument(level = "debug", skip(self))]
    pub fn render_at(&self, id: NodeId, options: &RenderOptions) -> ApplicationResult<String> {
        let depth = self.tree.height(id);
        if depth > options.max_depth {
            return Err(ApplicationError::TooDeep {
                depth,
                limit: options.max_depth,
            });
        }
        self.tree
            .render_from(id, |node| self.label(node, options.show_values))
            .map(|tree| tree.to_string())
            .ok_or_else(|| ApplicationError::PathNotFound(id.to_string()))
    }

    /// Renders the whole outline, `options.empty_label` when it is empty.
    pub fn render(&self, options: &RenderOptions) -> ApplicationResult<String> {
        match self.tree.root() {
            Some(root) => self.render_at(root, options),
            None => Ok(format!("{}\n", options.empty_label)),
        }
    }
}
