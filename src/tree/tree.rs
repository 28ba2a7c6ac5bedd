//! The style tree that cogs are resolved from.

use serde_json::{Map, Value};

use super::node::{Branch, StyleNode};
use crate::context::Context;
use crate::declaration::Declarations;
use crate::path::{json_at, segments};

/// Top-level member holding declaration key names for dynamic cogs.
pub const KEYS_MEMBER: &str = "keys";
/// Top-level member holding named values for dynamic cogs and `named_value`.
pub const VALUES_MEMBER: &str = "values";

/// What a path lookup found in a tree.
#[derive(Debug, Clone, Copy)]
pub enum Found<'a> {
    /// A node of the cog tree.
    Node(&'a StyleNode),
    /// An entry of the `keys` or `values` maps.
    Json(&'a Value),
}

/// A nested tree of cogs plus the auxiliary `keys` and `values` maps.
///
/// The tree is immutable once handed to a [`CogStyle`](crate::CogStyle).
/// Paths starting with `keys.` or `values.` address the auxiliary maps;
/// every other path addresses the cog nodes.
///
/// # Example
///
/// ```rust
/// use cogstyle::{Declarations, StyleTree};
/// use serde_json::json;
///
/// let tree = StyleTree::new()
///     .with_keys(json!({ "bg": "background-color" }))
///     .with_values(json!({ "brand": "#ffcc00" }))
///     .add("text.muted", "color: #888;")
///     .add_fn("surface.brand", |ctx| {
///         Declarations::list([(ctx.key("bg"), ctx.value_str("brand").unwrap_or("none"))])
///     });
///
/// assert!(tree.get("text.muted").is_some());
/// assert!(tree.get("values.brand").is_some());
/// assert!(tree.get("text.loud").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct StyleTree {
    pub(super) root: Branch,
    keys: Value,
    values: Value,
}

impl StyleTree {
    /// Creates an empty tree with empty `keys` and `values` maps.
    pub fn new() -> Self {
        Self {
            root: Branch::new(),
            keys: Value::Object(Map::new()),
            values: Value::Object(Map::new()),
        }
    }

    /// Adds a node at a dotted path, returning the updated tree for chaining.
    ///
    /// Missing branches along the path are created. A leaf standing where a
    /// branch is needed is replaced by a branch. The node at the final segment
    /// is replaced if it already exists.
    ///
    /// Paths under `keys` or `values` are ignored: those members are set with
    /// [`with_keys`](Self::with_keys) and [`with_values`](Self::with_values).
    pub fn add<V: Into<StyleNode>>(mut self, path: &str, value: V) -> Self {
        self.insert(path, value.into());
        self
    }

    /// Adds a dynamic cog at a dotted path.
    pub fn add_fn<F>(self, path: &str, f: F) -> Self
    where
        F: Fn(&Context<'_>) -> Declarations + Send + Sync + 'static,
    {
        self.add(path, StyleNode::dynamic(f))
    }

    /// Replaces the `keys` map.
    pub fn with_keys(mut self, keys: Value) -> Self {
        self.keys = keys;
        self
    }

    /// Replaces the `values` map.
    pub fn with_values(mut self, values: Value) -> Self {
        self.values = values;
        self
    }

    pub(crate) fn insert(&mut self, path: &str, node: StyleNode) {
        let Some(parts) = segments(path) else {
            tracing::warn!(path, "ignoring style node with an invalid path");
            return;
        };
        if is_reserved(parts[0]) {
            tracing::warn!(path, "ignoring style node under a reserved member");
            return;
        }

        let Some((last, parents)) = parts.split_last() else {
            return;
        };
        let mut branch = &mut self.root;
        for segment in parents {
            if !matches!(branch.get(segment), Some(StyleNode::Branch(_))) {
                branch.insert(*segment, StyleNode::Branch(Branch::new()));
            }
            let Some(StyleNode::Branch(child)) = branch.get_mut(segment) else {
                return;
            };
            branch = child;
        }
        branch.insert(*last, node);
    }

    /// The top-level cog nodes.
    pub fn root(&self) -> &Branch {
        &self.root
    }

    pub fn keys(&self) -> &Value {
        &self.keys
    }

    pub fn values(&self) -> &Value {
        &self.values
    }

    /// Looks up a dotted path.
    ///
    /// Returns `None` when nothing is there: an unknown segment, a walk
    /// through a leaf, a JSON `null`, or a malformed path.
    pub fn get(&self, path: &str) -> Option<Found<'_>> {
        let parts = segments(path)?;
        let (first, rest) = parts.split_first()?;

        match *first {
            KEYS_MEMBER => json_at(&self.keys, rest).map(Found::Json),
            VALUES_MEMBER => json_at(&self.values, rest).map(Found::Json),
            _ => {
                let mut node = self.root.get(first)?;
                for segment in rest {
                    node = match node {
                        StyleNode::Branch(branch) => branch.get(segment)?,
                        _ => return None,
                    };
                }
                Some(Found::Node(node))
            }
        }
    }
}

impl Default for StyleTree {
    fn default() -> Self {
        Self::new()
    }
}

fn is_reserved(name: &str) -> bool {
    name == KEYS_MEMBER || name == VALUES_MEMBER
}
