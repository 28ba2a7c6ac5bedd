//! Nodes of a style tree.

use std::fmt;
use std::sync::Arc;

use crate::context::Context;
use crate::declaration::Declarations;

type StyleFn = dyn Fn(&Context<'_>) -> Declarations + Send + Sync;

/// A cog computed from props, keys and values at resolution time.
///
/// Cloning is cheap: clones share the same function.
#[derive(Clone)]
pub struct DynamicStyle(Arc<StyleFn>);

impl DynamicStyle {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Context<'_>) -> Declarations + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Runs the style function against a context.
    pub fn call(&self, ctx: &Context<'_>) -> Declarations {
        (self.0)(ctx)
    }
}

impl fmt::Debug for DynamicStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DynamicStyle(..)")
    }
}

/// An ordered mapping of child names to nodes.
///
/// Children keep insertion order, which is the order reported when a branch
/// is selected instead of a leaf. Re-inserting a name replaces the node in
/// place.
#[derive(Debug, Clone, Default)]
pub struct Branch {
    children: Vec<(String, StyleNode)>,
}

impl Branch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a child, returning the updated branch for chaining.
    pub fn with<V: Into<StyleNode>>(mut self, name: &str, node: V) -> Self {
        self.insert(name, node.into());
        self
    }

    /// Inserts or replaces a child.
    pub fn insert(&mut self, name: impl Into<String>, node: StyleNode) {
        let name = name.into();
        match self.children.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = node,
            None => self.children.push((name, node)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&StyleNode> {
        self.children
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut StyleNode> {
        self.children
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, node)| node)
    }

    /// Child names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A node in a style tree.
#[derive(Debug, Clone)]
pub enum StyleNode {
    /// A literal declaration block.
    Text(String),
    /// A cog computed per resolution.
    Dynamic(DynamicStyle),
    /// A composite node. Never usable as a cog on its own.
    Branch(Branch),
}

impl StyleNode {
    /// Wraps a style function as a node.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cogstyle::{Declarations, StyleNode};
    ///
    /// let node = StyleNode::dynamic(|ctx| {
    ///     let color = if ctx.flag("danger") { "red" } else { "inherit" };
    ///     Declarations::list([("color", color)])
    /// });
    /// assert!(node.is_leaf());
    /// ```
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&Context<'_>) -> Declarations + Send + Sync + 'static,
    {
        StyleNode::Dynamic(DynamicStyle::new(f))
    }

    pub fn is_leaf(&self) -> bool {
        !matches!(self, StyleNode::Branch(_))
    }
}

impl From<&str> for StyleNode {
    fn from(block: &str) -> Self {
        StyleNode::Text(block.to_string())
    }
}

impl From<String> for StyleNode {
    fn from(block: String) -> Self {
        StyleNode::Text(block)
    }
}

impl From<Branch> for StyleNode {
    fn from(branch: Branch) -> Self {
        StyleNode::Branch(branch)
    }
}

impl From<DynamicStyle> for StyleNode {
    fn from(style: DynamicStyle) -> Self {
        StyleNode::Dynamic(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_branch_keeps_insertion_order() {
        let branch = Branch::new()
            .with("primary", "color: blue;")
            .with("ghost", "color: gray;")
            .with("danger", "color: red;");

        let names: Vec<&str> = branch.names().collect();
        assert_eq!(names, vec!["primary", "ghost", "danger"]);
    }

    #[test]
    fn test_branch_insert_replaces_in_place() {
        let mut branch = Branch::new().with("a", "1").with("b", "2");
        branch.insert("a", StyleNode::from("3"));

        let names: Vec<&str> = branch.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(matches!(branch.get("a"), Some(StyleNode::Text(t)) if t == "3"));
        assert_eq!(branch.len(), 2);
    }

    #[test]
    fn test_dynamic_style_call() {
        let style = DynamicStyle::new(|ctx| {
            Declarations::list([("width", ctx.prop("w").cloned().unwrap_or(json!(0)))])
        });
        let props = json!({ "w": 10 });
        let empty = json!({});
        let decls = style.call(&Context::new(&props, &empty, &empty));
        assert_eq!(decls, Declarations::list([("width", "10")]));
    }

    #[test]
    fn test_is_leaf() {
        assert!(StyleNode::from("x").is_leaf());
        assert!(StyleNode::dynamic(|_| Declarations::from("")).is_leaf());
        assert!(!StyleNode::from(Branch::new()).is_leaf());
    }

    #[test]
    fn test_dynamic_debug_is_opaque() {
        let node = StyleNode::dynamic(|_| Declarations::from(""));
        assert_eq!(format!("{:?}", node), "Dynamic(DynamicStyle(..))");
    }
}
