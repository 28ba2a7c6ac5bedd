//! Classifying what a path selects in a style tree.

use serde_json::Value;

use crate::context::Context;
use crate::declaration::Declarations;
use crate::path::child_path;
use crate::tree::{Found, StyleNode, StyleTree};

/// The outcome of resolving a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Nothing lives at the path.
    Missing,
    /// The path selects a composite node. Holds its child paths in order.
    Intermediate(Vec<String>),
    /// The path selects a cog. Holds what the cog resolved to.
    Leaf(Declarations),
}

impl Resolution {
    /// Short name of the outcome, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Resolution::Missing => "missing",
            Resolution::Intermediate(_) => "intermediate",
            Resolution::Leaf(_) => "leaf",
        }
    }
}

/// Resolves `path` in `tree`.
///
/// Text cogs resolve to their block verbatim. Dynamic cogs are called once
/// with a [`Context`] over `props` and the tree's `keys` and `values`.
///
/// Entries of the `keys` and `values` maps are addressable too: strings
/// resolve like text cogs, other scalars to their JSON rendering, and
/// objects and arrays are intermediate.
pub fn resolve(tree: &StyleTree, path: &str, props: &Value) -> Resolution {
    let resolution = match tree.get(path) {
        None => Resolution::Missing,
        Some(Found::Node(node)) => match node {
            StyleNode::Text(block) => Resolution::Leaf(Declarations::Block(block.clone())),
            StyleNode::Dynamic(style) => {
                let ctx = Context::new(props, tree.keys(), tree.values());
                Resolution::Leaf(style.call(&ctx))
            }
            StyleNode::Branch(branch) => Resolution::Intermediate(
                branch.names().map(|name| child_path(path, name)).collect(),
            ),
        },
        Some(Found::Json(value)) => match value {
            Value::String(block) => Resolution::Leaf(Declarations::Block(block.clone())),
            Value::Object(map) => Resolution::Intermediate(
                map.keys().map(|name| child_path(path, name)).collect(),
            ),
            Value::Array(items) => Resolution::Intermediate(
                (0..items.len())
                    .map(|i| child_path(path, &i.to_string()))
                    .collect(),
            ),
            other => Resolution::Leaf(Declarations::Block(other.to_string())),
        },
    };
    tracing::debug!(path, outcome = resolution.kind(), "resolved cog path");
    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn tree() -> StyleTree {
        StyleTree::new()
            .with_keys(json!({ "fg": "color" }))
            .with_values(json!({
                "colors": { "primary": "#ffcc00", "muted": "#888" },
                "radius": 4,
                "stack": ["a", "b"]
            }))
            .add("button.primary", "color: blue;")
            .add("button.ghost", "color: gray;")
            .add_fn("text.tone", |ctx| {
                let color = if ctx.flag("muted") {
                    ctx.value_str("colors.muted")
                } else {
                    ctx.value_str("colors.primary")
                };
                Declarations::list([(ctx.key("fg"), color.unwrap_or("inherit"))])
            })
    }

    #[test]
    fn test_resolve_missing() {
        let t = tree();
        assert_eq!(resolve(&t, "button.danger", &json!({})), Resolution::Missing);
        assert_eq!(resolve(&t, "nothing", &json!({})), Resolution::Missing);
        assert_eq!(resolve(&t, "", &json!({})), Resolution::Missing);
    }

    #[test]
    fn test_resolve_text_leaf() {
        assert_eq!(
            resolve(&tree(), "button.primary", &json!({})),
            Resolution::Leaf(Declarations::from("color: blue;"))
        );
    }

    #[test]
    fn test_resolve_branch_lists_child_paths() {
        assert_eq!(
            resolve(&tree(), "button", &json!({})),
            Resolution::Intermediate(vec![
                "button.primary".to_string(),
                "button.ghost".to_string()
            ])
        );
    }

    #[test]
    fn test_resolve_dynamic_leaf_uses_props() {
        let t = tree();
        assert_eq!(
            resolve(&t, "text.tone", &json!({})),
            Resolution::Leaf(Declarations::list([("color", "#ffcc00")]))
        );
        assert_eq!(
            resolve(&t, "text.tone", &json!({ "muted": true })),
            Resolution::Leaf(Declarations::list([("color", "#888")]))
        );
    }

    #[test]
    fn test_resolve_calls_dynamic_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let t = StyleTree::new().add_fn("counted", move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Declarations::from("")
        });

        resolve(&t, "counted", &json!({}));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_values_entries() {
        let t = tree();
        assert_eq!(
            resolve(&t, "values.colors.primary", &json!({})),
            Resolution::Leaf(Declarations::from("#ffcc00"))
        );
        assert_eq!(
            resolve(&t, "values.radius", &json!({})),
            Resolution::Leaf(Declarations::from("4"))
        );
        assert_eq!(
            resolve(&t, "values.colors", &json!({})),
            Resolution::Intermediate(vec![
                "values.colors.primary".to_string(),
                "values.colors.muted".to_string()
            ])
        );
        assert_eq!(
            resolve(&t, "values.stack", &json!({})),
            Resolution::Intermediate(vec![
                "values.stack.0".to_string(),
                "values.stack.1".to_string()
            ])
        );
    }

    #[test]
    fn test_resolution_kind() {
        assert_eq!(Resolution::Missing.kind(), "missing");
        assert_eq!(Resolution::Intermediate(vec![]).kind(), "intermediate");
        assert_eq!(Resolution::Leaf(Declarations::from("")).kind(), "leaf");
    }
}
