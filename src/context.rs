//! The bundle handed to dynamic cogs.

use serde_json::Value;

use crate::path::json_lookup;

/// Everything a dynamic cog can read while it is being resolved.
///
/// A context is built fresh for every resolution. It borrows the caller's
/// props and the tree's auxiliary `keys` and `values` maps and owns nothing.
///
/// The one-letter accessors ([`p`](Self::p), [`k`](Self::k), [`v`](Self::v))
/// return the same data as their long forms, for terse style functions.
///
/// # Example
///
/// ```rust
/// use cogstyle::{Context, Declarations};
/// use serde_json::json;
///
/// let props = json!({ "active": true });
/// let keys = json!({ "bg": "background-color" });
/// let values = json!({ "colors": { "primary": "#ffcc00" } });
/// let ctx = Context::new(&props, &keys, &values);
///
/// let decls = Declarations::list([(
///     ctx.key("bg"),
///     ctx.value_str("colors.primary").unwrap_or("transparent"),
/// )]);
/// assert_eq!(decls.entries().map(|e| e.len()), Some(1));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    props: &'a Value,
    keys: &'a Value,
    values: &'a Value,
}

impl<'a> Context<'a> {
    pub fn new(props: &'a Value, keys: &'a Value, values: &'a Value) -> Self {
        Self {
            props,
            keys,
            values,
        }
    }

    /// The caller-supplied props. An empty object when none were given.
    pub fn props(&self) -> &'a Value {
        self.props
    }

    /// The tree's `keys` map.
    pub fn keys(&self) -> &'a Value {
        self.keys
    }

    /// The tree's `values` map.
    pub fn values(&self) -> &'a Value {
        self.values
    }

    pub fn p(&self) -> &'a Value {
        self.props
    }

    pub fn k(&self) -> &'a Value {
        self.keys
    }

    pub fn v(&self) -> &'a Value {
        self.values
    }

    /// Looks up a prop by dotted path.
    pub fn prop(&self, path: &str) -> Option<&'a Value> {
        json_lookup(self.props, path)
    }

    /// Returns true if the prop exists and is JSON `true`.
    pub fn flag(&self, path: &str) -> bool {
        matches!(self.prop(path), Some(Value::Bool(true)))
    }

    /// Looks up a declaration key name in `keys`.
    ///
    /// Returns `None` when the entry is absent or not a string. Passing the
    /// result straight into a [`Declaration`](crate::Declaration) keeps a
    /// missing key detectable at stringification time.
    pub fn key(&self, path: &str) -> Option<&'a str> {
        json_lookup(self.keys, path).and_then(Value::as_str)
    }

    /// Looks up an entry in `values` by dotted path.
    pub fn value(&self, path: &str) -> Option<&'a Value> {
        json_lookup(self.values, path)
    }

    /// Looks up a string entry in `values` by dotted path.
    pub fn value_str(&self, path: &str) -> Option<&'a str> {
        self.value(path).and_then(Value::as_str)
    }
}
