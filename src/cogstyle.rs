//! The public entry points over a style tree.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::declaration::stringify;
use crate::error::CogError;
use crate::inject::{ClassInjector, HashedClassNames};
use crate::path::json_lookup;
use crate::resolve::{resolve, Resolution};
use crate::tree::StyleTree;

/// Resolves cogs from one style tree into declaration blocks and classes.
///
/// A `CogStyle` owns an immutable [`StyleTree`] and the [`ClassInjector`] that
/// turns declaration blocks into class names. It keeps no state between
/// calls: the same arguments always produce the same output.
///
/// Every operation that resolves a cog has a props-less form and a `_with`
/// form that accepts any serializable props. Props are handed to dynamic
/// cogs as JSON; omitted props are an empty object.
///
/// # Example
///
/// ```rust
/// use cogstyle::{CogStyle, Declarations, StyleTree};
/// use serde_json::json;
///
/// let tree = StyleTree::new()
///     .with_keys(json!({ "bg": "background-color" }))
///     .with_values(json!({ "brand": "#ffcc00" }))
///     .add("text.muted", "color: gray;")
///     .add_fn("surface", |ctx| {
///         let color = if ctx.flag("brand") { ctx.value_str("brand") } else { None };
///         Declarations::list([(ctx.key("bg"), color.unwrap_or("white"))])
///     });
///
/// let cogs = CogStyle::with_hashed_names(tree);
///
/// assert_eq!(
///     cogs.raw_declarations("text.muted").unwrap(),
///     "--cog-name: text.muted;color: gray;"
/// );
/// assert_eq!(
///     cogs.raw_declarations_with("surface", &json!({ "brand": true })).unwrap(),
///     "--cog-name: surface;background-color:#ffcc00;"
/// );
/// assert_eq!(cogs.named_str("brand").unwrap(), "#ffcc00");
///
/// let classes = cogs.combined_classes(["text.muted", "surface"]).unwrap();
/// assert_eq!(classes.split(' ').count(), 2);
/// ```
#[derive(Clone)]
pub struct CogStyle {
    tree: StyleTree,
    injector: Arc<dyn ClassInjector>,
}

impl CogStyle {
    pub fn new<I>(tree: StyleTree, injector: I) -> Self
    where
        I: ClassInjector + 'static,
    {
        Self {
            tree,
            injector: Arc::new(injector),
        }
    }

    /// Creates a `CogStyle` that names classes with [`HashedClassNames`].
    pub fn with_hashed_names(tree: StyleTree) -> Self {
        Self::new(tree, HashedClassNames::new())
    }

    /// Resolves a cog and returns the class name for its declaration block.
    ///
    /// # Errors
    ///
    /// - [`CogError::CogNotFound`] if nothing lives at `path`
    /// - [`CogError::IntermediateNodeSelected`] if `path` selects a branch
    /// - [`CogError::MalformedDeclarationKey`] if a dynamic cog returned a
    ///   declaration without a key; nothing is injected in that case
    pub fn styled_class(&self, path: &str) -> Result<String, CogError> {
        self.class_for(path, &empty_props())
    }

    /// Like [`styled_class`](Self::styled_class), with props for dynamic cogs.
    pub fn styled_class_with<P>(&self, path: &str, props: &P) -> Result<String, CogError>
    where
        P: Serialize + ?Sized,
    {
        self.class_for(path, &to_props(props)?)
    }

    /// Resolves a cog and returns its declaration block without injecting it.
    ///
    /// # Errors
    ///
    /// Same as [`styled_class`](Self::styled_class), except that a missing
    /// path is reported as [`CogError::InvalidStylePath`].
    pub fn raw_declarations(&self, path: &str) -> Result<String, CogError> {
        self.block_for(path, &empty_props(), invalid_style_path)
    }

    /// Like [`raw_declarations`](Self::raw_declarations), with props for
    /// dynamic cogs.
    pub fn raw_declarations_with<P>(&self, path: &str, props: &P) -> Result<String, CogError>
    where
        P: Serialize + ?Sized,
    {
        self.block_for(path, &to_props(props)?, invalid_style_path)
    }

    /// Looks up `path` in the tree's `values` map.
    ///
    /// Only `values` is consulted: a cog at the same path elsewhere in the
    /// tree is irrelevant. Nested objects are returned as they are.
    ///
    /// # Errors
    ///
    /// Returns [`CogError::InvalidValuePath`] if the entry is absent or null.
    pub fn named_value(&self, path: &str) -> Result<&Value, CogError> {
        json_lookup(self.tree.values(), path).ok_or_else(|| CogError::InvalidValuePath {
            path: path.to_string(),
        })
    }

    /// Like [`named_value`](Self::named_value), for entries that are strings.
    ///
    /// # Errors
    ///
    /// Returns [`CogError::InvalidValuePath`] if the entry is absent or is
    /// not a string.
    pub fn named_str(&self, path: &str) -> Result<&str, CogError> {
        self.named_value(path)?
            .as_str()
            .ok_or_else(|| CogError::InvalidValuePath {
                path: path.to_string(),
            })
    }

    /// Resolves several cogs and joins their class names with spaces.
    ///
    /// # Errors
    ///
    /// Fails with the error of the first path that
    /// [`styled_class`](Self::styled_class) rejects.
    pub fn combined_classes<I, S>(&self, paths: I) -> Result<String, CogError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut classes = String::new();
        for path in paths {
            classes.push(' ');
            classes.push_str(&self.styled_class(path.as_ref())?);
        }
        Ok(classes.trim().to_string())
    }

    fn class_for(&self, path: &str, props: &Value) -> Result<String, CogError> {
        let block = self.block_for(path, props, cog_not_found)?;
        let class = self.injector.inject(&block);
        tracing::debug!(path, class = %class, "injected cog");
        Ok(class)
    }

    fn block_for(
        &self,
        path: &str,
        props: &Value,
        missing: fn(&str) -> CogError,
    ) -> Result<String, CogError> {
        match resolve(&self.tree, path, props) {
            Resolution::Missing => Err(missing(path)),
            Resolution::Intermediate(children) => Err(CogError::IntermediateNodeSelected {
                path: path.to_string(),
                children,
            }),
            Resolution::Leaf(declarations) => stringify(&declarations, path),
        }
    }
}

impl fmt::Debug for CogStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CogStyle")
            .field("tree", &self.tree)
            .finish_non_exhaustive()
    }
}

fn cog_not_found(path: &str) -> CogError {
    CogError::CogNotFound {
        path: path.to_string(),
    }
}

fn invalid_style_path(path: &str) -> CogError {
    CogError::InvalidStylePath {
        path: path.to_string(),
    }
}

fn empty_props() -> Value {
    Value::Object(Map::new())
}

/// Serializes caller props. `null` (from `()` or `None`) means no props.
fn to_props<P: Serialize + ?Sized>(props: &P) -> Result<Value, CogError> {
    match serde_json::to_value(props) {
        Ok(Value::Null) => Ok(empty_props()),
        Ok(value) => Ok(value),
        Err(e) => Err(CogError::Props(e.to_string())),
    }
}
