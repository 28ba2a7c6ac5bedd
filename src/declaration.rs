//! Declarations and their stringification into declaration blocks.
//!
//! A cog resolves either to a literal block of CSS text or to an ordered list
//! of `key:value` declarations. Both are folded into one block that starts
//! with a debug declaration naming the cog:
//!
//! ```text
//! --cog-name: button.primary;color:#fff;background-color:#06c;
//! ```
//!
//! Declarations are concatenated in order. Nothing is merged, de-duplicated,
//! escaped or validated as CSS.

use std::fmt;

use serde_json::Value;

use crate::error::CogError;

/// Name of the debug declaration prepended to every block.
pub const COG_NAME_PROPERTY: &str = "--cog-name";

/// Rendering of a missing key, and a key text that is rejected as well.
const UNDEFINED_KEY: &str = "undefined";

/// A single `key:value` pair.
///
/// The key may be missing, which happens when a dynamic cog looks up a key
/// name that its tree does not define. Such a declaration is rejected when the
/// block is stringified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    key: Option<String>,
    value: String,
}

impl Declaration {
    pub fn new(key: impl Into<String>, value: impl DeclarationValue) -> Self {
        Self {
            key: Some(key.into()),
            value: value.into_value(),
        }
    }

    /// Creates a declaration whose key may be missing.
    pub fn maybe(key: Option<impl Into<String>>, value: impl DeclarationValue) -> Self {
        Self {
            key: key.map(Into::into),
            value: value.into_value(),
        }
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn has_usable_key(&self) -> bool {
        matches!(self.key.as_deref(), Some(key) if key != UNDEFINED_KEY)
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = self.key.as_deref().unwrap_or(UNDEFINED_KEY);
        write!(f, "{}:{};", key, self.value)
    }
}

/// Anything usable as the key half of a declaration tuple.
///
/// Implemented for string types and for `Option`s of them, so lookups like
/// [`Context::key`](crate::Context::key) can be used directly.
pub trait DeclarationKey {
    fn into_key(self) -> Option<String>;
}

impl DeclarationKey for &str {
    fn into_key(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl DeclarationKey for String {
    fn into_key(self) -> Option<String> {
        Some(self)
    }
}

impl DeclarationKey for &String {
    fn into_key(self) -> Option<String> {
        Some(self.clone())
    }
}

impl DeclarationKey for Option<&str> {
    fn into_key(self) -> Option<String> {
        self.map(str::to_string)
    }
}

impl DeclarationKey for Option<String> {
    fn into_key(self) -> Option<String> {
        self
    }
}

/// Anything usable as the value half of a declaration tuple.
///
/// JSON strings are written without their quotes, so values looked up
/// through [`Context`](crate::Context) land in the block as-is. Other JSON
/// values use their JSON rendering.
pub trait DeclarationValue {
    fn into_value(self) -> String;
}

impl DeclarationValue for &str {
    fn into_value(self) -> String {
        self.to_string()
    }
}

impl DeclarationValue for String {
    fn into_value(self) -> String {
        self
    }
}

impl DeclarationValue for &String {
    fn into_value(self) -> String {
        self.clone()
    }
}

impl DeclarationValue for &Value {
    fn into_value(self) -> String {
        match self {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

impl DeclarationValue for Value {
    fn into_value(self) -> String {
        match self {
            Value::String(text) => text,
            other => other.to_string(),
        }
    }
}

macro_rules! display_value {
    ($($ty:ty),*) => {
        $(impl DeclarationValue for $ty {
            fn into_value(self) -> String {
                self.to_string()
            }
        })*
    };
}

display_value!(char, bool, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<K: DeclarationKey, V: DeclarationValue> From<(K, V)> for Declaration {
    fn from((key, value): (K, V)) -> Self {
        Self {
            key: key.into_key(),
            value: value.into_value(),
        }
    }
}

/// What a cog leaf resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Declarations {
    /// Literal CSS text, used as-is.
    Block(String),
    /// Ordered declarations, folded into `key:value;` pairs.
    List(Vec<Declaration>),
}

impl Declarations {
    /// Builds a declaration list from pairs or [`Declaration`]s.
    pub fn list<I, D>(items: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Declaration>,
    {
        Declarations::List(items.into_iter().map(Into::into).collect())
    }

    /// Returns the declarations of a list, or `None` for a literal block.
    pub fn entries(&self) -> Option<&[Declaration]> {
        match self {
            Declarations::Block(_) => None,
            Declarations::List(items) => Some(items),
        }
    }
}

impl From<&str> for Declarations {
    fn from(block: &str) -> Self {
        Declarations::Block(block.to_string())
    }
}

impl From<String> for Declarations {
    fn from(block: String) -> Self {
        Declarations::Block(block)
    }
}

impl From<Vec<Declaration>> for Declarations {
    fn from(items: Vec<Declaration>) -> Self {
        Declarations::List(items)
    }
}

impl FromIterator<Declaration> for Declarations {
    fn from_iter<I: IntoIterator<Item = Declaration>>(iter: I) -> Self {
        Declarations::List(iter.into_iter().collect())
    }
}

/// Renders the debug declaration that opens every block.
pub fn cog_name_declaration(path: &str) -> String {
    format!("{}: {};", COG_NAME_PROPERTY, path)
}

/// Folds resolved declarations into a declaration block for `path`.
///
/// # Errors
///
/// Returns [`CogError::MalformedDeclarationKey`] on the first declaration
/// whose key is missing or is the text `undefined`. The error carries the
/// block accumulated so far plus the offending declaration.
pub fn stringify(declarations: &Declarations, path: &str) -> Result<String, CogError> {
    let mut block = cog_name_declaration(path);
    match declarations {
        Declarations::Block(text) => block.push_str(text),
        Declarations::List(items) => {
            for declaration in items {
                block.push_str(&declaration.to_string());
                if !declaration.has_usable_key() {
                    tracing::warn!(path, partial = %block, "cog declaration has undefined key");
                    return Err(CogError::MalformedDeclarationKey { partial: block });
                }
            }
        }
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stringify_block_prefixes_cog_name() {
        let decls = Declarations::from("color: red;");
        assert_eq!(
            stringify(&decls, "text.alert").unwrap(),
            "--cog-name: text.alert;color: red;"
        );
    }

    #[test]
    fn test_stringify_empty_block() {
        let decls = Declarations::from("");
        assert_eq!(stringify(&decls, "empty").unwrap(), "--cog-name: empty;");
    }

    #[test]
    fn test_stringify_list_in_order() {
        let decls = Declarations::list([("color", "red"), ("margin", "0")]);
        assert_eq!(
            stringify(&decls, "box").unwrap(),
            "--cog-name: box;color:red;margin:0;"
        );
    }

    #[test]
    fn test_stringify_keeps_duplicate_keys() {
        let decls = Declarations::list([("color", "red"), ("color", "blue")]);
        assert_eq!(
            stringify(&decls, "dup").unwrap(),
            "--cog-name: dup;color:red;color:blue;"
        );
    }

    #[test]
    fn test_stringify_does_not_escape_values() {
        let decls = Declarations::list([("content", "'a;b'")]);
        assert_eq!(
            stringify(&decls, "c").unwrap(),
            "--cog-name: c;content:'a;b';"
        );
    }

    #[test]
    fn test_stringify_missing_key_fails() {
        let decls = Declarations::list([(Some("color"), "red"), (None, "blue")]);
        let err = stringify(&decls, "broken").unwrap_err();
        assert_eq!(
            err,
            CogError::MalformedDeclarationKey {
                partial: "--cog-name: broken;color:red;undefined:blue;".to_string()
            }
        );
    }

    #[test]
    fn test_stringify_literal_undefined_key_fails() {
        let decls = Declarations::list([("undefined", "blue"), ("color", "red")]);
        let err = stringify(&decls, "broken").unwrap_err();
        assert_eq!(
            err.to_string(),
            "ERROR undefined key detected. --cog-name: broken;undefined:blue;"
        );
    }

    #[test]
    fn test_declaration_accessors() {
        let decl = Declaration::new("padding", 4);
        assert_eq!(decl.key(), Some("padding"));
        assert_eq!(decl.value(), "4");
        assert_eq!(decl.to_string(), "padding:4;");

        let missing = Declaration::maybe(None::<String>, "x");
        assert_eq!(missing.key(), None);
        assert_eq!(missing.to_string(), "undefined:x;");
    }

    #[test]
    fn test_json_string_values_are_unquoted() {
        let decls = Declarations::list([
            ("color", json!("red")),
            ("z-index", json!(3)),
        ]);
        assert_eq!(
            stringify(&decls, "layer").unwrap(),
            "--cog-name: layer;color:red;z-index:3;"
        );

        let width = json!("10px");
        assert_eq!(Declaration::new("width", &width).value(), "10px");
    }

    #[test]
    fn test_entries() {
        assert!(Declarations::from("a:b;").entries().is_none());
        let list: Declarations = vec![Declaration::new("a", "b")].into_iter().collect();
        assert_eq!(list.entries().map(|e| e.len()), Some(1));
    }
}
