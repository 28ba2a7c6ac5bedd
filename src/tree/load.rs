//! Building style trees from YAML and JSON documents.
//!
//! A document is a mapping. Its `keys` and `values` members become the
//! auxiliary maps as-is; every other member is read as cogs:
//!
//! ```yaml
//! keys:
//!   bg: background-color
//! values:
//!   colors:
//!     primary: "#ffcc00"
//! button:
//!   primary: "color: #fff; background-color: #06c;"
//!   ghost: "color: #06c; background-color: transparent;"
//! ```
//!
//! Strings become text cogs and mappings become branches. Dynamic cogs cannot
//! be expressed in a document; attach them afterwards with
//! [`StyleTree::add_fn`].

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use super::node::{Branch, StyleNode};
use super::tree::{StyleTree, KEYS_MEMBER, VALUES_MEMBER};
use crate::error::LoadError;
use crate::path::child_path;

impl StyleTree {
    /// Parses a tree from a YAML document.
    pub fn from_yaml(source: &str) -> Result<Self, LoadError> {
        let value: Value = serde_yaml::from_str(source)?;
        Self::from_value(value)
    }

    /// Parses a tree from a JSON document.
    pub fn from_json(source: &str) -> Result<Self, LoadError> {
        let value: Value = serde_json::from_str(source)?;
        Self::from_value(value)
    }

    /// Reads a tree from a file, choosing the format by extension.
    ///
    /// `.yaml` and `.yml` are read as YAML, `.json` as JSON.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let parse: fn(&str) -> Result<Self, LoadError> = match extension.as_deref() {
            Some("yaml") | Some("yml") => Self::from_yaml,
            Some("json") => Self::from_json,
            _ => {
                return Err(LoadError::UnknownFormat {
                    path: path.to_path_buf(),
                })
            }
        };

        let source = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = parse(&source)?;
        tracing::debug!(path = %path.display(), cogs = tree.root().len(), "loaded style tree");
        Ok(tree)
    }

    /// Builds a tree from an already parsed JSON value.
    ///
    /// `null`, which is what an empty document parses to, is an empty tree.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        if value.is_null() {
            return Ok(StyleTree::new());
        }
        let Value::Object(members) = value else {
            return Err(LoadError::NotAMapping {
                kind: kind_of(&value),
            });
        };

        let mut tree = StyleTree::new();
        let mut root = Branch::new();
        for (name, member) in members {
            match name.as_str() {
                KEYS_MEMBER => tree = tree.with_keys(auxiliary(member)?),
                VALUES_MEMBER => tree = tree.with_values(auxiliary(member)?),
                _ => {
                    let node = to_node(&name, member)?;
                    root.insert(name, node);
                }
            }
        }
        tree.root = root;
        Ok(tree)
    }
}

impl<'de> Deserialize<'de> for StyleTree {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        StyleTree::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// An absent (`null`) auxiliary member stays an empty map.
fn auxiliary(value: Value) -> Result<Value, LoadError> {
    match value {
        Value::Null => Ok(Value::Object(Map::new())),
        Value::Object(_) => Ok(value),
        other => Err(LoadError::NotAMapping {
            kind: kind_of(&other),
        }),
    }
}

fn to_node(path: &str, value: Value) -> Result<StyleNode, LoadError> {
    match value {
        Value::String(block) => Ok(StyleNode::Text(block)),
        Value::Object(children) => {
            let mut branch = Branch::new();
            for (name, child) in children {
                let node = to_node(&child_path(path, &name), child)?;
                branch.insert(name, node);
            }
            Ok(StyleNode::Branch(branch))
        }
        other => Err(LoadError::UnsupportedNode {
            path: path.to_string(),
            kind: kind_of(&other),
        }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
