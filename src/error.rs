//! Errors raised while resolving cogs and loading style trees.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by the [`CogStyle`](crate::CogStyle) entry points.
///
/// Each entry point keeps its own wording for a missing path, so the three
/// not-found variants are intentionally distinct. Use
/// [`CogError::is_not_found`] to treat them alike.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum CogError {
    /// `styled_class` was given a path with nothing behind it.
    #[error("The cog '{path}' does not exist.")]
    CogNotFound { path: String },

    /// `raw_declarations` was given a path with nothing behind it.
    #[error("Invalid style path {path}. Check the path and try again.")]
    InvalidStylePath { path: String },

    /// `named_value` found nothing under `values.<path>`.
    #[error("Invalid string path {path}. Check the path and try again.")]
    InvalidValuePath { path: String },

    /// The path stops at a branch instead of a leaf.
    ///
    /// `children` holds the full child paths (`path.child`) in tree order.
    #[error(
        "Path to string cog expected. You selected the cog object '{path}'. \
         Chances are you meant to select one of its child keys instead ({})",
        .children.join(", ")
    )]
    IntermediateNodeSelected { path: String, children: Vec<String> },

    /// A dynamic cog produced a declaration without a usable key.
    ///
    /// `partial` is the block accumulated so far followed by the offending
    /// declaration.
    #[error("ERROR undefined key detected. {partial}")]
    MalformedDeclarationKey { partial: String },

    /// Props could not be converted into a JSON value.
    #[error("cog props could not be serialized: {0}")]
    Props(String),
}

impl CogError {
    /// Returns true for any of the path-not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CogError::CogNotFound { .. }
                | CogError::InvalidStylePath { .. }
                | CogError::InvalidValuePath { .. }
        )
    }
}

/// Error returned when a style tree cannot be built from a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("failed to parse YAML style tree: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON style tree: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read style tree '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is not one of `.yaml`, `.yml` or `.json`.
    #[error("unknown style tree format for '{}'", .path.display())]
    UnknownFormat { path: PathBuf },

    /// The document (or a node that must be a branch) is not a mapping.
    #[error("style tree must be a mapping, found {kind}")]
    NotAMapping { kind: &'static str },

    /// Only strings and mappings may appear outside `keys` and `values`.
    #[error("unsupported {kind} at '{path}': cogs must be strings or mappings")]
    UnsupportedNode { path: String, kind: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cog_not_found_display() {
        let err = CogError::CogNotFound {
            path: "button.primary".to_string(),
        };
        assert_eq!(err.to_string(), "The cog 'button.primary' does not exist.");
    }

    #[test]
    fn test_not_found_wordings_differ() {
        let cog = CogError::CogNotFound { path: "a".into() }.to_string();
        let style = CogError::InvalidStylePath { path: "a".into() }.to_string();
        let value = CogError::InvalidValuePath { path: "a".into() }.to_string();

        assert!(cog.contains("does not exist"));
        assert!(style.contains("Invalid style path a"));
        assert!(value.contains("Invalid string path a"));
    }

    #[test]
    fn test_intermediate_display_lists_children() {
        let err = CogError::IntermediateNodeSelected {
            path: "button".to_string(),
            children: vec!["button.primary".to_string(), "button.ghost".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("cog object 'button'"));
        assert!(msg.ends_with("(button.primary, button.ghost)"));
    }

    #[test]
    fn test_malformed_key_display() {
        let err = CogError::MalformedDeclarationKey {
            partial: "--cog-name: a;undefined:red;".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "ERROR undefined key detected. --cog-name: a;undefined:red;"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(CogError::CogNotFound { path: "a".into() }.is_not_found());
        assert!(CogError::InvalidValuePath { path: "a".into() }.is_not_found());
        assert!(!CogError::Props("bad".into()).is_not_found());
    }

    #[test]
    fn test_unsupported_node_display() {
        let err = LoadError::UnsupportedNode {
            path: "button.size".to_string(),
            kind: "number",
        };
        let msg = err.to_string();
        assert!(msg.contains("number"));
        assert!(msg.contains("button.size"));
    }
}
