//! Turning declaration blocks into class names.
//!
//! Generating and registering stylesheet classes is the job of whatever
//! styling backend the application uses. This crate only needs a stable
//! mapping from a block to a class name, expressed by [`ClassInjector`].

use sha2::{Digest, Sha256};

/// Maps a declaration block to a class name.
///
/// Implementations must be deterministic: the same block always yields the
/// same class name, and injecting a block twice must not register it twice.
///
/// Any `Fn(&str) -> String` closure is an injector:
///
/// ```rust
/// use cogstyle::{CogStyle, StyleTree};
///
/// let tree = StyleTree::new().add("text.muted", "color: gray;");
/// let cogs = CogStyle::new(tree, |block: &str| format!("c{}", block.len()));
/// assert_eq!(cogs.styled_class("text.muted").unwrap(), "c35");
/// ```
pub trait ClassInjector: Send + Sync {
    fn inject(&self, block: &str) -> String;
}

impl<F> ClassInjector for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn inject(&self, block: &str) -> String {
        self(block)
    }
}

/// Number of hex digits of the digest kept in a class name.
const HASH_LEN: usize = 10;

/// Derives class names from a content hash of the block.
///
/// Names look like `css-1a2b3c4d5e`: a prefix, a dash, and the first ten hex
/// digits of the block's SHA-256 digest. Nothing is registered anywhere, so
/// this is mostly useful for tests and for server-side rendering where the
/// blocks are collected separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashedClassNames {
    prefix: String,
}

impl HashedClassNames {
    pub fn new() -> Self {
        Self::with_prefix("css")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for HashedClassNames {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassInjector for HashedClassNames {
    fn inject(&self, block: &str) -> String {
        let digest = Sha256::digest(block.as_bytes());
        let mut hash = hex::encode(digest);
        hash.truncate(HASH_LEN);
        format!("{}-{}", self.prefix, hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hashed_names_are_stable() {
        let names = HashedClassNames::new();
        let a = names.inject("--cog-name: a;color: red;");
        let b = names.inject("--cog-name: a;color: red;");
        assert_eq!(a, b);
        assert!(a.starts_with("css-"));
        assert_eq!(a.len(), "css-".len() + HASH_LEN);
    }

    #[test]
    fn test_hashed_names_differ_per_block() {
        let names = HashedClassNames::new();
        assert_ne!(
            names.inject("--cog-name: a;color: red;"),
            names.inject("--cog-name: b;color: red;")
        );
    }

    #[test]
    fn test_hashed_names_known_digest() {
        // sha256("") = e3b0c44298fc1c149afbf4c8996fb924...
        let names = HashedClassNames::with_prefix("cog");
        assert_eq!(names.inject(""), "cog-e3b0c44298");
        assert_eq!(names.prefix(), "cog");
    }

    #[test]
    fn test_closure_injector() {
        let upper = |block: &str| block.to_uppercase();
        assert_eq!(upper.inject("abc"), "ABC");
    }
}
