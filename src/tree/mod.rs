//! Style trees: cog nodes plus the auxiliary `keys` and `values` maps.
//!
//! - [`StyleTree`]: the immutable tree cogs are resolved from
//! - [`StyleNode`]: text cogs, dynamic cogs, and branches
//! - [`Found`]: the raw result of a path lookup
//!
//! Trees are built in code with [`StyleTree::add`] or loaded from YAML/JSON
//! documents with [`StyleTree::from_yaml`], [`StyleTree::from_json`] and
//! [`StyleTree::from_file`].

mod load;
mod node;
#[allow(clippy::module_inception)]
mod tree;

pub use node::{Branch, DynamicStyle, StyleNode};
pub use tree::{Found, StyleTree, KEYS_MEMBER, VALUES_MEMBER};
