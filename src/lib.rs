//! # Cogstyle - composable styles addressed by path
//!
//! Cogstyle resolves *cogs*, named units of style reached through dotted
//! paths into a style tree, into declaration blocks and class names.
//!
//! ## Concepts
//!
//! - A **declaration** is a `key:value` pair, such as `color:#ffcc00`.
//! - A **cog** is a leaf of the [`StyleTree`]: either a literal block of CSS
//!   text, or a function of props that returns declarations.
//! - A **declaration block** is what a cog resolves to, always opened by a
//!   debug declaration naming the cog: `--cog-name: button.primary;`.
//! - The tree carries two auxiliary maps, `keys` and `values`, that every
//!   dynamic cog can read through its [`Context`].
//!
//! Class generation itself belongs to the styling backend and is plugged in
//! through [`ClassInjector`].
//!
//! ## Quick Start
//!
//! ```rust
//! use cogstyle::{CogStyle, Declarations, StyleTree};
//! use serde_json::json;
//!
//! let tree = StyleTree::new()
//!     .with_keys(json!({ "bg": "background-color" }))
//!     .with_values(json!({ "colors": { "primary": "#ffcc00" } }))
//!     .add("text.muted", "color: gray;")
//!     .add_fn("button.primary", |ctx| {
//!         Declarations::list([
//!             (ctx.key("bg"), ctx.value_str("colors.primary").unwrap_or("none")),
//!             (Some("opacity"), if ctx.flag("disabled") { "0.5" } else { "1" }),
//!         ])
//!     });
//!
//! let cogs = CogStyle::with_hashed_names(tree);
//!
//! let block = cogs
//!     .raw_declarations_with("button.primary", &json!({ "disabled": true }))
//!     .unwrap();
//! assert_eq!(block, "--cog-name: button.primary;background-color:#ffcc00;opacity:0.5;");
//!
//! // Branches are not cogs
//! let err = cogs.styled_class("button").unwrap_err();
//! assert!(err.to_string().contains("button.primary"));
//!
//! let class = cogs.combined_classes(["text.muted", "button.primary"]).unwrap();
//! assert!(class.starts_with("css-"));
//! ```
//!
//! ## Loading Trees
//!
//! Static cogs and the auxiliary maps can come from YAML or JSON documents
//! (see [`StyleTree::from_yaml`]); dynamic cogs are added in code afterwards.
//!
//! ## Templates
//!
//! [`register_functions`] exposes the cog operations to MiniJinja templates.

mod cogstyle;
mod context;
mod declaration;
mod error;
mod inject;
mod path;
mod resolve;
mod template;
pub mod tree;

pub use cogstyle::CogStyle;
pub use context::Context;
pub use declaration::{
    cog_name_declaration, stringify, Declaration, DeclarationKey, DeclarationValue, Declarations,
    COG_NAME_PROPERTY,
};
pub use error::{CogError, LoadError};
pub use inject::{ClassInjector, HashedClassNames};
pub use resolve::{resolve, Resolution};
pub use template::register_functions;
pub use tree::{Branch, DynamicStyle, Found, StyleNode, StyleTree};
