//! MiniJinja function registration.
//!
//! Exposes a [`CogStyle`] to templates:
//!
//! | Function | Returns |
//! |----------|---------|
//! | `cog(path, props?)` | class name, like [`CogStyle::styled_class_with`] |
//! | `raw_cog(path, props?)` | declaration block, like [`CogStyle::raw_declarations_with`] |
//! | `cog_value(path)` | entry of `values`, like [`CogStyle::named_value`] |
//! | `cogs(paths)` | space-joined class names, like [`CogStyle::combined_classes`] |
//!
//! ```rust
//! use std::sync::Arc;
//! use cogstyle::{register_functions, CogStyle, StyleTree};
//! use minijinja::Environment;
//!
//! let tree = StyleTree::new().add("text.muted", "color: gray;");
//! let cogs = Arc::new(CogStyle::new(tree, |_: &str| "muted".to_string()));
//!
//! let mut env = Environment::new();
//! register_functions(&mut env, cogs);
//! let html = env
//!     .render_str(r#"<p class="{{ cog('text.muted') }}">hi</p>"#, ())
//!     .unwrap();
//! assert_eq!(html, r#"<p class="muted">hi</p>"#);
//! ```

use std::sync::Arc;

use minijinja::{Environment, Error, ErrorKind, Value};

use crate::cogstyle::CogStyle;
use crate::error::CogError;

/// Registers the cog functions on a minijinja environment.
pub fn register_functions(env: &mut Environment<'_>, cogs: Arc<CogStyle>) {
    let styles = Arc::clone(&cogs);
    env.add_function(
        "cog",
        move |path: String, props: Option<Value>| -> Result<String, Error> {
            let result = match props {
                Some(props) => styles.styled_class_with(&path, &props),
                None => styles.styled_class(&path),
            };
            result.map_err(template_error)
        },
    );

    let styles = Arc::clone(&cogs);
    env.add_function(
        "raw_cog",
        move |path: String, props: Option<Value>| -> Result<String, Error> {
            let result = match props {
                Some(props) => styles.raw_declarations_with(&path, &props),
                None => styles.raw_declarations(&path),
            };
            result.map_err(template_error)
        },
    );

    let styles = Arc::clone(&cogs);
    env.add_function("cog_value", move |path: String| -> Result<Value, Error> {
        styles
            .named_value(&path)
            .map(Value::from_serialize)
            .map_err(template_error)
    });

    env.add_function("cogs", move |paths: Vec<String>| -> Result<String, Error> {
        cogs.combined_classes(&paths).map_err(template_error)
    });
}

fn template_error(err: CogError) -> Error {
    Error::new(ErrorKind::InvalidOperation, err.to_string())
}
