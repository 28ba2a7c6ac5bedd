//! Dotted path handling.
//!
//! Paths address nodes with `.`-separated segments (`button.primary.hover`).
//! An empty path, or one with an empty segment (`a..b`, `.a`, `a.`), never
//! resolves to anything.

use serde_json::Value;

/// Splits a dotted path into its segments.
///
/// Returns `None` when the path is empty or contains an empty segment.
pub(crate) fn segments(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let parts: Vec<&str> = path.split('.').collect();
    if parts.iter().any(|s| s.is_empty()) {
        return None;
    }
    Some(parts)
}

/// Walks a JSON value along already-split segments.
///
/// Objects are indexed by key, arrays by decimal index. `null` counts as
/// absent, both at the end of the walk and along the way.
pub(crate) fn json_at<'v>(root: &'v Value, segments: &[&str]) -> Option<&'v Value> {
    let mut current = root;
    for segment in segments {
        current = match current {
            Value::Object(map) => map.get(*segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Looks up a dotted path inside a JSON value.
pub(crate) fn json_lookup<'v>(root: &'v Value, path: &str) -> Option<&'v Value> {
    json_at(root, &segments(path)?)
}

/// Joins a parent path and a child name.
pub(crate) fn child_path(parent: &str, child: &str) -> String {
    format!("{}.{}", parent, child)
}
