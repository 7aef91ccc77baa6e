//! Dot-path lookup into decoded JSON
//!
//! A path such as `jah.ith.ber` addresses `{"jah": {"ith": {"ber": ...}}}`. When the
//! whole path is itself a key of the top-level object, that key wins over the
//! segmented traversal, so keys containing dots stay addressable.

use serde_json::Value;

/// Whether anything, including `null`, exists at `path`
pub fn has(tree: &Value, path: &str) -> bool {
    get(tree, path).is_some()
}

/// Returns the value at `path`, or `None` when a segment is missing or a
/// non-object is reached before the path is consumed
pub fn get<'a>(tree: &'a Value, path: &str) -> Option<&'a Value> {
    let root = tree.as_object()?;
    if let Some(value) = root.get(path) {
        return Some(value);
    }

    path.split('.')
        .try_fold(tree, |node, segment| node.as_object()?.get(segment))
}

/// Returns the value at `path`, falling back to `default`
pub fn get_or<'a>(tree: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(tree, path).unwrap_or(default)
}
